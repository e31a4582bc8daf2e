//! HTTP API Client
//!
//! Functions for communicating with the Cardio Guard REST API.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use cardio_guard::assessment::AssessmentInput;
use cardio_guard::envelope::{is_success, message_of};
use cardio_guard::forms::{ContactPayload, FeedbackPayload};
use cardio_guard::links::with_trailing_slash;
use cardio_guard::model::{
    CommentId, Coordinates, Credentials, Hospital, Post, PostDetail, PostDraft, PostId,
    ProfileUpdate, Registration, UserDetails,
};
use cardio_guard::risk::{Prediction, RiskLevel};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/";

/// Default contact endpoint
pub const DEFAULT_CONTACT_URL: &str = "http://localhost:8000/api/contact-us/";

/// Shown for anything that is not a server message
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

const API_BASE_KEY: &str = "cardio_guard_api_url";
const CONTACT_URL_KEY: &str = "cardio_guard_contact_url";

fn stored(key: &str) -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(key)
        .ok()?
        .filter(|v| !v.trim().is_empty())
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    with_trailing_slash(&stored(API_BASE_KEY).unwrap_or_else(|| DEFAULT_API_BASE.to_string()))
}

pub fn get_contact_url() -> String {
    stored(CONTACT_URL_KEY).unwrap_or_else(|| DEFAULT_CONTACT_URL.to_string())
}

fn endpoint(path: &str) -> String {
    format!("{}{}", get_api_base(), path)
}

fn authed(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", token))
}

// ============ Envelope ============

fn message_or(body: &Value, fallback: &str) -> String {
    message_of(body).unwrap_or_else(|| fallback.to_string())
}

fn field<T: DeserializeOwned>(body: &Value, key: &str) -> Result<T, String> {
    body.get(key)
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .ok_or_else(|| {
            web_sys::console::error_1(&format!("Response is missing `{}`", key).into());
            GENERIC_FAILURE.to_string()
        })
}

/// Decode a response. Transport errors become the generic message, an
/// error status or failure flag becomes the server's message.
async fn read(sent: Result<Response, gloo_net::Error>, require_success: bool) -> Result<Value, String> {
    let response = sent.map_err(|e| {
        web_sys::console::error_1(&format!("Network error: {}", e).into());
        GENERIC_FAILURE.to_string()
    })?;

    let body: Option<Value> = response.json().await.ok();

    if !response.ok() {
        return Err(body
            .as_ref()
            .and_then(message_of)
            .unwrap_or_else(|| GENERIC_FAILURE.to_string()));
    }

    let body = body.ok_or_else(|| GENERIC_FAILURE.to_string())?;
    if require_success && !is_success(&body) {
        return Err(message_or(&body, GENERIC_FAILURE));
    }
    Ok(body)
}

async fn send_json<T: serde::Serialize>(builder: RequestBuilder, body: &T) -> Result<Value, String> {
    let request = builder
        .json(body)
        .map_err(|e| format!("Request build error: {}", e))?;
    read(request.send().await, true).await
}

async fn send_form(builder: RequestBuilder, form: web_sys::FormData) -> Result<Value, String> {
    let request = builder
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?;
    read(request.send().await, true).await
}

fn form_data() -> Result<web_sys::FormData, String> {
    web_sys::FormData::new().map_err(|_| GENERIC_FAILURE.to_string())
}

// ============ Users ============

pub async fn login(credentials: &Credentials) -> Result<String, String> {
    let body = send_json(Request::post(&endpoint("users/user_login/")), credentials).await?;
    field(&body, "token")
}

/// Returns the server's confirmation message
pub async fn register(registration: &Registration) -> Result<String, String> {
    let body = send_json(Request::post(&endpoint("users/user_register/")), registration).await?;
    Ok(message_or(&body, "Registered successfully!"))
}

pub async fn user_details(token: &str) -> Result<UserDetails, String> {
    let request = authed(Request::get(&endpoint("users/user_details/")), token);
    let body = read(request.send().await, true).await?;
    field(&body, "user_details")
}

pub async fn edit_user_details(token: &str, update: &ProfileUpdate) -> Result<UserDetails, String> {
    let form = form_data()?;
    for (name, value) in update.form_fields() {
        form.append_with_str(name, &value)
            .map_err(|_| GENERIC_FAILURE.to_string())?;
    }

    let builder = authed(Request::post(&endpoint("users/edit_user_details/")), token);
    let body = send_form(builder, form).await?;
    field(&body, "user_details")
}

pub async fn edit_profile_picture(token: &str, picture: web_sys::File) -> Result<UserDetails, String> {
    let form = form_data()?;
    form.append_with_blob_and_filename("profile_picture", &picture, &picture.name())
        .map_err(|_| GENERIC_FAILURE.to_string())?;

    let builder = authed(Request::post(&endpoint("users/edit_profile_picture/")), token);
    let body = send_form(builder, form).await?;
    field(&body, "user_details")
}

// ============ Community ============

pub async fn list_posts(token: &str) -> Result<Vec<Post>, String> {
    let request = authed(Request::get(&endpoint("community/posts/")), token);
    let body = read(request.send().await, true).await?;
    field(&body, "posts")
}

pub async fn list_my_posts(token: &str) -> Result<Vec<Post>, String> {
    let request = authed(Request::get(&endpoint("community/list_posts_by_user/")), token);
    let body = read(request.send().await, true).await?;
    field(&body, "posts")
}

pub async fn get_post(token: &str, id: PostId) -> Result<PostDetail, String> {
    let request = authed(Request::get(&endpoint(&format!("community/posts/{}/", id))), token);
    let body = read(request.send().await, true).await?;
    field(&body, "post")
}

pub async fn create_post(
    token: &str,
    draft: &PostDraft,
    image: Option<web_sys::File>,
) -> Result<String, String> {
    let form = form_data()?;
    form.append_with_str("title", &draft.title)
        .and_then(|_| form.append_with_str("content", &draft.content))
        .map_err(|_| GENERIC_FAILURE.to_string())?;
    if let Some(image) = image {
        form.append_with_blob_and_filename("image", &image, &image.name())
            .map_err(|_| GENERIC_FAILURE.to_string())?;
    }

    let builder = authed(Request::post(&endpoint("community/create_post/")), token);
    let body = send_form(builder, form).await?;
    Ok(message_or(&body, "Post created successfully"))
}

pub async fn edit_post(token: &str, id: PostId, draft: &PostDraft) -> Result<Post, String> {
    let builder = authed(Request::post(&endpoint(&format!("community/edit_post/{}/", id))), token);
    let body = send_json(builder, draft).await?;
    field(&body, "post")
}

pub async fn delete_post(token: &str, id: PostId) -> Result<String, String> {
    let request = authed(Request::delete(&endpoint(&format!("community/delete_post/{}/", id))), token);
    let body = read(request.send().await, true).await?;
    Ok(message_or(&body, "Post deleted"))
}

pub async fn create_comment(token: &str, post: PostId, content: &str) -> Result<(), String> {
    let builder = authed(Request::post(&endpoint(&format!("community/create_comment/{}/", post))), token);
    send_json(builder, &serde_json::json!({ "content": content })).await?;
    Ok(())
}

pub async fn create_reply(token: &str, comment: CommentId, content: &str) -> Result<(), String> {
    let builder = authed(Request::post(&endpoint(&format!("community/create_reply/{}/", comment))), token);
    send_json(builder, &serde_json::json!({ "content": content })).await?;
    Ok(())
}

// ============ Cardio ============

pub async fn predict(token: &str, input: &AssessmentInput) -> Result<Prediction, String> {
    let builder = authed(Request::post(&endpoint("cardio/predict/")), token);
    let body = send_json(builder, input).await?;

    let text: String = field(&body, "prediction")?;
    let reported_level = body
        .get("risk_level")
        .and_then(Value::as_str)
        .and_then(RiskLevel::from_label);
    Ok(Prediction { text, reported_level })
}

/// An unsuccessful search shows as an empty list
pub async fn find_nearby_hospitals(token: &str, at: Coordinates) -> Result<Vec<Hospital>, String> {
    let request = authed(Request::post(&endpoint("cardio/find_nearby_hospitals/")), token)
        .json(&at)
        .map_err(|e| format!("Request build error: {}", e))?;
    let body = read(request.send().await, false).await?;

    if !is_success(&body) {
        return Ok(Vec::new());
    }
    Ok(body
        .get("hospitals")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default())
}

// ============ Feedback & contact ============

pub async fn add_feedback(token: &str, feedback: &FeedbackPayload) -> Result<String, String> {
    let builder = authed(Request::post(&endpoint("feedback/add_feedback/")), token);
    let body = send_json(builder, feedback).await?;
    Ok(message_or(&body, "Thank you for your feedback!"))
}

pub async fn send_contact(contact: &ContactPayload) -> Result<String, String> {
    let body = send_json(Request::post(&get_contact_url()), contact).await?;
    Ok(message_or(&body, "Message sent successfully!"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_message_fallback() {
        assert_eq!(
            message_or(&json!({"error": "Invalid token"}), GENERIC_FAILURE),
            "Invalid token"
        );
        assert_eq!(message_or(&json!({}), GENERIC_FAILURE), GENERIC_FAILURE);
    }

    #[wasm_bindgen_test]
    fn test_endpoint_joins_base() {
        assert!(endpoint("cardio/predict/").ends_with("/cardio/predict/"));
        assert!(!endpoint("cardio/predict/").contains("//cardio"));
    }
}
