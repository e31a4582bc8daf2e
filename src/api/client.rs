//! Cardio Guard REST API Client
//!
//! HTTP client for the users, community, cardio, feedback and contact
//! endpoints. Every response is a JSON envelope with a success flag and
//! either a payload field or a `message`.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ClientError, ClientResult};
use crate::assessment::AssessmentInput;
use crate::config::ApiConfig;
use crate::envelope::{is_success, message_of};
use crate::forms::{ContactPayload, FeedbackPayload};
use crate::links::with_trailing_slash;
use crate::model::{
    CommentId, Coordinates, Credentials, Hospital, Post, PostDetail, PostDraft, PostId,
    ProfileUpdate, Registration, Upload, UserDetails,
};
use crate::risk::{Prediction, RiskLevel};

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API (e.g., "http://localhost:8000/")
    pub base_url: String,
    /// Contact endpoint, outside the base URL
    pub contact_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ApiConfig::default().into()
    }
}

impl From<ApiConfig> for ClientConfig {
    fn from(config: ApiConfig) -> Self {
        Self {
            base_url: with_trailing_slash(&config.base_url),
            contact_url: config.contact_url,
            request_timeout_ms: config.request_timeout_secs * 1000,
        }
    }
}

/// Outcome of a successful call that carries no payload
#[derive(Debug, Clone, PartialEq)]
pub struct Ack {
    pub message: String,
}

/// Outcome of `users/user_register/`
#[derive(Debug, Clone, PartialEq)]
pub struct Registered {
    pub message: String,
    pub token: Option<String>,
}

/// Cardio Guard API client
pub struct CardioClient {
    client: Client,
    config: ClientConfig,
}

impl CardioClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .user_agent(concat!("cardio-guard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // ============================================
    // Users
    // ============================================

    /// Exchange credentials for a bearer token
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<String> {
        let req = self
            .request(Method::POST, "users/user_login/", None)
            .json(credentials);
        let body = self.send_checked(req).await?;
        field(&body, "token")
    }

    pub async fn register(&self, registration: &Registration) -> ClientResult<Registered> {
        let req = self
            .request(Method::POST, "users/user_register/", None)
            .json(registration);
        let body = self.send_checked(req).await?;
        Ok(Registered {
            message: message_of(&body).unwrap_or_else(|| "Registered successfully!".to_string()),
            token: optional_field(&body, "token")?,
        })
    }

    pub async fn user_details(&self, token: &str) -> ClientResult<UserDetails> {
        let req = self.request(Method::GET, "users/user_details/", Some(token));
        let body = self.send_checked(req).await?;
        field(&body, "user_details")
    }

    /// Update profile fields; returns the server's copy of the profile
    pub async fn edit_user_details(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> ClientResult<(Ack, UserDetails)> {
        let form = update
            .form_fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));

        let req = self
            .request(Method::POST, "users/edit_user_details/", Some(token))
            .multipart(form);
        let body = self.send_checked(req).await?;
        Ok((ack(&body), field(&body, "user_details")?))
    }

    pub async fn edit_profile_picture(
        &self,
        token: &str,
        picture: Upload,
    ) -> ClientResult<(Ack, UserDetails)> {
        let form = Form::new().part("profile_picture", file_part(picture));
        let req = self
            .request(Method::POST, "users/edit_profile_picture/", Some(token))
            .multipart(form);
        let body = self.send_checked(req).await?;
        Ok((ack(&body), field(&body, "user_details")?))
    }

    // ============================================
    // Community
    // ============================================

    /// Every post visible to the user
    pub async fn list_posts(&self, token: &str) -> ClientResult<Vec<Post>> {
        let req = self.request(Method::GET, "community/posts/", Some(token));
        let body = self.send_checked(req).await?;
        field(&body, "posts")
    }

    /// Posts written by the signed-in user
    pub async fn list_my_posts(&self, token: &str) -> ClientResult<Vec<Post>> {
        let req = self.request(Method::GET, "community/list_posts_by_user/", Some(token));
        let body = self.send_checked(req).await?;
        field(&body, "posts")
    }

    /// One post with its comments and replies
    pub async fn get_post(&self, token: &str, id: PostId) -> ClientResult<PostDetail> {
        let req = self.request(Method::GET, &format!("community/posts/{}/", id), Some(token));
        let body = self.send_checked(req).await?;
        field(&body, "post")
    }

    pub async fn create_post(
        &self,
        token: &str,
        draft: &PostDraft,
        image: Option<Upload>,
    ) -> ClientResult<Ack> {
        let mut form = Form::new()
            .text("title", draft.title.clone())
            .text("content", draft.content.clone());
        if let Some(image) = image {
            form = form.part("image", file_part(image));
        }

        let req = self
            .request(Method::POST, "community/create_post/", Some(token))
            .multipart(form);
        let body = self.send_checked(req).await?;
        Ok(ack(&body))
    }

    /// Replace title and content; returns the updated post
    pub async fn edit_post(
        &self,
        token: &str,
        id: PostId,
        draft: &PostDraft,
    ) -> ClientResult<(Ack, Post)> {
        let req = self
            .request(Method::POST, &format!("community/edit_post/{}/", id), Some(token))
            .json(draft);
        let body = self.send_checked(req).await?;
        Ok((ack(&body), field(&body, "post")?))
    }

    pub async fn delete_post(&self, token: &str, id: PostId) -> ClientResult<Ack> {
        let req = self.request(
            Method::DELETE,
            &format!("community/delete_post/{}/", id),
            Some(token),
        );
        let body = self.send_checked(req).await?;
        Ok(ack(&body))
    }

    pub async fn create_comment(&self, token: &str, post: PostId, content: &str) -> ClientResult<Ack> {
        let req = self
            .request(Method::POST, &format!("community/create_comment/{}/", post), Some(token))
            .json(&serde_json::json!({ "content": content }));
        let body = self.send_checked(req).await?;
        Ok(ack(&body))
    }

    pub async fn create_reply(
        &self,
        token: &str,
        comment: CommentId,
        content: &str,
    ) -> ClientResult<Ack> {
        let req = self
            .request(Method::POST, &format!("community/create_reply/{}/", comment), Some(token))
            .json(&serde_json::json!({ "content": content }));
        let body = self.send_checked(req).await?;
        Ok(ack(&body))
    }

    // ============================================
    // Cardio
    // ============================================

    pub async fn predict(&self, token: &str, input: &AssessmentInput) -> ClientResult<Prediction> {
        let req = self
            .request(Method::POST, "cardio/predict/", Some(token))
            .json(input);
        let body = self.send_checked(req).await?;

        let text: String = field(&body, "prediction")?;
        let reported_level = optional_field::<String>(&body, "risk_level")?
            .as_deref()
            .and_then(RiskLevel::from_label);

        Ok(Prediction {
            text,
            reported_level,
        })
    }

    /// Hospitals near a location. A response without the success flag
    /// yields an empty list rather than an error.
    pub async fn find_nearby_hospitals(
        &self,
        token: &str,
        at: Coordinates,
    ) -> ClientResult<Vec<Hospital>> {
        let req = self
            .request(Method::POST, "cardio/find_nearby_hospitals/", Some(token))
            .json(&at);
        let body = self.send(req).await?;

        if !is_success(&body) {
            tracing::debug!("Hospital search returned no results");
            return Ok(Vec::new());
        }
        Ok(optional_field(&body, "hospitals")?.unwrap_or_default())
    }

    // ============================================
    // Feedback & contact
    // ============================================

    pub async fn add_feedback(&self, token: &str, feedback: &FeedbackPayload) -> ClientResult<Ack> {
        let req = self
            .request(Method::POST, "feedback/add_feedback/", Some(token))
            .json(feedback);
        let body = self.send_checked(req).await?;
        Ok(ack(&body))
    }

    pub async fn send_contact(&self, contact: &ContactPayload) -> ClientResult<Ack> {
        let req = self.client.post(&self.config.contact_url).json(contact);
        let body = self.send_checked(req).await?;
        Ok(ack(&body))
    }

    // ============================================
    // Transport
    // ============================================

    /// Send a request and decode the JSON body. Non-2xx statuses become
    /// [`ClientError::Rejected`] with the server's message.
    async fn send(&self, req: RequestBuilder) -> ClientResult<Value> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let req = req.header("X-Request-Id", &request_id).build()?;
        let method = req.method().clone();
        let path = req.url().path().to_string();

        tracing::debug!(request_id = %request_id, %method, %path, "API request");

        let response = self
            .client
            .execute(req)
            .await
            .map_err(ClientError::from_transport)?;
        let status = response.status();
        let text = response.text().await.map_err(ClientError::from_transport)?;

        tracing::debug!(request_id = %request_id, status = status.as_u16(), "API response");

        let body = serde_json::from_str::<Value>(&text);

        if !status.is_success() {
            let message = body
                .ok()
                .and_then(|b| message_of(&b))
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
            tracing::warn!(request_id = %request_id, status = status.as_u16(), %path, "API rejected request");
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        body.map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// [`Self::send`], then require the envelope's success flag
    async fn send_checked(&self, req: RequestBuilder) -> ClientResult<Value> {
        let body = self.send(req).await?;
        if !is_success(&body) {
            return Err(ClientError::Rejected {
                status: 200,
                message: message_of(&body).unwrap_or_else(|| "Request failed".to_string()),
            });
        }
        Ok(body)
    }
}

fn ack(body: &Value) -> Ack {
    Ack {
        message: message_of(body).unwrap_or_default(),
    }
}

fn field<T: DeserializeOwned>(body: &Value, key: &str) -> ClientResult<T> {
    optional_field(body, key)?
        .ok_or_else(|| ClientError::Decode(format!("missing field `{}`", key)))
}

fn optional_field<T: DeserializeOwned>(body: &Value, key: &str) -> ClientResult<Option<T>> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(|e| ClientError::Decode(format!("field `{}`: {}", key, e))),
    }
}

fn file_part(upload: Upload) -> Part {
    Part::bytes(upload.bytes).file_name(upload.file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/");
        assert_eq!(config.request_timeout_ms, 30_000);
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ClientConfig::from(ApiConfig {
            base_url: "https://api.example.com/v1".to_string(),
            ..ApiConfig::default()
        });
        let client = CardioClient::new(config).unwrap();
        assert_eq!(client.url("cardio/predict/"), "https://api.example.com/v1/cardio/predict/");
    }

    #[test]
    fn test_field_decoding() {
        let body = json!({"token": "abc", "count": "x"});
        assert_eq!(field::<String>(&body, "token").unwrap(), "abc");
        assert!(matches!(field::<String>(&body, "missing"), Err(ClientError::Decode(_))));
        assert!(matches!(field::<u32>(&body, "count"), Err(ClientError::Decode(_))));
        assert_eq!(optional_field::<String>(&json!({"t": null}), "t").unwrap(), None);
    }
}

