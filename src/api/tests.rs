//! Client tests against an in-process stub of the Cardio Guard backend.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};

use super::*;
use crate::assessment::AssessmentInput;
use crate::forms::{ContactForm, FeedbackForm};
use crate::model::{Coordinates, Credentials, PostDraft, ProfileUpdate, Registration, Upload};
use crate::risk::RiskLevel;

pub(crate) const TOKEN: &str = "tok-123";

/// Requests seen by the stub, as (path, body) pairs
#[derive(Clone, Default)]
pub(crate) struct Seen(Arc<Mutex<Vec<(String, Value)>>>);

impl Seen {
    pub(crate) fn record(&self, path: &str, body: Value) {
        self.0.lock().unwrap().push((path.to_string(), body));
    }

    pub(crate) fn last(&self) -> (String, Value) {
        self.0.lock().unwrap().last().cloned().unwrap()
    }
}

type Reply = (StatusCode, Json<Value>);

fn authorized(headers: &HeaderMap) -> Result<(), Reply> {
    let expected = format!("Bearer {}", TOKEN);
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Invalid token."})),
        )),
    }
}

fn user_json() -> Value {
    json!({
        "id": 7,
        "email": "ana@example.com",
        "first_name": "Ana",
        "last_name": "Silva",
        "username": "ana",
        "phone_number": "555-0100",
        "profile_picture": "profile_pictures/default_female_image.png"
    })
}

fn post_json(id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Post {}", id),
        "content": "Walking every day",
        "image": null,
        "user": "Ana Silva",
        "created_at": "2024-03-01T10:30:00Z"
    })
}

async fn login(Json(body): Json<Value>) -> Reply {
    if body["password"] == "secret" {
        (StatusCode::OK, Json(json!({"status": "success", "token": TOKEN})))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"status": "failed", "message": "Invalid credentials!"})),
        )
    }
}

async fn register(State(seen): State<Seen>, Json(body): Json<Value>) -> Reply {
    seen.record("register", body.clone());
    if body["email"] == "taken@example.com" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"status": "failed", "message": "User already exists!"})),
        );
    }
    (
        StatusCode::CREATED,
        Json(json!({"status": "success", "message": "Registered successfully!"})),
    )
}

async fn user_details(headers: HeaderMap) -> Result<Json<Value>, Reply> {
    authorized(&headers)?;
    Ok(Json(json!({"status": "success", "user_details": user_json()})))
}

async fn edit_user_details(
    State(seen): State<Seen>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<Value>, Reply> {
    authorized(&headers)?;
    let mut fields = serde_json::Map::new();
    let mut user = user_json();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.unwrap_or_default();
        user[name.as_str()] = json!(value);
        fields.insert(name, json!(value));
    }
    seen.record("edit_user_details", Value::Object(fields));
    Ok(Json(json!({
        "status": "success",
        "message": "Profile updated successfully",
        "user_details": user
    })))
}

async fn edit_profile_picture(
    State(seen): State<Seen>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<Value>, Reply> {
    authorized(&headers)?;
    let mut user = user_json();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let size = field.bytes().await.map(|b| b.len()).unwrap_or_default();
        seen.record("edit_profile_picture", json!({"field": name, "file_name": file_name, "size": size}));
        user["profile_picture"] = json!(format!("profile_pictures/{}", file_name));
    }
    Ok(Json(json!({
        "status": "success",
        "message": "Profile picture updated",
        "user_details": user
    })))
}

async fn list_posts(headers: HeaderMap) -> Result<Json<Value>, Reply> {
    authorized(&headers)?;
    Ok(Json(json!({"success": true, "posts": [post_json(1), post_json(2)]})))
}

async fn list_my_posts(headers: HeaderMap) -> Result<Json<Value>, Reply> {
    authorized(&headers)?;
    Ok(Json(json!({"success": true, "posts": [post_json(2)]})))
}

async fn get_post(headers: HeaderMap, Path(id): Path<u64>) -> Result<Json<Value>, Reply> {
    authorized(&headers)?;
    if id == 404 {
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({"success": false, "message": "Post not found"})),
        ));
    }
    Ok(Json(json!({
        "success": true,
        "post": {
            "post": post_json(id),
            "comments": [{
                "id": 11,
                "user": "Ben",
                "content": "Great tip",
                "replies": [{"id": 21, "user": "Ana Silva", "content": "Thanks!"}]
            }]
        }
    })))
}

async fn create_post(
    State(seen): State<Seen>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<Value>, Reply> {
    authorized(&headers)?;
    let mut fields = serde_json::Map::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let value = match field.file_name().map(str::to_string) {
            Some(file_name) => json!(file_name),
            None => json!(field.text().await.unwrap_or_default()),
        };
        fields.insert(name, value);
    }
    seen.record("create_post", Value::Object(fields));
    Ok(Json(json!({"success": true, "message": "Post created successfully"})))
}

async fn edit_post(
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, Reply> {
    authorized(&headers)?;
    let mut post = post_json(id);
    post["title"] = body["title"].clone();
    post["content"] = body["content"].clone();
    Ok(Json(json!({"success": true, "message": "Post updated", "post": post})))
}

async fn delete_post(headers: HeaderMap, Path(id): Path<u64>) -> Result<Json<Value>, Reply> {
    authorized(&headers)?;
    if id == 2 {
        return Ok(Json(json!({
            "success": false,
            "message": "You can only delete your own posts"
        })));
    }
    Ok(Json(json!({"success": true, "message": "Post deleted"})))
}

async fn create_comment(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, Reply> {
    authorized(&headers)?;
    seen.record(&format!("create_comment/{}", id), body);
    Ok(Json(json!({"success": true, "message": "Comment added"})))
}

async fn create_reply(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, Reply> {
    authorized(&headers)?;
    seen.record(&format!("create_reply/{}", id), body);
    Ok(Json(json!({"success": true, "message": "Reply added"})))
}

async fn predict(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, Reply> {
    authorized(&headers)?;
    seen.record("predict", body.clone());
    if body["age"].as_f64().unwrap_or_default() >= 60.0 {
        Ok(Json(json!({
            "success": true,
            "prediction": "Heart disease is likely.",
            "risk_level": "elevated"
        })))
    } else {
        Ok(Json(json!({"success": true, "prediction": "Heart disease is not likely."})))
    }
}

async fn hospitals(headers: HeaderMap, Json(body): Json<Value>) -> Result<Json<Value>, Reply> {
    authorized(&headers)?;
    if body["latitude"].as_f64() == Some(0.0) {
        return Ok(Json(json!({"success": false, "message": "No hospitals found"})));
    }
    if body["latitude"].as_f64().is_some_and(|lat| lat.abs() > 90.0) {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"detail": "Places lookup failed"})),
        ));
    }
    Ok(Json(json!({
        "success": true,
        "hospitals": [{
            "place_id": "abc",
            "name": "City Heart Center",
            "vicinity": "1 Main St",
            "rating": 4.5,
            "user_ratings_total": 120,
            "geometry": {"location": {"lat": 40.7, "lng": -74.0}},
            "opening_hours": {"open_now": true}
        }]
    })))
}

async fn feedback(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, Reply> {
    authorized(&headers)?;
    seen.record("feedback", body);
    Ok(Json(json!({"success": true, "message": "Thank you for your feedback!"})))
}

async fn contact(State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    let has_auth = headers.contains_key("authorization");
    seen.record("contact", json!({"body": body, "has_auth": has_auth}));
    Json(json!({"success": true, "message": "Message sent"}))
}

fn stub_router(seen: Seen) -> Router {
    Router::new()
        .route("/users/user_login/", post(login))
        .route("/users/user_register/", post(register))
        .route("/users/user_details/", get(user_details))
        .route("/users/edit_user_details/", post(edit_user_details))
        .route("/users/edit_profile_picture/", post(edit_profile_picture))
        .route("/community/posts/", get(list_posts))
        .route("/community/posts/:id/", get(get_post))
        .route("/community/list_posts_by_user/", get(list_my_posts))
        .route("/community/create_post/", post(create_post))
        .route("/community/edit_post/:id/", post(edit_post))
        .route("/community/delete_post/:id/", delete(delete_post))
        .route("/community/create_comment/:id/", post(create_comment))
        .route("/community/create_reply/:id/", post(create_reply))
        .route("/cardio/predict/", post(predict))
        .route("/cardio/find_nearby_hospitals/", post(hospitals))
        .route("/feedback/add_feedback/", post(feedback))
        .route("/api/contact-us/", post(contact))
        .with_state(seen)
}

/// Serve the stub on an ephemeral port and return a client pointed at it
pub(crate) async fn spawn_stub() -> (CardioClient, Seen) {
    let seen = Seen::default();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = stub_router(seen.clone());
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let base_url = format!("http://{}/", addr);
    let client = CardioClient::new(ClientConfig {
        contact_url: format!("{}api/contact-us/", base_url),
        base_url,
        request_timeout_ms: 5_000,
    })
    .unwrap();

    (client, seen)
}

#[tokio::test]
async fn test_login_returns_token() {
    let (client, _) = spawn_stub().await;

    let token = client
        .login(&Credentials {
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(token, TOKEN);
}

#[tokio::test]
async fn test_login_failure_carries_server_message() {
    let (client, _) = spawn_stub().await;

    let err = client
        .login(&Credentials {
            email: "ana@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Invalid credentials!");
}

#[tokio::test]
async fn test_register() {
    let (client, seen) = spawn_stub().await;

    let registered = client
        .register(&Registration {
            email: "new@example.com".to_string(),
            password: "pw".to_string(),
            first_name: "New".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(registered.message, "Registered successfully!");
    assert_eq!(registered.token, None);
    assert_eq!(seen.last().1["first_name"], "New");

    let err = client
        .register(&Registration {
            email: "taken@example.com".to_string(),
            password: "pw".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "User already exists!");
}

#[tokio::test]
async fn test_user_details_requires_token() {
    let (client, _) = spawn_stub().await;

    let user = client.user_details(TOKEN).await.unwrap();
    assert_eq!(user.display_name(), "Ana Silva");

    let err = client.user_details("stale").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Invalid token.");
}

#[tokio::test]
async fn test_edit_user_details_sends_only_filled_fields() {
    let (client, seen) = spawn_stub().await;

    let update = ProfileUpdate {
        first_name: Some("Ana Maria".to_string()),
        phone_number: Some("  ".to_string()),
        ..Default::default()
    };
    let (ack, user) = client.edit_user_details(TOKEN, &update).await.unwrap();

    assert_eq!(ack.message, "Profile updated successfully");
    assert_eq!(user.first_name.as_deref(), Some("Ana Maria"));
    let (_, fields) = seen.last();
    assert_eq!(fields, json!({"first_name": "Ana Maria"}));
}

#[tokio::test]
async fn test_edit_profile_picture_uploads_file_part() {
    let (client, seen) = spawn_stub().await;

    let (_, user) = client
        .edit_profile_picture(
            TOKEN,
            Upload {
                file_name: "me.png".to_string(),
                bytes: vec![1, 2, 3, 4],
            },
        )
        .await
        .unwrap();

    assert_eq!(user.profile_picture.as_deref(), Some("profile_pictures/me.png"));
    assert_eq!(
        seen.last().1,
        json!({"field": "profile_picture", "file_name": "me.png", "size": 4})
    );
}

#[tokio::test]
async fn test_list_and_fetch_posts() {
    let (client, _) = spawn_stub().await;

    let posts = client.list_posts(TOKEN).await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].created_label(), "Mar 01, 2024 10:30");

    let mine = client.list_my_posts(TOKEN).await.unwrap();
    assert_eq!(mine.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);

    let detail = client.get_post(TOKEN, 5).await.unwrap();
    assert_eq!(detail.post.id, 5);
    assert_eq!(detail.comment_count(), 1);
    assert_eq!(detail.comments[0].replies[0].content, "Thanks!");
}

#[tokio::test]
async fn test_missing_post_is_rejected() {
    let (client, _) = spawn_stub().await;

    let err = client.get_post(TOKEN, 404).await.unwrap_err();
    assert!(matches!(err, ClientError::Rejected { status: 404, .. }));
    assert_eq!(err.user_message(), "Post not found");
}

#[tokio::test]
async fn test_create_post_with_image() {
    let (client, seen) = spawn_stub().await;

    let draft = PostDraft {
        title: "Hello".to_string(),
        content: "First post".to_string(),
    };
    let image = Upload {
        file_name: "run.jpg".to_string(),
        bytes: vec![0xff, 0xd8],
    };
    let ack = client.create_post(TOKEN, &draft, Some(image)).await.unwrap();

    assert_eq!(ack.message, "Post created successfully");
    assert_eq!(
        seen.last().1,
        json!({"title": "Hello", "content": "First post", "image": "run.jpg"})
    );
}

#[tokio::test]
async fn test_edit_and_delete_post() {
    let (client, _) = spawn_stub().await;

    let draft = PostDraft {
        title: "Edited".to_string(),
        content: "New body".to_string(),
    };
    let (_, post) = client.edit_post(TOKEN, 1, &draft).await.unwrap();
    assert_eq!(post.title, "Edited");
    assert_eq!(post.content, "New body");

    let ack = client.delete_post(TOKEN, 1).await.unwrap();
    assert_eq!(ack.message, "Post deleted");

    let err = client.delete_post(TOKEN, 2).await.unwrap_err();
    assert_eq!(err.user_message(), "You can only delete your own posts");
}

#[tokio::test]
async fn test_comment_and_reply() {
    let (client, seen) = spawn_stub().await;

    client.create_comment(TOKEN, 3, "Nice").await.unwrap();
    assert_eq!(seen.last(), ("create_comment/3".to_string(), json!({"content": "Nice"})));

    client.create_reply(TOKEN, 11, "Agreed").await.unwrap();
    assert_eq!(seen.last(), ("create_reply/11".to_string(), json!({"content": "Agreed"})));
}

#[tokio::test]
async fn test_predict_sends_numeric_payload() {
    let (client, seen) = spawn_stub().await;

    let input = AssessmentInput {
        age: 45.0,
        oldpeak: 1.5,
        ..Default::default()
    };
    let prediction = client.predict(TOKEN, &input).await.unwrap();

    assert_eq!(prediction.text, "Heart disease is not likely.");
    assert_eq!(prediction.level(), RiskLevel::Low);

    let (_, body) = seen.last();
    assert_eq!(body["age"], json!(45.0));
    assert_eq!(body["oldpeak"], json!(1.5));
    assert_eq!(body["thal"], json!(0.0));
    assert_eq!(body.as_object().unwrap().len(), 13);
}

#[tokio::test]
async fn test_predict_prefers_reported_level() {
    let (client, _) = spawn_stub().await;

    let input = AssessmentInput {
        age: 70.0,
        ..Default::default()
    };
    let prediction = client.predict(TOKEN, &input).await.unwrap();
    assert_eq!(prediction.reported_level, Some(RiskLevel::Elevated));
    assert_eq!(prediction.level(), RiskLevel::Elevated);
}

#[tokio::test]
async fn test_hospitals() {
    let (client, _) = spawn_stub().await;

    let found = client
        .find_nearby_hospitals(
            TOKEN,
            Coordinates {
                latitude: 40.7,
                longitude: -74.0,
            },
        )
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].is_open_now());
    assert_eq!(found[0].location().lng, -74.0);

    let none = client
        .find_nearby_hospitals(
            TOKEN,
            Coordinates {
                latitude: 0.0,
                longitude: 0.0,
            },
        )
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_feedback_and_contact() {
    let (client, seen) = spawn_stub().await;

    let payload = FeedbackForm {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        message: "Helpful".to_string(),
        rating: 4,
    }
    .validate()
    .unwrap();
    let ack = client.add_feedback(TOKEN, &payload).await.unwrap();
    assert_eq!(ack.message, "Thank you for your feedback!");
    assert_eq!(seen.last().1["rating"], json!(4));

    let payload = ContactForm {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        subject: "Hours".to_string(),
        message: "When are you open?".to_string(),
    }
    .validate()
    .unwrap();
    client.send_contact(&payload).await.unwrap();

    let (_, recorded) = seen.last();
    assert_eq!(recorded["has_auth"], json!(false));
    assert_eq!(recorded["body"]["full_name"], "Ana");
    assert_eq!(recorded["body"]["message"], "Hours\n\nWhen are you open?");
}

#[tokio::test]
async fn test_unreachable_server_is_generic_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = CardioClient::new(ClientConfig {
        base_url: format!("http://{}/", addr),
        contact_url: format!("http://{}/api/contact-us/", addr),
        request_timeout_ms: 2_000,
    })
    .unwrap();

    let err = client.list_posts(TOKEN).await.unwrap_err();
    assert!(matches!(err, ClientError::Unavailable));
    assert_eq!(err.user_message(), GENERIC_FAILURE);
}
