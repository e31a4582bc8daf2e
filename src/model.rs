//! Wire Types
//!
//! Request and response shapes exchanged with the Cardio Guard API.
//! Shared by the native client and the web client, so nothing in here
//! depends on a runtime.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post identifier as issued by the server
pub type PostId = u64;

/// Comment identifier as issued by the server
pub type CommentId = u64;

// ============================================
// Users
// ============================================

/// Profile of the signed-in user, as returned by `users/user_details/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetails {
    #[serde(default)]
    pub id: Option<u64>,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl UserDetails {
    /// "First Last", falling back to the username and then the email
    pub fn display_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("").trim();
        let last = self.last_name.as_deref().unwrap_or("").trim();
        let full = format!("{} {}", first, last).trim().to_string();

        if !full.is_empty() {
            full
        } else if let Some(username) = self.username.as_deref().filter(|u| !u.is_empty()) {
            username.to_string()
        } else {
            self.email.clone()
        }
    }
}

/// Login form payload
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form payload
#[derive(Debug, Clone, Default, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

/// Editable profile fields. Empty fields are left unchanged by the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub phone_number: Option<String>,
}

impl ProfileUpdate {
    /// Non-empty fields as multipart form pairs
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("username", &self.username),
            ("phone_number", &self.phone_number),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .as_ref()
                .filter(|v| !v.trim().is_empty())
                .map(|v| (name, v.clone()))
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.form_fields().is_empty()
    }
}

/// A file picked for upload (post image or profile picture)
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

// ============================================
// Community
// ============================================

/// A community post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Author display name
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Post {
    /// Creation time, if the server sent a parseable RFC 3339 timestamp
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Short, human-readable creation time
    pub fn created_label(&self) -> String {
        self.created()
            .map(|dt| dt.format("%b %d, %Y %H:%M").to_string())
            .unwrap_or_default()
    }
}

/// A post together with its comment thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDetail {
    pub post: Post,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl PostDetail {
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub user: String,
    pub content: String,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: u64,
    pub user: String,
    pub content: String,
}

/// Title and body of a new or edited post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
        }
    }
}

// ============================================
// Hospitals
// ============================================

/// A nearby hospital, in the shape of a Places search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub vicinity: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    pub geometry: Geometry,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
}

impl Hospital {
    pub fn is_open_now(&self) -> bool {
        self.opening_hours
            .as_ref()
            .and_then(|h| h.open_now)
            .unwrap_or(false)
    }

    pub fn location(&self) -> LatLng {
        self.geometry.location
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
}

/// Body of `cardio/find_nearby_hospitals/`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}
