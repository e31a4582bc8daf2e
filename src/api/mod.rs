//! Cardio Guard API
//!
//! HTTP client for the Cardio Guard backend, built with reqwest.
//!
//! # Endpoints
//!
//! ## Users
//! - `POST users/user_login/` - Exchange credentials for a token
//! - `POST users/user_register/` - Create an account
//! - `GET users/user_details/` - Profile of the signed-in user
//! - `POST users/edit_user_details/` - Update profile fields (multipart)
//! - `POST users/edit_profile_picture/` - Replace the profile picture (multipart)
//!
//! ## Community
//! - `GET community/posts/` - All posts
//! - `GET community/posts/:id/` - One post with comments and replies
//! - `GET community/list_posts_by_user/` - Posts of the signed-in user
//! - `POST community/create_post/` - New post, optional image (multipart)
//! - `POST community/edit_post/:id/` - Replace title and content
//! - `DELETE community/delete_post/:id/` - Remove a post
//! - `POST community/create_comment/:post_id/` - Comment on a post
//! - `POST community/create_reply/:comment_id/` - Reply to a comment
//!
//! ## Cardio
//! - `POST cardio/predict/` - Heart-disease risk prediction
//! - `POST cardio/find_nearby_hospitals/` - Hospitals around a location
//!
//! ## Feedback & contact
//! - `POST feedback/add_feedback/` - Rated feedback
//! - `POST <contact_url>` - Contact message, no token required
//!
//! # Example
//!
//! ```rust,ignore
//! use cardio_guard::api::{CardioClient, ClientConfig};
//! use cardio_guard::model::Credentials;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CardioClient::new(ClientConfig::default())?;
//!     let token = client
//!         .login(&Credentials {
//!             email: "ana@example.com".to_string(),
//!             password: "secret".to_string(),
//!         })
//!         .await?;
//!
//!     let posts = client.list_posts(&token).await?;
//!     println!("{} posts", posts.len());
//!     Ok(())
//! }
//! ```

mod client;
pub mod error;

#[cfg(test)]
pub(crate) mod tests;

pub use client::{Ack, CardioClient, ClientConfig, Registered};
pub use error::{ClientError, ClientResult, GENERIC_FAILURE};
