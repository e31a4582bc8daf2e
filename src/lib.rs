//! # Cardio Guard
//!
//! Client core for the Cardio Guard heart-health service: a typed REST
//! client, session handling, the risk-assessment questionnaire and the
//! community board, shared by the command-line client and the web client.
//!
//! ## Modules
//!
//! - [`model`]: Wire types (users, posts, hospitals)
//! - [`assessment`]: Thirteen-field, four-step questionnaire
//! - [`community`]: Post search, inline edit and delete confirmation
//! - [`envelope`]: Success flag and message of API responses
//! - [`router`]: Page routes and session gating
//! - [`risk`]: Risk level of a prediction and what to show for it
//! - [`session`]: Token and cached profile over a pluggable store
//! - [`api`]: REST client built on reqwest (native only)
//! - [`app`]: User actions over client and session (native only)
//!
//! The modules that do not touch the network or the filesystem build
//! without default features, which is how the web client links them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cardio_guard::api::{CardioClient, ClientConfig};
//! use cardio_guard::app::CardioGuard;
//! use cardio_guard::assessment::{AssessmentForm, FieldId};
//! use cardio_guard::model::Credentials;
//! use cardio_guard::session::{MemoryStore, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CardioClient::new(ClientConfig::default())?;
//!     let session = Session::load(MemoryStore::new())?;
//!     let mut app = CardioGuard::new(client, session);
//!
//!     app.login(Credentials {
//!         email: "ana@example.com".to_string(),
//!         password: "secret".to_string(),
//!     })
//!     .await?;
//!
//!     // Fill in the questionnaire and submit from the last step
//!     let mut form = AssessmentForm::new();
//!     form.set_field(FieldId::Age, "52");
//!     form.advance(form.step_count() - 1);
//!
//!     let prediction = app.predict(&form).await?;
//!     println!("{}: {}", prediction.level().headline(), prediction.text);
//!
//!     Ok(())
//! }
//! ```

pub mod assessment;
pub mod community;
pub mod envelope;
pub mod forms;
pub mod links;
pub mod model;
pub mod risk;
pub mod router;
pub mod session;

#[cfg(feature = "native")]
pub mod api;
#[cfg(feature = "native")]
pub mod app;
#[cfg(feature = "native")]
pub mod config;

pub use assessment::{AssessmentForm, AssessmentInput, FieldId};
pub use risk::{Prediction, RiskLevel};
pub use router::Route;
pub use session::{Session, SessionStore};

#[cfg(feature = "native")]
pub use api::{CardioClient, ClientError, ClientResult};
#[cfg(feature = "native")]
pub use app::CardioGuard;
