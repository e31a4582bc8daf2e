//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod nav;
pub mod footer;
pub mod sections;
pub mod posts;
pub mod comments;
pub mod prediction_form;
pub mod hospitals;
pub mod loading;
pub mod toast;

pub use nav::Nav;
pub use footer::Footer;
pub use sections::{CallToAction, Features, Hero};
pub use posts::{MyPosts, PostCard, PostSearch};
pub use comments::CommentThread;
pub use prediction_form::PredictionForm;
pub use hospitals::HospitalRecommendations;
pub use loading::{ListSkeleton, Loading, SubmitButton};
pub use toast::{FormError, Toast};
