//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod about;
pub mod login_register;
pub mod dashboard;
pub mod prediction;
pub mod community;
pub mod new_post;
pub mod post_detail;
pub mod feedback;
pub mod contact;

pub use home::Home;
pub use about::AboutUs;
pub use login_register::LoginRegister;
pub use dashboard::Dashboard;
pub use prediction::Prediction;
pub use community::Posts;
pub use new_post::NewPost;
pub use post_detail::PostDetailPage;
pub use feedback::Feedback;
pub use contact::ContactUs;
