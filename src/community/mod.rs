//! Community Board
//!
//! Client-side state of the discussion views. The server owns the posts;
//! this module only filters, tracks edits and confirmations, and keeps
//! reply drafts.

mod board;
mod filter;

pub use board::{BoardMode, PostBoard, ReplyDrafts};
pub use filter::{filter_posts, matches};
