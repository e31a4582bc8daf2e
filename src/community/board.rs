//! Post Board State
//!
//! The dashboard's "my posts" panel: a searchable list that can swap to
//! an inline edit form, and a delete that waits for confirmation.

use std::collections::HashMap;

use super::filter::filter_posts;
use crate::model::{CommentId, Post, PostDraft, PostId};

/// What the board is currently showing
#[derive(Debug, Clone, PartialEq)]
pub enum BoardMode {
    Listing,
    Editing { post_id: PostId, draft: PostDraft },
    ConfirmingDelete { post_id: PostId },
}

#[derive(Debug, Clone)]
pub struct PostBoard {
    posts: Vec<Post>,
    query: String,
    mode: BoardMode,
}

impl Default for PostBoard {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PostBoard {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            query: String::new(),
            mode: BoardMode::Listing,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.mode = BoardMode::Listing;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Posts matching the current search
    pub fn visible(&self) -> Vec<&Post> {
        filter_posts(&self.posts, &self.query)
    }

    pub fn mode(&self) -> &BoardMode {
        &self.mode
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Swap the list for an edit form bound to `id`
    pub fn begin_edit(&mut self, id: PostId) -> bool {
        match self.get(id) {
            Some(post) => {
                self.mode = BoardMode::Editing {
                    post_id: id,
                    draft: PostDraft::from(post),
                };
                true
            }
            None => false,
        }
    }

    /// Draft being edited, if any
    pub fn draft_mut(&mut self) -> Option<&mut PostDraft> {
        match &mut self.mode {
            BoardMode::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Post id and draft to send, if editing
    pub fn pending_edit(&self) -> Option<(PostId, &PostDraft)> {
        match &self.mode {
            BoardMode::Editing { post_id, draft } => Some((*post_id, draft)),
            _ => None,
        }
    }

    pub fn cancel_edit(&mut self) {
        if matches!(self.mode, BoardMode::Editing { .. }) {
            self.mode = BoardMode::Listing;
        }
    }

    /// Replace the edited post with the server's copy and return to the list
    pub fn apply_edit(&mut self, updated: Post) {
        if let Some(slot) = self.posts.iter_mut().find(|p| p.id == updated.id) {
            *slot = updated;
        }
        self.mode = BoardMode::Listing;
    }

    /// Ask for confirmation before deleting `id`
    pub fn request_delete(&mut self, id: PostId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.mode = BoardMode::ConfirmingDelete { post_id: id };
        true
    }

    pub fn cancel_delete(&mut self) {
        if matches!(self.mode, BoardMode::ConfirmingDelete { .. }) {
            self.mode = BoardMode::Listing;
        }
    }

    /// Confirm the pending delete. Returns the id to delete, or `None`
    /// when nothing was awaiting confirmation.
    pub fn confirm_delete(&mut self) -> Option<PostId> {
        match self.mode {
            BoardMode::ConfirmingDelete { post_id } => {
                self.mode = BoardMode::Listing;
                Some(post_id)
            }
            _ => None,
        }
    }

    /// Drop a post after the server confirmed its deletion
    pub fn remove(&mut self, id: PostId) {
        self.posts.retain(|p| p.id != id);
    }
}

/// Open reply boxes on a post's comment thread, keyed by comment
#[derive(Debug, Clone, Default)]
pub struct ReplyDrafts {
    open: HashMap<CommentId, String>,
}

impl ReplyDrafts {
    /// Open or close the reply box of a comment. Either way the draft
    /// starts over. Returns whether the box is now open.
    pub fn toggle(&mut self, comment: CommentId) -> bool {
        if self.open.remove(&comment).is_some() {
            false
        } else {
            self.open.insert(comment, String::new());
            true
        }
    }

    pub fn is_open(&self, comment: CommentId) -> bool {
        self.open.contains_key(&comment)
    }

    pub fn set(&mut self, comment: CommentId, text: impl Into<String>) {
        if let Some(draft) = self.open.get_mut(&comment) {
            *draft = text.into();
        }
    }

    pub fn draft(&self, comment: CommentId) -> &str {
        self.open.get(&comment).map(String::as_str).unwrap_or("")
    }

    /// Close the box and hand back its text
    pub fn take(&mut self, comment: CommentId) -> Option<String> {
        self.open.remove(&comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, title: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: format!("{} body", title),
            image: None,
            user: Some("ana".to_string()),
            created_at: None,
        }
    }

    #[test]
    fn test_search_narrows_visible_posts() {
        let mut board = PostBoard::new(vec![post(1, "Oats"), post(2, "Running")]);
        assert_eq!(board.visible().len(), 2);

        board.set_query("run");
        let visible: Vec<u64> = board.visible().iter().map(|p| p.id).collect();
        assert_eq!(visible, vec![2]);
    }

    #[test]
    fn test_edit_flow() {
        let mut board = PostBoard::new(vec![post(1, "Oats"), post(2, "Running")]);
        assert!(!board.begin_edit(9));
        assert!(board.begin_edit(2));

        board.draft_mut().unwrap().title = "Trail running".to_string();
        let (id, draft) = board.pending_edit().unwrap();
        assert_eq!(id, 2);
        assert_eq!(draft.title, "Trail running");

        let mut updated = post(2, "Trail running");
        updated.content = "New body".to_string();
        board.apply_edit(updated);

        assert_eq!(board.mode(), &BoardMode::Listing);
        assert_eq!(board.get(2).unwrap().title, "Trail running");
        assert_eq!(board.get(1).unwrap().title, "Oats");
    }

    #[test]
    fn test_cancel_edit_keeps_post() {
        let mut board = PostBoard::new(vec![post(1, "Oats")]);
        board.begin_edit(1);
        board.draft_mut().unwrap().title = "Changed".to_string();
        board.cancel_edit();
        assert_eq!(board.mode(), &BoardMode::Listing);
        assert_eq!(board.get(1).unwrap().title, "Oats");
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut board = PostBoard::new(vec![post(1, "Oats"), post(2, "Running")]);
        assert_eq!(board.confirm_delete(), None);

        assert!(board.request_delete(1));
        board.cancel_delete();
        assert_eq!(board.confirm_delete(), None);
        assert_eq!(board.posts().len(), 2);

        assert!(board.request_delete(1));
        let id = board.confirm_delete().unwrap();
        board.remove(id);
        assert_eq!(board.posts().len(), 1);
        assert!(board.get(1).is_none());
    }

    #[test]
    fn test_reply_drafts() {
        let mut drafts = ReplyDrafts::default();
        assert!(!drafts.is_open(5));

        drafts.set(5, "ignored while closed");
        assert_eq!(drafts.draft(5), "");

        assert!(drafts.toggle(5));
        drafts.set(5, "Great point");
        assert_eq!(drafts.draft(5), "Great point");

        assert!(!drafts.toggle(5));
        assert!(drafts.toggle(5));
        assert_eq!(drafts.draft(5), "");

        drafts.set(5, "Sent");
        assert_eq!(drafts.take(5).as_deref(), Some("Sent"));
        assert!(!drafts.is_open(5));
    }
}
