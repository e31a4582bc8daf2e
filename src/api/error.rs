//! Client Error Types
//!
//! One error type for every user action. Each variant belongs to one of
//! three groups: no session, transport trouble, or a server refusal.

use thiserror::Error;

use crate::assessment::SubmitError;
use crate::forms::FormError;
use crate::session::StoreError;

/// Text shown for any transport-level failure
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

/// Errors that can occur while talking to the Cardio Guard API
#[derive(Error, Debug)]
pub enum ClientError {
    /// No token in the session
    #[error("Authentication required")]
    MissingSession,

    /// Server could not be reached
    #[error("Cardio Guard API unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with an error status or a failure flag
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Response did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Input rejected before any request was made
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error("Session storage error: {0}")]
    Store(#[from] StoreError),
}

impl ClientError {
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_connect() {
            ClientError::Unavailable
        } else {
            ClientError::Request(err)
        }
    }

    /// The single line to show the user: server messages verbatim,
    /// local validation as worded, everything else generic.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::MissingSession
            | ClientError::Rejected { .. }
            | ClientError::Form(_)
            | ClientError::Submit(_) => self.to_string(),
            ClientError::Unavailable
            | ClientError::Timeout
            | ClientError::Request(_)
            | ClientError::Decode(_)
            | ClientError::Store(_) => GENERIC_FAILURE.to_string(),
        }
    }

    pub fn is_missing_session(&self) -> bool {
        matches!(self, ClientError::MissingSession)
    }

    /// Server refused the token
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Rejected { status: 401, .. })
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
