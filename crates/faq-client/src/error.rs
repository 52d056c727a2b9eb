//! Client error types.

use faq_core::enums::VoteKind;
use faq_core::errors::CoreError;
use thiserror::Error;

/// Message shown when a vote never reached the server.
pub const VOTE_TRANSPORT_MESSAGE: &str = "Failed to record your vote";

/// Message shown when the question endpoint rejects a submission without detail.
pub const QUESTION_GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

/// The FAQ collection could not be retrieved.
///
/// The display text is fixed; the cause is kept for logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure or non-success HTTP status.
    #[error("Failed to fetch FAQs")]
    RequestFailed {
        /// HTTP status, absent when no response arrived.
        status: Option<u16>,
        /// Transport error text or response body.
        reason: String,
    },
}

impl FetchError {
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => *status,
        }
    }
}

/// A vote submission failed. Displays only the human-readable message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct VoteError {
    pub message: String,
    /// HTTP status, absent when no response arrived.
    pub status: Option<u16>,
}

impl VoteError {
    #[must_use]
    pub fn new(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Fallback used when the server reply carries no readable message.
    #[must_use]
    pub fn generic_message(kind: VoteKind, status: u16) -> String {
        format!("Failed to {kind} FAQ: {status}")
    }

    #[must_use]
    pub fn transport() -> Self {
        Self::new(VOTE_TRANSPORT_MESSAGE, None)
    }
}

/// Question submission errors.
#[derive(Debug, Error)]
pub enum QuestionError {
    /// The question failed local validation and was not sent.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// The endpoint answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// The HTTP client itself could not be constructed.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
