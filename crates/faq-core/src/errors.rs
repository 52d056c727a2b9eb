//! Cross-cutting error types for faqdesk.
//!
//! Domain-specific errors (`FetchError`, `VoteError`, `SessionError`) are
//! defined in their respective crates. The CLI converges everything into
//! `anyhow::Error`.

use thiserror::Error;

/// Errors that can be raised by any faqdesk crate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Entry lookup returned no result.
    #[error("FAQ not found: {id}")]
    NotFound { id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition for {entity} from {from} to {to}")]
    InvalidTransition {
        entity: String,
        from: String,
        to: String,
    },

    /// Data failed validation (length, emptiness, format).
    #[error("Validation error: {0}")]
    Validation(String),
}
