use faq_client::{FetchError, VoteError};
use faq_core::errors::CoreError;
use thiserror::Error;

/// Errors surfaced by the session controllers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The collection could not be loaded. The list is now in the error state.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A vote was rejected or never reached the server.
    #[error(transparent)]
    Vote(#[from] VoteError),

    /// A lifecycle transition was attempted that the state machine forbids.
    #[error(transparent)]
    Core(#[from] CoreError),
}
