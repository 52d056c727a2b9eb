//! # faq-session
//!
//! Session state for one FAQ view: the list controller that owns loading,
//! filtering, and the accordion, plus one vote controller per entry.
//!
//! Controllers are generic over the [`faq_client::FaqSource`] and
//! [`faq_client::VoteApi`] seams. Collections are shared through a
//! [`FaqCache`] keyed by endpoint so several views fetch at most once.

pub mod cache;
pub mod debounce;
pub mod expansion;
pub mod list;
pub mod vote;

mod error;

pub use cache::FaqCache;
pub use debounce::{DEFAULT_DEBOUNCE, Debounce};
pub use error::SessionError;
pub use expansion::{Expansion, FaqItem, Toggle};
pub use list::FaqListController;
pub use vote::{ACKNOWLEDGE_FOR, VoteController, VoteOutcome};
