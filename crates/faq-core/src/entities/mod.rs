//! Entity structs for the faqdesk knowledge base.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Field names follow the remote API's
//! `camelCase` wire format.

mod faq;
mod question;
mod votes;

pub use faq::{CategoryCount, Faq};
pub use question::{MAX_QUESTION_CHARS, NewQuestion};
pub use votes::VoteCounts;
