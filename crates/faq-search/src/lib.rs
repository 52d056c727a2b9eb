//! # faq-search
//!
//! Client-side derivations over an already-fetched FAQ collection.
//!
//! The collection is never mutated, only viewed.
//! - [`filter`]: category + free-text filtering and the tag histogram
//! - [`memo`]: recompute-on-change caches for the list controller
//! - [`ranking`]: popularity, sort options, and histogram ordering

pub mod filter;
pub mod memo;
pub mod ranking;

pub use filter::{FaqFilter, compute_categories, filter, matches};
pub use memo::{CategoryMemo, FilterMemo};
pub use ranking::{popular, sort, sorted_categories};

#[cfg(test)]
pub(crate) mod fixtures {
    use faq_core::entities::Faq;

    pub fn faq(id: &str, question: &str, tags: &[&str], likes: u64, dislikes: u64) -> Faq {
        Faq {
            id: id.to_string(),
            question: question.to_string(),
            answer: format!("Answer to {question}"),
            tags: tags.iter().map(ToString::to_string).collect(),
            likes,
            dislikes,
            helpful_count: None,
            unhelpful_count: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// The two-entry collection used across scenario tests.
    pub fn scenario() -> Vec<Faq> {
        vec![
            faq("1", "How do I reset my password?", &["account"], 2, 0),
            faq("2", "Billing cycle?", &["billing"], 0, 1),
        ]
    }
}
