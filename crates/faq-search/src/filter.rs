//! Category and free-text filtering over the full collection.
//!
//! Matching rules:
//! - A selected category keeps only entries whose `tags` contain it exactly
//!   (case-sensitive).
//! - A non-empty search term keeps entries where the lower-cased term is a
//!   substring of the lower-cased question, answer, or any tag.
//! - Output preserves input order.

use faq_core::entities::{CategoryCount, Faq};
use serde::{Deserialize, Serialize};

/// Inputs to [`filter`], bundled so they can key a memo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaqFilter {
    /// Settled (debounced) search term. Empty matches everything.
    pub search_term: String,
    /// Exact tag to require, if any.
    pub category: Option<String>,
}

impl FaqFilter {
    #[must_use]
    pub fn new(search_term: impl Into<String>, category: Option<String>) -> Self {
        Self {
            search_term: search_term.into(),
            category,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.category.is_none()
    }
}

/// Count, per tag, how many entries carry it.
///
/// A tag repeated within one entry counts once for that entry.
#[must_use]
pub fn compute_categories(all: &[Faq]) -> CategoryCount {
    let mut categories = CategoryCount::new();
    for faq in all {
        for (idx, tag) in faq.tags.iter().enumerate() {
            if faq.tags[..idx].contains(tag) {
                continue;
            }
            *categories.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    categories
}

/// Return the entries of `all` visible under `search_term` and `category`.
#[must_use]
pub fn filter(all: &[Faq], search_term: &str, category: Option<&str>) -> Vec<Faq> {
    let needle = search_term.to_lowercase();
    all.iter()
        .filter(|faq| matches_lowered(faq, &needle, category))
        .cloned()
        .collect()
}

/// Whether a single entry is visible under `search_term` and `category`.
#[must_use]
pub fn matches(faq: &Faq, search_term: &str, category: Option<&str>) -> bool {
    matches_lowered(faq, &search_term.to_lowercase(), category)
}

fn matches_lowered(faq: &Faq, needle: &str, category: Option<&str>) -> bool {
    if let Some(category) = category {
        if !faq.has_tag(category) {
            return false;
        }
    }

    if needle.is_empty() {
        return true;
    }

    faq.question.to_lowercase().contains(needle)
        || faq.answer.to_lowercase().contains(needle)
        || faq.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}
