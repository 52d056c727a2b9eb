//! Response types returned as JSON by `faqdesk` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ListState, VoteKind, VoteStatus};
use crate::entities::Faq;

/// One row of the category histogram.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryEntry {
    pub tag: String,
    pub count: u64,
}

/// An FAQ as presented in a list, with its accordion state.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FaqCard {
    pub faq: Faq,
    pub is_open: bool,
}

/// Response from `faqdesk list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FaqListResponse {
    pub state: ListState,
    pub summary: Option<String>,
    pub error: Option<String>,
    pub search_term: String,
    pub selected_category: Option<String>,
    pub categories: Vec<CategoryEntry>,
    pub left_column: Vec<FaqCard>,
    pub right_column: Vec<FaqCard>,
}

/// Snapshot of one entry's vote controller.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VoteSummary {
    pub id: String,
    pub likes_count: u64,
    pub dislikes_count: u64,
    pub status: VoteStatus,
    pub has_voted: bool,
    pub last_vote_type: Option<VoteKind>,
    pub vote_error: Option<String>,
}

/// Response from `faqdesk show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FaqDetailResponse {
    pub faq: Faq,
    pub share_link: Option<String>,
}

/// Response from `faqdesk ask`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionReceipt {
    pub accepted: bool,
    pub message: String,
}
