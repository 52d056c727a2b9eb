//! Vote kinds, lifecycle states, and sort options for faqdesk.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Lifecycle enums provide `allowed_next_states()` so controllers can enforce
//! valid transitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// VoteKind
// ---------------------------------------------------------------------------

/// Direction of a single vote on an FAQ entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VoteKind {
    Like,
    Dislike,
}

impl VoteKind {
    /// Map the `is_like` flag used by vote buttons to a kind.
    #[must_use]
    pub const fn from_is_like(is_like: bool) -> Self {
        if is_like { Self::Like } else { Self::Dislike }
    }

    /// Path segment of the per-action endpoint (`{base}/like/{id}`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

impl fmt::Display for VoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// VoteStatus
// ---------------------------------------------------------------------------

/// Per-entry vote lifecycle within one session.
///
/// ```text
/// unvoted → voting → voted
///                  → unvoted (failed, retry allowed)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VoteStatus {
    Unvoted,
    Voting,
    Voted,
}

impl VoteStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Unvoted => &[Self::Voting],
            Self::Voting => &[Self::Voted, Self::Unvoted],
            Self::Voted => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unvoted => "unvoted",
            Self::Voting => "voting",
            Self::Voted => "voted",
        }
    }
}

impl fmt::Display for VoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ListState
// ---------------------------------------------------------------------------

/// Presentation state of the FAQ list.
///
/// ```text
/// loading → error
///         → empty     ⇄ populated   (re-derived on filter changes)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ListState {
    Loading,
    Error,
    Empty,
    Populated,
}

impl ListState {
    /// Valid next states from the current state.
    ///
    /// `Error` is terminal for the session; recovering requires a new load.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Loading => &[Self::Error, Self::Empty, Self::Populated],
            Self::Empty | Self::Populated => &[Self::Empty, Self::Populated],
            Self::Error => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error => "error",
            Self::Empty => "empty",
            Self::Populated => "populated",
        }
    }
}

impl fmt::Display for ListState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SortField / SortDirection
// ---------------------------------------------------------------------------

/// Field an FAQ listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    CreatedAt,
    Likes,
    Dislikes,
    HelpfulCount,
    /// `likes / (likes + dislikes)`, 0 when nobody voted.
    HelpfulRatio,
    Question,
}

impl SortField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::Likes => "likes",
            Self::Dislikes => "dislikes",
            Self::HelpfulCount => "helpful_count",
            Self::HelpfulRatio => "helpful_ratio",
            Self::Question => "question",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// A field plus direction, e.g. "Most helpful" = `helpful_ratio desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SortOption {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOption {
    #[must_use]
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Human-readable label for option pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match (self.field, self.direction) {
            (SortField::CreatedAt, SortDirection::Desc) => "Newest first",
            (SortField::CreatedAt, SortDirection::Asc) => "Oldest first",
            (SortField::Likes, SortDirection::Desc) => "Most liked",
            (SortField::Likes, SortDirection::Asc) => "Least liked",
            (SortField::Dislikes, SortDirection::Desc) => "Most disliked",
            (SortField::Dislikes, SortDirection::Asc) => "Least disliked",
            (SortField::HelpfulCount, SortDirection::Desc) => "Most popular",
            (SortField::HelpfulCount, SortDirection::Asc) => "Least popular",
            (SortField::HelpfulRatio, SortDirection::Desc) => "Most helpful",
            (SortField::HelpfulRatio, SortDirection::Asc) => "Least helpful",
            (SortField::Question, SortDirection::Asc) => "A to Z",
            (SortField::Question, SortDirection::Desc) => "Z to A",
        }
    }
}

impl Default for SortOption {
    fn default() -> Self {
        Self::new(SortField::CreatedAt, SortDirection::Desc)
    }
}
