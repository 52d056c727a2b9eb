use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::VoteKind;
use crate::wire;

/// Counters returned by a vote mutation.
///
/// Either counter may be absent from the server body, or present with a
/// non-numeric value; either way it leaves the locally mirrored value
/// untouched.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VoteCounts {
    #[serde(
        default,
        deserialize_with = "wire::optional_counter",
        skip_serializing_if = "Option::is_none"
    )]
    pub likes: Option<u64>,
    #[serde(
        default,
        deserialize_with = "wire::optional_counter",
        skip_serializing_if = "Option::is_none"
    )]
    pub dislikes: Option<u64>,
}

impl VoteCounts {
    #[must_use]
    pub const fn new(likes: u64, dislikes: u64) -> Self {
        Self {
            likes: Some(likes),
            dislikes: Some(dislikes),
        }
    }

    /// Counters synthesized when the server acknowledged the vote with an
    /// empty or non-JSON body: exactly the one vote just cast.
    ///
    /// Known trade-off: this can drift from the server's real totals until
    /// the collection is fetched again.
    #[must_use]
    pub const fn fallback(kind: VoteKind) -> Self {
        match kind {
            VoteKind::Like => Self::new(1, 0),
            VoteKind::Dislike => Self::new(0, 1),
        }
    }

    /// Overlay these counters on the current `(likes, dislikes)`.
    #[must_use]
    pub fn apply(self, likes: u64, dislikes: u64) -> (u64, u64) {
        (self.likes.unwrap_or(likes), self.dislikes.unwrap_or(dislikes))
    }
}
