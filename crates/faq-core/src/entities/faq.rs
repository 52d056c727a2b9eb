use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::wire;

/// One knowledge-base entry. Counters are mirrored from the server, which
/// stays authoritative.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    #[serde(deserialize_with = "wire::id")]
    #[schemars(with = "String")]
    pub id: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub question: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub answer: String,
    #[serde(default, deserialize_with = "wire::tags")]
    #[schemars(with = "Vec<String>")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "wire::counter")]
    #[schemars(with = "u64")]
    pub likes: u64,
    #[serde(default, deserialize_with = "wire::counter")]
    #[schemars(with = "u64")]
    pub dislikes: u64,
    /// Precomputed popularity score, used only for ranking.
    #[serde(
        default,
        deserialize_with = "wire::optional_counter",
        skip_serializing_if = "Option::is_none"
    )]
    pub helpful_count: Option<u64>,
    #[serde(
        default,
        deserialize_with = "wire::optional_counter",
        skip_serializing_if = "Option::is_none"
    )]
    pub unhelpful_count: Option<u64>,
    #[serde(default, deserialize_with = "wire::timestamp")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "wire::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Faq {
    /// Case-sensitive exact tag membership.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// `likes / (likes + dislikes)`, or 0.0 when there are no votes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn helpful_ratio(&self) -> f64 {
        let total = self.likes + self.dislikes;
        if total == 0 {
            0.0
        } else {
            self.likes as f64 / total as f64
        }
    }
}

/// Tag → number of entries carrying it. Ordered by key so ties in
/// count-sorted listings are deterministic.
pub type CategoryCount = BTreeMap<String, u64>;
