//! Search and ranking configuration.

use serde::{Deserialize, Serialize};

/// Settle interval for the search box, in milliseconds.
const fn default_debounce_ms() -> u64 {
    300
}

/// Number of entries shown in the popular panel.
const fn default_popular_limit() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default = "default_popular_limit")]
    pub popular_limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            popular_limit: default_popular_limit(),
        }
    }
}
