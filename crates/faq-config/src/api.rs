//! Remote FAQ API configuration.

use serde::{Deserialize, Serialize};

/// Endpoint baked in at build time via `FAQDESK_API_URL`, if any.
fn default_base_url() -> String {
    option_env!("FAQDESK_API_URL").unwrap_or_default().to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    String::from("faqdesk/0.1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// FAQ collection endpoint. Votes go to `{base_url}/like/{id}` and
    /// `{base_url}/dislike/{id}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Question submission endpoint. Empty means `{base_url}/questions`.
    #[serde(default)]
    pub questions_url: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            questions_url: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Check the collection endpoint is set and looks like an HTTP URL.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        let url = self.base_url.trim();
        url.starts_with("http://") || url.starts_with("https://")
    }

    /// Collection endpoint without a trailing slash.
    #[must_use]
    pub fn collection_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// Resolved question submission endpoint.
    #[must_use]
    pub fn resolved_questions_url(&self) -> String {
        if self.questions_url.trim().is_empty() {
            format!("{}/questions", self.collection_url())
        } else {
            self.questions_url.trim().to_string()
        }
    }
}
