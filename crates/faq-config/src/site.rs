//! Public site settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Public origin used for share links (e.g. `https://help.example.com`).
    #[serde(default)]
    pub origin: String,
}

impl SiteConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.origin.trim().is_empty()
    }
}
