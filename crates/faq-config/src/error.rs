//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `FAQDESK_*` variable failed to parse.
    #[error("failed to load faqdesk configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A section needed by the command has no usable values.
    #[error(
        "[{section}] is not configured: set {section}.base_url in .faqdesk/config.toml \
         or {env_hint}"
    )]
    NotConfigured { section: String, env_hint: String },

    /// A URL field holds something other than an `http://` or `https://` URL.
    #[error("{field} = '{value}' is not an http:// or https:// URL")]
    InvalidUrl { field: String, value: String },

    /// Any other out-of-range value.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    /// `NotConfigured` for `section`, pointing at its `FAQDESK_` variable.
    #[must_use]
    pub fn not_configured(section: &str) -> Self {
        Self::NotConfigured {
            section: section.to_string(),
            env_hint: format!("FAQDESK_{}__BASE_URL", section.to_uppercase()),
        }
    }
}
