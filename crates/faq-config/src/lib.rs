//! # faq-config
//!
//! Layered configuration loading for faqdesk using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FAQDESK_*` prefix, `__` as separator)
//! 2. Project-level `.faqdesk/config.toml`
//! 3. User-level `~/.config/faqdesk/config.toml`
//! 4. Built-in defaults (the API endpoint default comes from the
//!    build-time `FAQDESK_API_URL` variable when set)
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FAQDESK_API__BASE_URL` -> `api.base_url`,
//! `FAQDESK_SEARCH__DEBOUNCE_MS` -> `search.debounce_ms`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use faq_config::FaqConfig;
//!
//! let config = FaqConfig::load_with_dotenv().expect("config");
//! if config.api.is_configured() {
//!     println!("FAQ endpoint: {}", config.api.collection_url());
//! }
//! ```

mod api;
mod error;
mod search;
mod site;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use search::SearchConfig;
pub use site::SiteConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment prefix for every override.
pub const ENV_PREFIX: &str = "FAQDESK_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FaqConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

impl FaqConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain from the standard locations.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_from(
            Self::global_config_path().as_deref(),
            Path::new(".faqdesk/config.toml"),
        )
    }

    /// Build the provider chain from explicit file locations.
    ///
    /// Missing files are skipped. Environment variables are always merged last.
    #[must_use]
    pub fn figment_from(global_path: Option<&Path>, local_path: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = global_path {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Return the API section, or an error if the collection endpoint is unusable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when `api.base_url` is empty and
    /// [`ConfigError::InvalidUrl`] when it is not an HTTP(S) URL, and
    /// [`ConfigError::InvalidValue`] for a zero timeout.
    pub fn require_api(&self) -> Result<&ApiConfig, ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::not_configured("api"));
        }
        if !self.api.is_configured() {
            return Err(ConfigError::InvalidUrl {
                field: "api.base_url".to_string(),
                value: self.api.base_url.clone(),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(&self.api)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("faqdesk").join("config.toml"))
    }

    /// Load `.env` from the workspace root, falling back to the current directory.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = FaqConfig::default();
        assert_eq!(config.search.debounce_ms, 300);
        assert!(!config.site.is_configured());
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = FaqConfig::figment_from(None, Path::new("does/not/exist.toml"));
        let config: FaqConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.search.popular_limit, 5);
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn require_api_reports_missing_section() {
        let config = FaqConfig {
            api: ApiConfig {
                base_url: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = config.require_api().unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { ref section, .. } if section == "api"));
        assert_eq!(
            err.to_string(),
            "[api] is not configured: set api.base_url in .faqdesk/config.toml \
             or FAQDESK_API__BASE_URL"
        );
    }

    #[test]
    fn require_api_rejects_non_http_url() {
        let config = FaqConfig {
            api: ApiConfig {
                base_url: "ftp://example.com".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = config.require_api().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
        assert_eq!(
            err.to_string(),
            "api.base_url = 'ftp://example.com' is not an http:// or https:// URL"
        );
    }

    #[test]
    fn require_api_accepts_https_url() {
        let config = FaqConfig {
            api: ApiConfig {
                base_url: "https://api.example.com/faqs".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.require_api().is_ok());
    }
}
