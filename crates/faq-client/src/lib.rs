//! # faq-client
//!
//! HTTP clients for the remote FAQ API.
//!
//! One [`FaqClient`] talks to three endpoints derived from configuration:
//! - `GET {base}`: the full FAQ collection (see [`collection`])
//! - `POST {base}/like/{id}` and `POST {base}/dislike/{id}`: vote mutations
//!   (see [`votes`])
//! - `POST {questions_url}`: visitor question submission (see [`questions`])
//!
//! Controllers depend on the [`FaqSource`] and [`VoteApi`] traits rather
//! than on the concrete client, so they can be driven by in-memory fakes.

pub mod collection;
pub mod questions;
pub mod votes;

mod error;
mod http;

pub use error::{
    ClientError, FetchError, QUESTION_GENERIC_MESSAGE, QuestionError, VOTE_TRANSPORT_MESSAGE,
    VoteError,
};

use std::future::Future;
use std::time::Duration;

use faq_config::ApiConfig;
use faq_core::entities::{Faq, VoteCounts};
use faq_core::enums::VoteKind;

// ── Seams ──────────────────────────────────────────────────────────

/// Something that can produce the full FAQ collection.
pub trait FaqSource: Send + Sync {
    /// Key identifying the collection, used by caches.
    fn endpoint(&self) -> &str;

    /// Fetch every entry.
    ///
    /// Empty or malformed bodies yield an empty collection; only transport
    /// failures and non-success statuses are errors.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Faq>, FetchError>> + Send;
}

/// Something that can record a vote and report the resulting counters.
pub trait VoteApi: Send + Sync {
    fn cast_vote(
        &self,
        id: &str,
        kind: VoteKind,
    ) -> impl Future<Output = Result<VoteCounts, VoteError>> + Send;
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the FAQ API.
#[derive(Debug, Clone)]
pub struct FaqClient {
    http: reqwest::Client,
    collection_url: String,
    questions_url: String,
}

impl FaqClient {
    /// Create a client for `base_url` with default settings.
    ///
    /// # Panics
    ///
    /// Panics if `base_url` is not an HTTP(S) URL or the underlying
    /// `reqwest::Client` fails to build. Use [`Self::from_config`] to handle
    /// those cases.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        Self::from_config(&config).expect("FAQ client should build")
    }

    /// Create a client from the API configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidEndpoint`] if `base_url` is not an
    /// HTTP(S) URL, or [`ClientError::Http`] if the client cannot be built.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        if !config.is_configured() {
            return Err(ClientError::InvalidEndpoint {
                url: config.base_url.clone(),
                reason: "expected an http:// or https:// URL".to_string(),
            });
        }

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            collection_url: config.collection_url().to_string(),
            questions_url: config.resolved_questions_url(),
        })
    }

    /// The collection endpoint, without a trailing slash.
    #[must_use]
    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    #[must_use]
    pub fn questions_url(&self) -> &str {
        &self.questions_url
    }
}

impl FaqSource for FaqClient {
    fn endpoint(&self) -> &str {
        &self.collection_url
    }

    async fn fetch_all(&self) -> Result<Vec<Faq>, FetchError> {
        self.fetch_collection().await
    }
}

impl VoteApi for FaqClient {
    async fn cast_vote(&self, id: &str, kind: VoteKind) -> Result<VoteCounts, VoteError> {
        self.vote(id, kind).await
    }
}
