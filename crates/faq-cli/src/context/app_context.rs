use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use faq_client::FaqClient;
use faq_config::FaqConfig;
use faq_core::entities::Faq;
use faq_core::errors::CoreError;
use faq_session::{FaqCache, FaqListController};

/// Shared resources for commands that talk to the FAQ API.
pub struct AppContext {
    pub config: FaqConfig,
    pub client: FaqClient,
    pub cache: FaqCache,
}

impl AppContext {
    /// Validate the API section and build the HTTP client.
    pub fn init(config: FaqConfig) -> anyhow::Result<Self> {
        let client = {
            let api = config.require_api().context(
                "FAQ API endpoint is not set. Export FAQDESK_API__BASE_URL or set api.base_url in .faqdesk/config.toml",
            )?;
            FaqClient::from_config(api).context("failed to build FAQ API client")?
        };

        Ok(Self {
            config,
            client,
            cache: FaqCache::new(),
        })
    }

    /// A list controller sharing this context's collection cache.
    pub fn list_controller(&self) -> FaqListController<FaqClient> {
        FaqListController::with_debounce(
            self.client.clone(),
            self.cache.clone(),
            Duration::from_millis(self.config.search.debounce_ms),
        )
    }

    /// The full collection, fetched at most once per process.
    pub async fn collection(&self) -> anyhow::Result<Arc<[Faq]>> {
        Ok(self.cache.get_or_fetch(&self.client).await?)
    }

    /// Look up one entry by id.
    pub async fn find(&self, id: &str) -> anyhow::Result<Faq> {
        let all = self.collection().await?;
        all.iter()
            .find(|faq| faq.id == id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() }.into())
    }
}
