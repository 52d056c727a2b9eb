//! Keyed, fetch-once store for FAQ collections.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use faq_client::{FaqSource, FetchError};
use faq_core::entities::Faq;
use tokio::sync::OnceCell;

type Slot = Arc<OnceCell<Arc<[Faq]>>>;

/// Collections keyed by endpoint URL.
///
/// Concurrent loads of one key share a single fetch. A successful result is
/// kept until [`FaqCache::invalidate`]; a failed fetch leaves the key empty
/// so the next load tries again. Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct FaqCache {
    slots: Arc<Mutex<HashMap<String, Slot>>>,
}

impl FaqCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached collection for `source`, fetching it if absent.
    ///
    /// # Errors
    ///
    /// Returns the source's [`FetchError`] when the fetch fails.
    pub async fn get_or_fetch<S: FaqSource>(&self, source: &S) -> Result<Arc<[Faq]>, FetchError> {
        let endpoint = source.endpoint();
        let slot = self.slot(endpoint);

        slot.get_or_try_init(|| async {
            tracing::debug!(endpoint, "fetching FAQ collection");
            source.fetch_all().await.map(Arc::from)
        })
        .await
        .cloned()
    }

    /// Cached collection for `endpoint`, without fetching.
    #[must_use]
    pub fn get(&self, endpoint: &str) -> Option<Arc<[Faq]>> {
        self.lock().get(endpoint).and_then(|slot| slot.get().cloned())
    }

    /// Forget `endpoint` so the next load refetches.
    pub fn invalidate(&self, endpoint: &str) {
        if self.lock().remove(endpoint).is_some() {
            tracing::debug!(endpoint, "invalidated FAQ collection");
        }
    }

    fn slot(&self, endpoint: &str) -> Slot {
        Arc::clone(self.lock().entry(endpoint.to_string()).or_default())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
