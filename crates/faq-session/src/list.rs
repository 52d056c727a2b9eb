//! The FAQ list controller.
//!
//! ```text
//! loading → error
//!         → empty     ⇄ populated
//! ```
//!
//! The collection is fetched once through the [`FaqCache`]; search, category,
//! and sort changes only re-derive the visible entries. Exactly one entry may
//! be open at a time.

use std::sync::Arc;
use std::time::Duration;

use faq_client::{FaqSource, FetchError};
use faq_core::entities::{CategoryCount, Faq};
use faq_core::enums::{ListState, SortOption};
use faq_core::errors::CoreError;
use faq_core::responses::{CategoryEntry, FaqCard, FaqListResponse};
use faq_search::{CategoryMemo, FaqFilter, FilterMemo, sorted_categories};

use crate::cache::FaqCache;
use crate::debounce::{DEFAULT_DEBOUNCE, Debounce};
use crate::error::SessionError;
use crate::expansion::FaqItem;

#[derive(Debug)]
pub struct FaqListController<S> {
    source: S,
    cache: FaqCache,
    state: ListState,
    error: Option<FetchError>,
    all: Arc<[Faq]>,
    visible: Arc<[Faq]>,
    categories: Arc<CategoryCount>,
    search: Debounce<String>,
    selected_category: Option<String>,
    sort: Option<SortOption>,
    open_faq_id: Option<String>,
    filter_memo: FilterMemo,
    category_memo: CategoryMemo,
}

impl<S: FaqSource> FaqListController<S> {
    #[must_use]
    pub fn new(source: S, cache: FaqCache) -> Self {
        Self::with_debounce(source, cache, DEFAULT_DEBOUNCE)
    }

    #[must_use]
    pub fn with_debounce(source: S, cache: FaqCache, delay: Duration) -> Self {
        Self {
            source,
            cache,
            state: ListState::Loading,
            error: None,
            all: Arc::from(Vec::new()),
            visible: Arc::from(Vec::new()),
            categories: Arc::default(),
            search: Debounce::new(String::new(), delay),
            selected_category: None,
            sort: None,
            open_faq_id: None,
            filter_memo: FilterMemo::new(),
            category_memo: CategoryMemo::new(),
        }
    }

    // ── Loading ────────────────────────────────────────────────────

    /// Fetch the collection (once) and derive the visible entries.
    ///
    /// Calling again after the first load returns the current state without
    /// a network call.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Fetch`] when the collection cannot be
    /// retrieved. The controller is then in [`ListState::Error`] and
    /// [`Self::error_message`] holds the display text.
    pub async fn load(&mut self) -> Result<ListState, SessionError> {
        if self.state != ListState::Loading {
            return Ok(self.state);
        }

        match self.cache.get_or_fetch(&self.source).await {
            Ok(all) => {
                self.categories = self.category_memo.get(&all);
                self.all = all;
                self.derive()?;
                tracing::debug!(
                    endpoint = self.source.endpoint(),
                    total = self.all.len(),
                    state = %self.state,
                    "FAQ list loaded"
                );
                Ok(self.state)
            }
            Err(e) => {
                tracing::warn!(endpoint = self.source.endpoint(), error = ?e, "FAQ list failed to load");
                self.transition(ListState::Error)?;
                self.error = Some(e.clone());
                Err(e.into())
            }
        }
    }

    /// Drop the cached collection and load again from scratch.
    ///
    /// Filters and the open entry survive.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub async fn reload(&mut self) -> Result<ListState, SessionError> {
        self.cache.invalidate(self.source.endpoint());
        self.state = ListState::Loading;
        self.error = None;
        self.load().await
    }

    // ── Filters ────────────────────────────────────────────────────

    /// Update the raw search term. The visible entries follow once the
    /// term settles; see [`Self::refresh`] and [`Self::settle`].
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search.push(term.into());
    }

    /// Apply the search term if it has settled.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Core`] if re-deriving would break the
    /// lifecycle.
    pub fn refresh(&mut self) -> Result<ListState, SessionError> {
        if self.search.poll() {
            self.rederive()?;
        }
        Ok(self.state)
    }

    /// Wait for the search term to settle, then apply it.
    ///
    /// # Errors
    ///
    /// See [`Self::refresh`].
    pub async fn settle(&mut self) -> Result<ListState, SessionError> {
        if self.search.settle().await {
            self.rederive()?;
        }
        Ok(self.state)
    }

    /// Select a category (or `None` for all). Applies immediately.
    ///
    /// # Errors
    ///
    /// See [`Self::refresh`].
    pub fn set_selected_category(&mut self, category: Option<String>) -> Result<ListState, SessionError> {
        self.selected_category = category;
        self.rederive()?;
        Ok(self.state)
    }

    /// Order the visible entries. `None` keeps collection order.
    ///
    /// # Errors
    ///
    /// See [`Self::refresh`].
    pub fn set_sort(&mut self, sort: Option<SortOption>) -> Result<ListState, SessionError> {
        self.sort = sort;
        self.rederive()?;
        Ok(self.state)
    }

    /// Clear the search term and category together.
    ///
    /// # Errors
    ///
    /// See [`Self::refresh`].
    pub fn reset_filters(&mut self) -> Result<ListState, SessionError> {
        self.search.reset(String::new());
        self.selected_category = None;
        self.rederive()?;
        Ok(self.state)
    }

    // ── Accordion ──────────────────────────────────────────────────

    /// Open `id`, or close it if it is already open.
    pub fn toggle_faq(&mut self, id: &str) {
        if self.open_faq_id.as_deref() == Some(id) {
            self.open_faq_id = None;
        } else {
            self.open_faq_id = Some(id.to_string());
        }
    }

    #[must_use]
    pub fn open_faq_id(&self) -> Option<&str> {
        self.open_faq_id.as_deref()
    }

    // ── Derived views ──────────────────────────────────────────────

    #[must_use]
    pub const fn state(&self) -> ListState {
        self.state
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    #[must_use]
    pub const fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// The raw, possibly unsettled search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        self.search.current()
    }

    /// The search term the visible entries were filtered with.
    #[must_use]
    pub fn debounced_search_term(&self) -> &str {
        self.search.settled()
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// Every fetched entry, unfiltered.
    #[must_use]
    pub fn all(&self) -> &[Faq] {
        &self.all
    }

    /// Visible entries after filtering (and sorting, if set).
    #[must_use]
    pub fn faqs(&self) -> &[Faq] {
        &self.visible
    }

    /// Tag histogram over the full collection.
    #[must_use]
    pub fn categories(&self) -> &CategoryCount {
        &self.categories
    }

    #[must_use]
    pub fn category_entries(&self) -> Vec<CategoryEntry> {
        sorted_categories(&self.categories)
    }

    /// Visible entries as items controlled by this list's accordion.
    #[must_use]
    pub fn items(&self) -> Vec<FaqItem> {
        self.visible
            .iter()
            .map(|faq| {
                let open = self.open_faq_id.as_deref() == Some(faq.id.as_str());
                FaqItem::controlled(faq.clone(), open)
            })
            .collect()
    }

    /// Items split in two columns; the left one takes the extra entry.
    #[must_use]
    pub fn columns(&self) -> (Vec<FaqItem>, Vec<FaqItem>) {
        let mut left = self.items();
        let right = left.split_off(left.len().div_ceil(2));
        (left, right)
    }

    /// `Showing N result(s)`, qualified by the applied term and category.
    /// Absent while loading or after a failed load.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        if !matches!(self.state, ListState::Empty | ListState::Populated) {
            return None;
        }

        let count = self.visible.len();
        let noun = if count == 1 { "result" } else { "results" };
        let mut summary = format!("Showing {count} {noun}");
        let term = self.search.settled();
        if !term.is_empty() {
            summary.push_str(&format!(" for \"{term}\""));
        }
        if let Some(category) = &self.selected_category {
            summary.push_str(&format!(" in \"{category}\""));
        }
        Some(summary)
    }

    #[must_use]
    pub fn view(&self) -> FaqListResponse {
        let (left, right) = self.columns();
        FaqListResponse {
            state: self.state,
            summary: self.summary(),
            error: self.error_message(),
            search_term: self.search.settled().clone(),
            selected_category: self.selected_category.clone(),
            categories: self.category_entries(),
            left_column: left.into_iter().map(FaqCard::from).collect(),
            right_column: right.into_iter().map(FaqCard::from).collect(),
        }
    }

    // ── Internals ──────────────────────────────────────────────────

    /// Recompute after a filter change. A no-op until a load succeeded.
    fn rederive(&mut self) -> Result<(), CoreError> {
        if matches!(self.state, ListState::Empty | ListState::Populated) {
            self.derive()
        } else {
            Ok(())
        }
    }

    fn derive(&mut self) -> Result<(), CoreError> {
        let filter = FaqFilter::new(self.search.settled().clone(), self.selected_category.clone());
        let mut visible = self.filter_memo.get(&self.all, &filter);
        if let Some(sort) = self.sort {
            let mut sorted = visible.to_vec();
            faq_search::sort(&mut sorted, sort);
            visible = sorted.into();
        }
        self.visible = visible;

        let next = if self.visible.is_empty() {
            ListState::Empty
        } else {
            ListState::Populated
        };
        self.transition(next)
    }

    fn transition(&mut self, next: ListState) -> Result<(), CoreError> {
        if !self.state.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                entity: "faq_list".to_string(),
                from: self.state.to_string(),
                to: next.to_string(),
            });
        }
        self.state = next;
        Ok(())
    }
}
