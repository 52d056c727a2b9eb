//! Recompute-on-change caches for derived views.
//!
//! The collection is shared as `Arc<[Faq]>`; a new fetch produces a new
//! allocation, so pointer identity is enough to detect a changed collection.

use std::sync::Arc;

use faq_core::entities::{CategoryCount, Faq};

use crate::filter::{FaqFilter, compute_categories, filter};

/// Caches the last [`filter`] result keyed by collection identity and filter.
#[derive(Debug, Default)]
pub struct FilterMemo {
    last: Option<(Arc<[Faq]>, FaqFilter, Arc<[Faq]>)>,
    computations: u64,
}

impl FilterMemo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the visible entries, recomputing only if an input changed.
    pub fn get(&mut self, all: &Arc<[Faq]>, filter_by: &FaqFilter) -> Arc<[Faq]> {
        if let Some((cached_all, cached_filter, visible)) = &self.last {
            if Arc::ptr_eq(cached_all, all) && cached_filter == filter_by {
                return Arc::clone(visible);
            }
        }

        let visible: Arc<[Faq]> = filter(
            all,
            &filter_by.search_term,
            filter_by.category.as_deref(),
        )
        .into();
        self.computations += 1;
        tracing::trace!(
            total = all.len(),
            visible = visible.len(),
            "recomputed filtered FAQs"
        );
        self.last = Some((Arc::clone(all), filter_by.clone(), Arc::clone(&visible)));
        visible
    }

    /// How many times the filter actually ran.
    #[must_use]
    pub const fn computations(&self) -> u64 {
        self.computations
    }
}

/// Caches the tag histogram keyed by collection identity.
#[derive(Debug, Default)]
pub struct CategoryMemo {
    last: Option<(Arc<[Faq]>, Arc<CategoryCount>)>,
}

impl CategoryMemo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, all: &Arc<[Faq]>) -> Arc<CategoryCount> {
        if let Some((cached_all, categories)) = &self.last {
            if Arc::ptr_eq(cached_all, all) {
                return Arc::clone(categories);
            }
        }

        let categories = Arc::new(compute_categories(all));
        self.last = Some((Arc::clone(all), Arc::clone(&categories)));
        categories
    }
}
