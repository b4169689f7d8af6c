//! Filter-Sort-Paginate Engine
//!
//! Pure and infallible: an empty collection or a filter that matches nothing
//! yields an empty page, never an error. The source collection is only read.

use super::predicate::Predicate;
use crate::shared::application::{PaginatedResult, PaginationParams};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Chronological sort key; records without a usable instant go last
pub struct SortKey<R> {
    key: Arc<dyn Fn(&R) -> Option<DateTime<Utc>> + Send + Sync>,
}

impl<R> Clone for SortKey<R> {
    fn clone(&self) -> Self {
        Self {
            key: Arc::clone(&self.key),
        }
    }
}

impl<R> SortKey<R> {
    pub fn new<F>(key: F) -> Self
    where
        F: Fn(&R) -> Option<DateTime<Utc>> + Send + Sync + 'static,
    {
        Self { key: Arc::new(key) }
    }

    pub fn key_of(&self, record: &R) -> Option<DateTime<Utc>> {
        (self.key)(record)
    }
}

pub struct ListingEngine;

impl ListingEngine {
    /// Records matching `predicate`, in source order
    pub fn filter<R: Clone>(collection: &[R], predicate: &Predicate<R>) -> Vec<R> {
        collection
            .iter()
            .filter(|record| predicate.matches(record))
            .cloned()
            .collect()
    }

    /// Stable ascending sort by instant
    pub fn sort<R>(records: &mut [R], sort_key: &SortKey<R>) {
        // (false, t) < (true, _): dated records first, then undated in original order
        records.sort_by_cached_key(|record| {
            let key = sort_key.key_of(record);
            (key.is_none(), key)
        });
    }

    /// Filter, optionally sort, then cut out `page`
    ///
    /// A page beyond the last one falls back to page 1.
    pub fn apply<R: Clone>(
        collection: &[R],
        predicate: &Predicate<R>,
        sort_key: Option<&SortKey<R>>,
        page: usize,
        page_size: usize,
    ) -> PaginatedResult<R> {
        let mut filtered = Self::filter(collection, predicate);
        if let Some(sort_key) = sort_key {
            Self::sort(&mut filtered, sort_key);
        }

        let total_items = filtered.len();
        let mut params = PaginationParams::new(page, page_size);
        if params.page > params.total_pages(total_items) {
            params.page = 1;
        }

        let items: Vec<R> = filtered
            .into_iter()
            .skip(params.offset())
            .take(params.limit())
            .collect();

        PaginatedResult::new(items, total_items, &params)
    }
}
