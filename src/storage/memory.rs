//! In-memory recent search store.
//!
//! Keeps the most recently searched terms in memory, newest first. Saving a term
//! that is already present moves it to the front instead of adding a second copy,
//! so paging through one term does not flood the list.
//!
//! # Thread Safety
//!
//! The list sits behind a `std::sync::Mutex`. No lock is held across an await
//! point, so the store can be shared by every fetch task through an `Arc`.

use crate::domain::error::{PhotoSearchError, Result};
use crate::domain::SearchItem;
use crate::ports::RecentTermPort;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Bounded, most-recent-first list of searched terms.
#[derive(Debug)]
pub struct MemoryRecentTerms {
    items: Mutex<VecDeque<SearchItem>>,
    capacity: usize,
}

impl MemoryRecentTerms {
    /// Creates an empty store keeping at most `capacity` terms.
    ///
    /// A capacity of zero is treated as one.
    ///
    /// # Examples
    ///
    /// ```
    /// use photosearch::storage::MemoryRecentTerms;
    ///
    /// let store = MemoryRecentTerms::new(20);
    /// assert_eq!(store.capacity(), 20);
    /// ```
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    fn insert(&self, item: SearchItem) -> Result<()> {
        let _span = tracing::debug_span!("recent_terms_insert", term = %item.name).entered();

        let mut items = self
            .items
            .lock()
            .map_err(|e| PhotoSearchError::Storage(format!("recent terms lock poisoned: {e}")))?;

        if let Some(pos) = items.iter().position(|existing| existing.name == item.name) {
            tracing::trace!(position = pos, "moving existing term to front");
            items.remove(pos);
        }

        items.push_front(item);
        items.truncate(self.capacity);

        tracing::debug!(count = items.len(), "recent term saved");
        Ok(())
    }

    fn snapshot(&self) -> Result<Vec<SearchItem>> {
        let items = self
            .items
            .lock()
            .map_err(|e| PhotoSearchError::Storage(format!("recent terms lock poisoned: {e}")))?;
        Ok(items.iter().cloned().collect())
    }
}

#[async_trait]
impl RecentTermPort for MemoryRecentTerms {
    async fn save(&self, item: SearchItem) -> Result<()> {
        self.insert(item)
    }

    async fn recent_items(&self) -> Result<Vec<SearchItem>> {
        self.snapshot()
    }
}
