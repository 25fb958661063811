//! Folding tagged pages into the visible result set.
//!
//! The result set is derived, never owned separately: it is the running fold of
//! every [`PageUpdate`] in dispatch order. A page tagged `is_new_search` replaces
//! the set; any other page is appended to it. Failed fetches arrive as empty pages
//! and leave an appended set unchanged.

use super::actions::PageUpdate;
use crate::domain::Photo;

/// One fold step: `items` if `is_new_search`, otherwise `previous ++ items`.
///
/// # Examples
///
/// ```
/// use photosearch::app::accumulate;
///
/// assert_eq!(accumulate(vec![1, 2], vec![3], false), vec![1, 2, 3]);
/// assert_eq!(accumulate(vec![1, 2], vec![3], true), vec![3]);
/// ```
#[must_use]
pub fn accumulate<T>(mut previous: Vec<T>, items: Vec<T>, is_new_search: bool) -> Vec<T> {
    if is_new_search {
        return items;
    }
    previous.extend(items);
    previous
}

/// Running result set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultAccumulator {
    items: Vec<Photo>,
}

impl ResultAccumulator {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Folds `update` into the set and returns the result.
    pub fn fold(&mut self, update: &PageUpdate) -> &[Photo] {
        let previous = std::mem::take(&mut self.items);
        self.items = accumulate(previous, update.items.clone(), update.is_new_search);

        tracing::trace!(
            page = update.page,
            is_new_search = update.is_new_search,
            total_items = self.items.len(),
            "result set folded"
        );

        &self.items
    }

    #[must_use]
    pub fn items(&self) -> &[Photo] {
        &self.items
    }
}
