//! Recent search entries.

use super::query::SearchTerm;
use serde::{Deserialize, Serialize};

/// A search term remembered by a [`RecentTermPort`](crate::ports::RecentTermPort).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub name: String,
    /// Unix timestamp of when the term was searched.
    pub searched_at: i64,
}

impl SearchItem {
    /// Creates an item for `term` stamped with the current time.
    #[must_use]
    pub fn new(term: &SearchTerm) -> Self {
        Self {
            name: term.as_str().to_string(),
            searched_at: chrono::Utc::now().timestamp(),
        }
    }
}
