//! Recent search storage abstraction.

use crate::domain::error::Result;
use crate::domain::SearchItem;
use async_trait::async_trait;

/// Abstraction over the store of recently searched terms.
///
/// Saving is best-effort from the controller's point of view: a failed
/// [`save`](RecentTermPort::save) is logged and otherwise ignored.
#[async_trait]
pub trait RecentTermPort: Send + Sync {
    /// Records that `item` was searched.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    async fn save(&self, item: SearchItem) -> Result<()>;

    /// Lists remembered searches, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    async fn recent_items(&self) -> Result<Vec<SearchItem>>;
}
