//! Search backend abstraction.

use crate::domain::{ResultPage, SearchQuery};
use crate::domain::error::Result;
use async_trait::async_trait;

/// Abstraction over the photo search backend.
///
/// Implementations must be shareable across tasks: the executor calls
/// [`search`](SearchPort::search) from a spawned task for every dispatch.
///
/// # Examples
///
/// ```no_run
/// use photosearch::domain::{SearchQuery, SearchTerm};
/// use photosearch::ports::{CatalogSearch, SearchPort};
///
/// # async fn demo() -> photosearch::domain::Result<()> {
/// let port = CatalogSearch::sample();
/// let page = port.search(&SearchQuery::new(SearchTerm::new("kittens")?, 1, 20)).await?;
/// println!("{} of {}", page.page, page.total_pages);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait SearchPort: Send + Sync {
    /// Fetches one page of results for `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot produce the page. The controller
    /// turns any error into the `Failure` phase.
    async fn search(&self, query: &SearchQuery) -> Result<ResultPage>;
}
