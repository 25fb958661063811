//! Request executor for dispatched fetches.
//!
//! [`RequestExecutor`] performs exactly one search port call per
//! [`FetchRequest`] and spawns the recent-term save next to it. The save runs as
//! a detached task: its completion and its outcome never influence the fetch
//! outcome, and a failed save is only logged.
//!
//! Spans are carried into spawned tasks with `tracing::Instrument`, so fetch and
//! save logs nest under the dispatch that caused them.

use crate::domain::error::Result;
use crate::domain::{ResultPage, SearchItem, SearchTerm};
use crate::ports::{RecentTermPort, SearchPort};
use crate::worker::{FetchOutcome, FetchRequest};
use futures_util::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Executes fetch requests against the injected ports.
///
/// Cheap to clone; both ports are shared behind `Arc`s.
#[derive(Clone)]
pub struct RequestExecutor {
    search: Arc<dyn SearchPort>,
    recent: Arc<dyn RecentTermPort>,
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor").finish_non_exhaustive()
    }
}

impl RequestExecutor {
    #[must_use]
    pub fn new(search: Arc<dyn SearchPort>, recent: Arc<dyn RecentTermPort>) -> Self {
        Self { search, recent }
    }

    /// Performs the fetch for `request` and tags the result with it.
    ///
    /// Must be called from within a Tokio runtime: the recent-term save is
    /// spawned onto it before the search port is awaited. A panicking search
    /// port is reported as a failed fetch.
    pub async fn execute(&self, request: FetchRequest) -> FetchOutcome {
        let span = tracing::debug_span!("execute_fetch",
            generation = request.generation,
            term = %request.query.term,
            page = request.query.page
        );

        async move {
            self.spawn_save(&request.query.term);

            let result = AssertUnwindSafe(self.search.search(&request.query))
                .catch_unwind()
                .await;

            Self::handle_search_result(request, result)
        }
        .instrument(span)
        .await
    }

    /// Spawns the best-effort save of `term`.
    ///
    /// The returned handle is only useful to tests; callers drop it.
    fn spawn_save(&self, term: &SearchTerm) -> JoinHandle<()> {
        let recent = Arc::clone(&self.recent);
        let item = SearchItem::new(term);
        let span = tracing::debug_span!("save_recent_term", term = %term);

        tokio::spawn(
            async move {
                match recent.save(item).await {
                    Ok(()) => tracing::trace!("recent term saved"),
                    Err(e) => tracing::debug!(error = %e, "recent term save failed, ignoring"),
                }
            }
            .instrument(span),
        )
    }

    /// Maps the port result to an outcome with consistent logging.
    fn handle_search_result(
        request: FetchRequest,
        result: std::result::Result<Result<ResultPage>, Box<dyn Any + Send>>,
    ) -> FetchOutcome {
        match result {
            Ok(Ok(page)) => {
                tracing::debug!(
                    reported_page = page.page,
                    total_pages = page.total_pages,
                    item_count = page.items.len(),
                    "fetch succeeded"
                );
                FetchOutcome::loaded(request, page)
            }
            Ok(Err(e)) => {
                tracing::debug!(error = %e, "fetch failed");
                FetchOutcome::failed(request, e.to_string())
            }
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                tracing::error!(panic = %message, "search port panicked");
                FetchOutcome::failed(request, format!("search port panicked: {message}"))
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
