//! Request and outcome messages exchanged between the event loop and fetch tasks.
//!
//! Every request carries the term generation it was dispatched under and the
//! pagination snapshot taken at dispatch time. Outcomes echo the request back so
//! the event handler can tell a current answer from one that belongs to a term
//! the user has already moved away from.

use crate::app::PaginationState;
use crate::domain::{ResultPage, SearchQuery};

/// One fetch composed by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Term generation this request belongs to.
    pub generation: u64,

    /// Term and page to fetch.
    pub query: SearchQuery,

    /// Pagination snapshot at dispatch time (phase is `Loading`).
    ///
    /// The outcome's state transition is computed from this value only.
    pub snapshot: PaginationState,
}

impl FetchRequest {
    /// Returns `true` if `other` answers the same dispatch as `self`.
    #[must_use]
    pub fn same_dispatch(&self, other: &Self) -> bool {
        self.generation == other.generation && self.query.page == other.query.page
    }
}

/// Outcome of the search port call for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// The backend returned a page.
    Loaded(ResultPage),

    /// The backend call failed.
    Failed {
        /// Human-readable error message.
        message: String,
    },
}

/// Completed fetch, tagged with the request it answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub request: FetchRequest,
    pub result: FetchResult,
}

impl FetchOutcome {
    #[must_use]
    pub const fn loaded(request: FetchRequest, page: ResultPage) -> Self {
        Self {
            request,
            result: FetchResult::Loaded(page),
        }
    }

    #[must_use]
    pub fn failed(request: FetchRequest, message: impl Into<String>) -> Self {
        Self {
            request,
            result: FetchResult::Failed {
                message: message.into(),
            },
        }
    }
}
