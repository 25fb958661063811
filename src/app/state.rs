//! Pagination state and the controller's single state slot.
//!
//! This module defines [`PaginationState`], the immutable snapshot published on
//! every transition, and [`SearchState`], the container that the event handler
//! owns exclusively. `SearchState` holds everything the gating rules need to read:
//! the current snapshot, the last raw search text (for duplicate suppression), the
//! active term, the term generation and the one outstanding fetch.
//!
//! # Snapshots
//!
//! `PaginationState` is never mutated in place by the handler. Each transition
//! builds a replacement with [`PaginationState::update`] and stores it, so the
//! value captured in a [`FetchRequest`] at dispatch time cannot change under it.
//!
//! # Example
//!
//! ```rust
//! use photosearch::app::{LoadingPhase, PaginationState};
//!
//! let state = PaginationState::default();
//! assert!(state.continue_fetching());
//!
//! let state = state.update(LoadingPhase::Idle, 50, Some(50));
//! assert!(!state.continue_fetching());
//! ```

use super::modes::LoadingPhase;
use crate::domain::SearchTerm;
use crate::worker::FetchRequest;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable snapshot of the pagination status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub phase: LoadingPhase,

    /// Last page that completed successfully; `0` before any page has loaded.
    pub current_page: u32,

    /// Total pages reported by the backend, unknown until the first success.
    pub total_pages: Option<u32>,

    /// Whether the in-flight or most recent fetch is page 1 of its term.
    pub is_new_search: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            phase: LoadingPhase::Idle,
            current_page: 0,
            total_pages: None,
            is_new_search: true,
        }
    }
}

impl PaginationState {
    /// Creates a snapshot from its parts.
    #[must_use]
    pub const fn new(
        phase: LoadingPhase,
        current_page: u32,
        total_pages: Option<u32>,
        is_new_search: bool,
    ) -> Self {
        Self {
            phase,
            current_page,
            total_pages,
            is_new_search,
        }
    }

    /// Returns `true` while more pages may exist for the active term.
    ///
    /// True when the total is unknown or the current page has not reached it.
    #[must_use]
    pub fn continue_fetching(&self) -> bool {
        self.total_pages.map_or(true, |total| self.current_page < total)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == LoadingPhase::Loading
    }

    /// Returns a replacement snapshot with new phase and page counters.
    ///
    /// `is_new_search` is carried over unchanged.
    #[must_use]
    pub fn update(self, phase: LoadingPhase, current_page: u32, total_pages: Option<u32>) -> Self {
        Self {
            phase,
            current_page,
            total_pages,
            ..self
        }
    }

    #[must_use]
    pub fn with_new_search(self, is_new_search: bool) -> Self {
        Self {
            is_new_search,
            ..self
        }
    }
}

impl fmt::Display for PaginationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self
            .total_pages
            .map_or_else(|| "nil".to_string(), |t| t.to_string());
        let origin = if self.is_new_search { "new" } else { "more" };
        write!(f, "{}({}, {}, {})", self.phase, self.current_page, total, origin)
    }
}

/// The controller's single state slot.
///
/// Only [`handle_event`](crate::app::handle_event) mutates this value. The runtime
/// owns one instance and feeds it every event in arrival order.
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Latest committed snapshot.
    pub pagination: PaginationState,

    /// Last raw search text seen, including empty text.
    ///
    /// Consulted before any other rule so that consecutive identical texts are
    /// suppressed even when the first one was dropped by gating.
    pub last_text: Option<String>,

    /// Term whose load-more triggers are currently honoured.
    pub active_term: Option<SearchTerm>,

    /// Incremented each time a new term is accepted.
    ///
    /// Outcomes tagged with an older generation are discarded.
    pub generation: u64,

    /// The one fetch this controller is waiting on, if any.
    pub in_flight: Option<FetchRequest>,

    /// Page size sent with every query.
    pub per_page: u32,
}

impl SearchState {
    /// Creates a state slot with the default idle snapshot.
    ///
    /// # Example
    ///
    /// ```rust
    /// use photosearch::app::SearchState;
    ///
    /// let state = SearchState::new(20);
    /// assert_eq!(state.pagination.current_page, 0);
    /// assert!(state.in_flight.is_none());
    /// ```
    #[must_use]
    pub fn new(per_page: u32) -> Self {
        Self::with_pagination(PaginationState::default(), per_page)
    }

    /// Creates a state slot seeded with an arbitrary snapshot.
    #[must_use]
    pub const fn with_pagination(pagination: PaginationState, per_page: u32) -> Self {
        Self {
            pagination,
            last_text: None,
            active_term: None,
            generation: 0,
            in_flight: None,
            per_page,
        }
    }
}
