//! Event handling and state transition logic.
//!
//! This module implements the handler that turns raw search text, load-more
//! triggers and fetch outcomes into state transitions and actions. It is the only
//! code that writes to [`SearchState`].
//!
//! # Gating Rules
//!
//! **Search text** is checked in this order:
//! 1. Equal to the previous raw text: suppressed (empty text included)
//! 2. Empty: ignored, no transition
//! 3. `Loading` with no fetch of ours outstanding: dropped
//! 4. Otherwise accepted. A new generation starts, any outstanding fetch is
//!    abandoned and page 1 is dispatched with `total_pages` reset
//!
//! **Load more** is accepted only with an active term, when
//! `continue_fetching() && !is_loading()`. It dispatches `current_page + 1`, so
//! after a failure the page that failed is requested again.
//!
//! **Fetch outcomes** are folded only if they answer the outstanding request of
//! the current generation. Anything else is stale and discarded silently. On
//! success the current page is clamped to the reported total, so a search with
//! no matches commits `Idle(0, 0)`.
//!
//! # Example
//!
//! ```rust
//! use photosearch::app::{handle_event, Action, Event, LoadingPhase, SearchState};
//!
//! let mut state = SearchState::new(20);
//! let actions = handle_event(&mut state, &Event::SearchText("Kittens".into()));
//!
//! assert_eq!(actions.len(), 2);
//! assert_eq!(state.pagination.phase, LoadingPhase::Loading);
//! assert_eq!(state.pagination.current_page, 1);
//! ```

use super::actions::{Action, PageUpdate};
use super::modes::LoadingPhase;
use super::state::SearchState;
use crate::domain::{SearchQuery, SearchTerm};
use crate::worker::{FetchOutcome, FetchRequest, FetchResult};

/// Inputs to the state machine, processed one at a time in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Raw search field content. May be empty or repeat the previous value.
    SearchText(String),

    /// The user scrolled near the end of the list.
    LoadMore,

    /// A dispatched fetch finished.
    FetchCompleted(FetchOutcome),
}

/// Processes an event, mutates the state slot and returns actions to execute.
///
/// Returns an empty vector when the event is suppressed, dropped or stale. A
/// non-empty result always starts with [`Action::PublishState`].
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut SearchState, event: &Event) -> Vec<Action> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchText(text) => handle_search_text(state, text),
        Event::LoadMore => handle_load_more(state),
        Event::FetchCompleted(outcome) => handle_fetch_completed(state, outcome),
    }
}

fn handle_search_text(state: &mut SearchState, text: &str) -> Vec<Action> {
    if state.last_text.as_deref() == Some(text) {
        tracing::trace!(text = %text, "duplicate search text suppressed");
        return vec![];
    }
    state.last_text = Some(text.to_string());

    let Ok(term) = SearchTerm::new(text) else {
        tracing::trace!("empty search text ignored");
        return vec![];
    };

    if state.pagination.is_loading() && state.in_flight.is_none() {
        tracing::debug!(term = %term, "search dropped while loading");
        return vec![];
    }

    if let Some(abandoned) = state.in_flight.take() {
        tracing::debug!(
            abandoned_term = %abandoned.query.term,
            abandoned_page = abandoned.query.page,
            "superseding outstanding fetch"
        );
    }

    state.generation += 1;
    state.active_term = Some(term.clone());

    tracing::debug!(term = %term, generation = state.generation, "new search accepted");

    dispatch(state, term, 1, None)
}

fn handle_load_more(state: &mut SearchState) -> Vec<Action> {
    let Some(term) = state.active_term.clone() else {
        tracing::trace!("load more ignored, no active term");
        return vec![];
    };

    let pagination = &state.pagination;
    if !pagination.continue_fetching() || pagination.is_loading() {
        tracing::trace!(
            phase = %pagination.phase,
            current_page = pagination.current_page,
            total_pages = ?pagination.total_pages,
            "load more dropped"
        );
        return vec![];
    }

    let page = pagination.current_page + 1;
    let total_pages = pagination.total_pages;
    dispatch(state, term, page, total_pages)
}

/// Moves to `Loading` for `page` of `term` and emits the request.
fn dispatch(state: &mut SearchState, term: SearchTerm, page: u32, total_pages: Option<u32>) -> Vec<Action> {
    let snapshot = state
        .pagination
        .clone()
        .update(LoadingPhase::Loading, page, total_pages)
        .with_new_search(page == 1);

    let request = FetchRequest {
        generation: state.generation,
        query: SearchQuery::new(term, page, state.per_page),
        snapshot: snapshot.clone(),
    };

    tracing::debug!(
        term = %request.query.term,
        page = page,
        generation = request.generation,
        "dispatching fetch"
    );

    state.pagination = snapshot.clone();
    state.in_flight = Some(request.clone());

    vec![Action::PublishState(snapshot), Action::Dispatch(request)]
}

fn handle_fetch_completed(state: &mut SearchState, outcome: &FetchOutcome) -> Vec<Action> {
    let is_current = state
        .in_flight
        .as_ref()
        .is_some_and(|pending| pending.same_dispatch(&outcome.request));

    if !is_current {
        tracing::debug!(
            term = %outcome.request.query.term,
            page = outcome.request.query.page,
            generation = outcome.request.generation,
            current_generation = state.generation,
            "discarding stale fetch outcome"
        );
        return vec![];
    }

    let Some(request) = state.in_flight.take() else {
        return vec![];
    };
    let snapshot = request.snapshot;

    let (next, items) = match &outcome.result {
        FetchResult::Loaded(page) => {
            // Never let the current page exceed a reported total.
            let current_page = page.page.min(page.total_pages);
            if current_page != page.page {
                tracing::debug!(
                    reported_page = page.page,
                    total_pages = page.total_pages,
                    "clamping current page to reported total"
                );
            }
            let next = snapshot.clone().update(LoadingPhase::Idle, current_page, Some(page.total_pages));
            (next, page.items.clone())
        }
        FetchResult::Failed { message } => {
            tracing::warn!(
                term = %request.query.term,
                page = request.query.page,
                error = %message,
                "fetch failed, rolling back page"
            );
            let next = snapshot.clone().update(
                LoadingPhase::Failure,
                snapshot.current_page.saturating_sub(1),
                snapshot.total_pages,
            );
            (next, vec![])
        }
    };

    tracing::debug!(state = %next, item_count = items.len(), "fetch outcome committed");

    state.pagination = next.clone();

    vec![
        Action::PublishState(next),
        Action::PublishPage(PageUpdate {
            page: request.query.page,
            items,
            is_new_search: snapshot.is_new_search,
        }),
    ]
}
