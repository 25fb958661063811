//! Event loop that owns the state slot and drives the executor.
//!
//! [`SearchController::transform`] spawns one Tokio task that owns the
//! [`SearchState`] and the [`ResultAccumulator`]. Search text, load-more triggers
//! and fetch outcomes are merged into a single queue and handled one at a time,
//! so every gating decision reads the latest committed state and a published
//! state is always followed by its page before anything else is emitted.
//!
//! ```text
//!   search_text ─┐
//!                ├─ select ─▶ handle_event ─▶ PublishState ──▶ pagination_state
//!   load_more ───┘                │      └──▶ PublishPage ──▶ pages, results
//!                                 ▼
//!                             Dispatch ─▶ spawn(executor.execute)
//!                                                 │
//!   outcomes ◀────────────────────────────────────┘
//! ```
//!
//! # Shutdown
//!
//! The loop ends once both input streams are exhausted and no fetch is
//! outstanding. Fetches abandoned by a newer term are not waited for; their
//! outcomes are dropped.
//!
//! # Example
//!
//! ```no_run
//! use photosearch::controller::{Input, SearchController};
//! use photosearch::ports::CatalogSearch;
//! use photosearch::storage::MemoryRecentTerms;
//! use photosearch::worker::RequestExecutor;
//! use photosearch::app::SearchState;
//! use std::sync::Arc;
//!
//! # async fn demo() -> photosearch::domain::Result<()> {
//! let executor = RequestExecutor::new(
//!     Arc::new(CatalogSearch::sample()),
//!     Arc::new(MemoryRecentTerms::new(20)),
//! );
//! let (sender, input) = Input::channel();
//! let mut output = SearchController::new(executor, SearchState::new(20)).transform(input);
//!
//! sender.search_text("Kittens")?;
//! while let Some(state) = output.pagination_state.recv().await {
//!     println!("{state}");
//! }
//! # Ok(())
//! # }
//! ```

use crate::app::{handle_event, Action, Event, PageUpdate, PaginationState, ResultAccumulator, SearchState};
use crate::domain::error::{PhotoSearchError, Result};
use crate::domain::Photo;
use crate::worker::{FetchOutcome, RequestExecutor};
use futures_util::stream::{self, BoxStream, Stream};
use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Raw input channels pushed by the UI layer.
pub struct Input {
    pub search_text: BoxStream<'static, String>,
    pub load_more: BoxStream<'static, ()>,
}

impl Input {
    #[must_use]
    pub fn new<S, L>(search_text: S, load_more: L) -> Self
    where
        S: Stream<Item = String> + Send + 'static,
        L: Stream<Item = ()> + Send + 'static,
    {
        Self {
            search_text: search_text.boxed(),
            load_more: load_more.boxed(),
        }
    }

    /// Creates push-style inputs backed by unbounded channels.
    ///
    /// Dropping every clone of the returned [`InputSender`] ends both streams.
    #[must_use]
    pub fn channel() -> (InputSender, Self) {
        let (text_tx, text_rx) = mpsc::unbounded_channel();
        let (more_tx, more_rx) = mpsc::unbounded_channel();

        let sender = InputSender {
            search_text: text_tx,
            load_more: more_tx,
        };
        (sender, Self::new(receiver_stream(text_rx), receiver_stream(more_rx)))
    }
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Input").finish_non_exhaustive()
    }
}

fn receiver_stream<T: Send + 'static>(rx: mpsc::UnboundedReceiver<T>) -> BoxStream<'static, T> {
    stream::unfold(rx, |mut rx| async move { rx.recv().await.map(|item| (item, rx)) }).boxed()
}

/// Push handle for [`Input::channel`].
#[derive(Debug, Clone)]
pub struct InputSender {
    search_text: mpsc::UnboundedSender<String>,
    load_more: mpsc::UnboundedSender<()>,
}

impl InputSender {
    /// Queues a raw search text event.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoSearchError::Closed`] if the event loop has stopped.
    pub fn search_text(&self, text: impl Into<String>) -> Result<()> {
        self.search_text
            .send(text.into())
            .map_err(|_| PhotoSearchError::Closed)
    }

    /// Queues a load-more trigger.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoSearchError::Closed`] if the event loop has stopped.
    pub fn load_more(&self) -> Result<()> {
        self.load_more.send(()).map_err(|_| PhotoSearchError::Closed)
    }
}

/// Output streams of a running controller.
#[derive(Debug)]
pub struct Output {
    /// Every committed snapshot, starting with the initial one.
    pub pagination_state: mpsc::UnboundedReceiver<PaginationState>,

    /// One tagged page per committed fetch outcome.
    pub pages: mpsc::UnboundedReceiver<PageUpdate>,

    /// The accumulated result set after each page.
    pub results: mpsc::UnboundedReceiver<Vec<Photo>>,

    /// Resolves to the final snapshot when the loop stops.
    pub task: JoinHandle<PaginationState>,
}

struct Publishers {
    states: mpsc::UnboundedSender<PaginationState>,
    pages: mpsc::UnboundedSender<PageUpdate>,
    results: mpsc::UnboundedSender<Vec<Photo>>,
}

/// Serializes all state access for one search screen.
#[derive(Debug)]
pub struct SearchController {
    executor: RequestExecutor,
    state: SearchState,
}

impl SearchController {
    #[must_use]
    pub const fn new(executor: RequestExecutor, state: SearchState) -> Self {
        Self { executor, state }
    }

    /// Starts the event loop over `input` and returns its outputs.
    ///
    /// The initial snapshot is published before this returns. Must be called
    /// from within a Tokio runtime.
    #[must_use]
    pub fn transform(self, input: Input) -> Output {
        let (states_tx, pagination_state) = mpsc::unbounded_channel();
        let (pages_tx, pages) = mpsc::unbounded_channel();
        let (results_tx, results) = mpsc::unbounded_channel();

        let publishers = Publishers {
            states: states_tx,
            pages: pages_tx,
            results: results_tx,
        };
        publish(&publishers.states, self.state.pagination.clone());

        let span = tracing::debug_span!("search_controller", per_page = self.state.per_page);
        let task = tokio::spawn(self.run(input, publishers).instrument(span));

        Output {
            pagination_state,
            pages,
            results,
            task,
        }
    }

    async fn run(mut self, input: Input, publishers: Publishers) -> PaginationState {
        let mut events = stream::select(
            input.search_text.map(Event::SearchText),
            input.load_more.map(|()| Event::LoadMore),
        );
        let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<FetchOutcome>();
        let mut accumulator = ResultAccumulator::new();
        let mut inputs_open = true;

        tracing::debug!("search controller started");

        loop {
            if !inputs_open && self.state.in_flight.is_none() {
                break;
            }

            let event = tokio::select! {
                biased;
                Some(outcome) = outcome_rx.recv() => Event::FetchCompleted(outcome),
                next = events.next(), if inputs_open => match next {
                    Some(event) => event,
                    None => {
                        tracing::debug!("input streams closed");
                        inputs_open = false;
                        continue;
                    }
                },
                else => break,
            };

            for action in handle_event(&mut self.state, &event) {
                self.execute(action, &outcome_tx, &mut accumulator, &publishers);
            }
        }

        tracing::debug!(state = %self.state.pagination, "search controller stopped");
        self.state.pagination
    }

    fn execute(
        &self,
        action: Action,
        outcome_tx: &mpsc::UnboundedSender<FetchOutcome>,
        accumulator: &mut ResultAccumulator,
        publishers: &Publishers,
    ) {
        match action {
            Action::PublishState(state) => publish(&publishers.states, state),
            Action::Dispatch(request) => {
                let executor = self.executor.clone();
                let outcome_tx = outcome_tx.clone();
                tokio::spawn(
                    async move {
                        let outcome = executor.execute(request).await;
                        if outcome_tx.send(outcome).is_err() {
                            tracing::trace!("controller stopped, dropping fetch outcome");
                        }
                    }
                    .in_current_span(),
                );
            }
            Action::PublishPage(update) => {
                let items = accumulator.fold(&update).to_vec();
                publish(&publishers.pages, update);
                publish(&publishers.results, items);
            }
        }
    }
}

fn publish<T>(tx: &mpsc::UnboundedSender<T>, value: T) {
    if tx.send(value).is_err() {
        tracing::trace!("output receiver dropped");
    }
}
