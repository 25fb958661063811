//! Application layer: pagination state machine and event composition.
//!
//! This module holds the pure, synchronous core of the controller. It never
//! performs I/O and never awaits; the runtime in [`controller`](crate::controller)
//! feeds it events one at a time and executes the actions it returns.
//!
//! # Architecture
//!
//! ```text
//! search text ─┐
//! load more ───┼─▶ handle_event ─▶ SearchState ─▶ Actions ─▶ runtime
//! outcomes ────┘        ▲                                      │
//!                       └────────── FetchCompleted ────────────┘
//! ```
//!
//! # Modules
//!
//! - [`accumulator`]: Folds tagged pages into the result set
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Gating, page numbering and outcome folding
//! - [`modes`]: Loading phase enum
//! - [`state`]: Pagination snapshot and the state slot
//!
//! # Example
//!
//! ```rust
//! use photosearch::app::{handle_event, Action, Event, SearchState};
//!
//! let mut state = SearchState::new(20);
//! let actions = handle_event(&mut state, &Event::SearchText("Kittens".into()));
//! assert!(matches!(actions[1], Action::Dispatch(_)));
//! ```

pub mod accumulator;
pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use accumulator::{accumulate, ResultAccumulator};
pub use actions::{Action, PageUpdate};
pub use handler::{handle_event, Event};
pub use modes::LoadingPhase;
pub use state::{PaginationState, SearchState};
