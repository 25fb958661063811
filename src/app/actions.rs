//! Actions representing side effects to be executed by the controller runtime.
//!
//! The event handler is pure: it mutates [`SearchState`](super::SearchState) and
//! returns a `Vec<Action>` describing what the runtime must do next. The runtime
//! executes them in order, which is what keeps a published state and its page
//! paired in the output streams.
//!
//! # Example
//!
//! ```rust
//! use photosearch::app::{Action, PaginationState};
//!
//! let actions = vec![Action::PublishState(PaginationState::default())];
//! assert_eq!(actions.len(), 1);
//! ```

use super::state::PaginationState;
use crate::domain::Photo;
use crate::worker::FetchRequest;

/// Page of items tagged with whether it starts a new result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUpdate {
    /// Page that was requested.
    pub page: u32,
    /// Items to replace or append. Empty when the fetch failed.
    pub items: Vec<Photo>,
    /// `true` if consumers should replace their list instead of appending.
    pub is_new_search: bool,
}

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Emits a new snapshot on the pagination state stream.
    PublishState(PaginationState),

    /// Hands a request to the executor.
    ///
    /// The runtime spawns the fetch and feeds its outcome back as
    /// [`Event::FetchCompleted`](super::Event::FetchCompleted).
    Dispatch(FetchRequest),

    /// Emits a tagged page and folds it into the result set.
    PublishPage(PageUpdate),
}
