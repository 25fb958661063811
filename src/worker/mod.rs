//! Request execution against the search and recent-term ports.
//!
//! This module performs the asynchronous half of every dispatch: calling the
//! search port and kicking off the best-effort recent-term save. It never touches
//! the controller's state; results travel back to the event loop as
//! [`FetchOutcome`] messages.
//!
//! # Architecture
//!
//! - `messages`: Request/outcome types tagged with term generation
//! - `handler`: [`RequestExecutor`] implementation

pub mod handler;
pub mod messages;

pub use handler::RequestExecutor;
pub use messages::{FetchOutcome, FetchRequest, FetchResult};
