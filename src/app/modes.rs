//! Loading phase state machine type.
//!
//! # State Machine
//!
//! ```text
//! Idle ──(search / load-more accepted)──▶ Loading
//! Loading ──(fetch success)──▶ Idle
//! Loading ──(fetch failure)──▶ Failure
//! Failure ──(search / load-more accepted)──▶ Loading
//! ```
//!
//! `Idle` is the initial phase. There is no terminal phase and `Failure` is never
//! left on its own: only a newly accepted search or load-more moves it forward.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current pagination status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoadingPhase {
    /// No fetch outstanding; the last one (if any) succeeded.
    #[default]
    Idle,

    /// Exactly one fetch is outstanding for the active term.
    Loading,

    /// The last fetch failed. The page counter has been rolled back.
    Failure,
}

impl fmt::Display for LoadingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "Idle",
            Self::Loading => "Loading",
            Self::Failure => "Failure",
        };
        f.write_str(name)
    }
}
