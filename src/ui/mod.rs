//! Presentation layer for the accumulated results.
//!
//! Turns the committed [`PaginationState`](crate::app::PaginationState) and the
//! folded result set into display-ready data. Nothing here performs I/O.
//!
//! ```text
//! PaginationState + [Photo] → compute_viewmodel → ResultsViewModel → render → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types and their computation
//! - [`renderer`]: Plain-text rendering and state/result pairing for the demo binary

pub mod renderer;
pub mod viewmodel;

pub use renderer::{render, ResultsScreen};
pub use viewmodel::{
    compute_viewmodel, Indicator, IndicatorKind, IndicatorPlacement, PhotoViewModel, ResultsViewModel,
};
