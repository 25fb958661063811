//! Plain-text rendering of a [`ResultsViewModel`].
//!
//! Used by the demo binary. The indicator is rendered as a single line above or
//! below the list depending on its placement.

use crate::app::PaginationState;
use crate::domain::Photo;
use crate::ui::viewmodel::{compute_viewmodel, IndicatorKind, IndicatorPlacement, ResultsViewModel};
use std::fmt::Write as _;

/// Pairs published states with the result sets that follow them.
///
/// A state is only remembered; the screen is rendered when the result set for
/// that state arrives, so an indicator is never drawn over a stale list.
#[derive(Debug, Default)]
pub struct ResultsScreen {
    state: PaginationState,
    photos: Vec<Photo>,
}

impl ResultsScreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_state(&mut self, state: PaginationState) {
        self.state = state;
    }

    /// Stores the new result set and renders the screen.
    pub fn apply_results(&mut self, photos: Vec<Photo>) -> String {
        self.photos = photos;
        render(&compute_viewmodel(&self.state, &self.photos))
    }
}

/// Renders the view model as newline-separated text.
///
/// # Example
///
/// ```rust
/// use photosearch::app::PaginationState;
/// use photosearch::ui::{compute_viewmodel, render};
///
/// let vm = compute_viewmodel(&PaginationState::default(), &[]);
/// assert_eq!(render(&vm), "  (no results)\n");
/// ```
#[must_use]
pub fn render(vm: &ResultsViewModel) -> String {
    let mut out = String::new();

    let indicator_line = vm.indicator.map(|indicator| match indicator.kind {
        IndicatorKind::Loading => "  … loading",
        IndicatorKind::Failure => "  ! failed to load, send `+` to retry",
    });
    let placement = vm.indicator.map(|i| i.placement);

    if let (Some(line), Some(IndicatorPlacement::Top)) = (indicator_line, placement) {
        let _ = writeln!(out, "{line}");
    }

    if vm.items.is_empty() {
        let _ = writeln!(out, "  (no results)");
    }
    for (index, item) in vm.items.iter().enumerate() {
        let _ = writeln!(out, "{:>4}. {}  {}", index + 1, item.title, item.url);
    }

    if let (Some(line), Some(IndicatorPlacement::Bottom)) = (indicator_line, placement) {
        let _ = writeln!(out, "{line}");
    }

    out
}
