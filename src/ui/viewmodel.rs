//! View model types representing renderable results.
//!
//! View models are immutable and computed from the committed pagination state
//! and the accumulated photos. They contain no business logic, only
//! display-ready data.
//!
//! # Indicator placement
//!
//! While a fetch is outstanding or after it failed, a single indicator is shown:
//! at the top when the fetch was a new search (the list is about to be
//! replaced), at the bottom when it was a next page (the list is being
//! extended). No indicator is shown when idle.
//!
//! # Example
//!
//! ```rust
//! use photosearch::app::{LoadingPhase, PaginationState};
//! use photosearch::ui::{compute_viewmodel, IndicatorPlacement};
//!
//! let state = PaginationState::new(LoadingPhase::Loading, 2, Some(5), false);
//! let vm = compute_viewmodel(&state, &[]);
//!
//! assert_eq!(vm.indicator.map(|i| i.placement), Some(IndicatorPlacement::Bottom));
//! ```

use crate::app::{LoadingPhase, PaginationState};
use crate::domain::Photo;

/// Complete view model for one render of the results list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsViewModel {
    /// Photos in display order.
    pub items: Vec<PhotoViewModel>,

    /// Loading or failure indicator, if any.
    pub indicator: Option<Indicator>,

    /// Whether scrolling to the end should fire a load-more trigger.
    pub can_load_more: bool,
}

/// Display information for a single photo cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoViewModel {
    pub id: String,
    pub title: String,
    pub url: String,
}

impl From<&Photo> for PhotoViewModel {
    fn from(photo: &Photo) -> Self {
        Self {
            id: photo.id.clone(),
            title: photo.title.clone(),
            url: photo.image_url(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorKind {
    Loading,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorPlacement {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub kind: IndicatorKind,
    pub placement: IndicatorPlacement,
}

/// Computes the view model for `state` and the accumulated `photos`.
#[must_use]
pub fn compute_viewmodel(state: &PaginationState, photos: &[Photo]) -> ResultsViewModel {
    let kind = match state.phase {
        LoadingPhase::Idle => None,
        LoadingPhase::Loading => Some(IndicatorKind::Loading),
        LoadingPhase::Failure => Some(IndicatorKind::Failure),
    };

    let placement = if state.is_new_search {
        IndicatorPlacement::Top
    } else {
        IndicatorPlacement::Bottom
    };

    ResultsViewModel {
        items: photos.iter().map(PhotoViewModel::from).collect(),
        indicator: kind.map(|kind| Indicator { kind, placement }),
        can_load_more: !state.is_loading() && state.current_page > 0 && state.continue_fetching(),
    }
}
