//! Photosearch: a paginated search controller for photo browsing screens.
//!
//! The crate coordinates three event streams that a search screen produces:
//! - Search text changes typed by the user
//! - "Load more" triggers fired when the list is scrolled to its end
//! - Responses from the search backend
//!
//! and keeps one coherent pagination state plus an accumulated result list.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs)                                   │  ← stdin demo
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (controller)                               │  ← Single state slot
//! │  - Merges inputs and outcomes into one queue        │
//! │  - Executes actions in order                        │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Application   │   │ Worker        │   │ View          │
//! │ (app/)        │   │ (worker/)     │   │ (ui/)         │
//! │ - Gating      │   │ - Fetch       │   │ - Indicators  │
//! │ - Paging      │   │ - Recent save │   │ - Image URLs  │
//! │ - Fold        │   │ - Tagging     │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Ports & Domain                                     │
//! │  - SearchPort / RecentTermPort (ports/)             │
//! │  - In-memory adapters (ports/catalog, storage/)     │
//! │  - Photo, SearchTerm, errors (domain/)              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Pagination state machine with event/action model
//! - [`controller`]: Tokio event loop owning the state slot
//! - [`domain`]: Core domain types (Photo, SearchTerm, errors)
//! - [`ports`]: Search and recent-term abstractions, catalog adapter
//! - [`storage`]: In-memory recent-term store
//! - [`worker`]: Request execution against the ports
//! - [`ui`]: View model computation
//! - `observability`: Tracing subscriber setup
//!
//! # Configuration
//!
//! Configuration is read from a TOML file:
//!
//! ```toml
//! per_page = 20
//! recent_capacity = 20
//! trace_level = "debug"
//! catalog_path = "photos.json"
//! ```
//!
//! # Key Design Decisions
//!
//! ## Pure Handler, Effectful Runtime
//!
//! All gating, page numbering and outcome folding happens in
//! [`app::handle_event`], a synchronous function over `&mut SearchState`. The
//! runtime only moves events in and executes the returned actions.
//!
//! ## Generation Tagging
//!
//! Each accepted term starts a new generation. Outcomes carry the request they
//! answer, and outcomes from older generations are dropped instead of being
//! allowed to overwrite the state of the term on screen.
//!
//! ## Fire-and-Forget Recent Terms
//!
//! The recent-term save is spawned next to the fetch and never awaited by it.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod controller;
pub mod domain;
pub mod ports;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Event, LoadingPhase, PaginationState, SearchState};
pub use controller::{Input, InputSender, Output, SearchController};
pub use domain::{PhotoSearchError, Result};

use serde::Deserialize;
use std::path::Path;

/// Default number of photos requested per page.
const DEFAULT_PER_PAGE: u32 = 20;

/// Default number of recent search terms kept.
const DEFAULT_RECENT_CAPACITY: usize = 20;

/// Controller configuration.
///
/// # Example
///
/// ```toml
/// per_page = 30
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Photos requested per page. Default: 20
    pub per_page: u32,

    /// Maximum number of recent search terms remembered. Default: 20
    pub recent_capacity: usize,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error` or any `EnvFilter`
    /// directive. `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,

    /// JSON file with an array of photos served by the catalog search.
    ///
    /// The built-in sample catalog is used when unset.
    pub catalog_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            recent_capacity: DEFAULT_RECENT_CAPACITY,
            trace_level: None,
            catalog_path: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoSearchError::Config`] if the text is not valid TOML, a
    /// value has the wrong type, or `per_page` is zero.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| PhotoSearchError::Config(format!("failed to parse config: {e}")))?;

        if config.per_page == 0 {
            return Err(PhotoSearchError::Config("per_page must be at least 1".to_string()));
        }

        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading configuration");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

/// Creates the controller's state slot from configuration.
///
/// # Example
///
/// ```rust
/// use photosearch::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.per_page, 20);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> SearchState {
    tracing::debug!(per_page = config.per_page, "initializing search state");
    SearchState::new(config.per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(Config::from_toml_str("").expect("valid toml"), Config::default());
    }

    #[test]
    fn toml_fills_missing_keys_with_defaults() {
        let config = Config::from_toml_str("per_page = 5\ntrace_level = \"debug\"\n").expect("valid toml");

        assert_eq!(config.per_page, 5);
        assert_eq!(config.recent_capacity, DEFAULT_RECENT_CAPACITY);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn toml_rejects_zero_per_page() {
        assert!(matches!(
            Config::from_toml_str("per_page = 0"),
            Err(PhotoSearchError::Config(_))
        ));
    }

    #[test]
    fn toml_rejects_wrong_types() {
        assert!(matches!(
            Config::from_toml_str("per_page = \"many\""),
            Err(PhotoSearchError::Config(_))
        ));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("photosearch.toml");
        std::fs::write(&path, "recent_capacity = 3\n").expect("write config");

        let config = Config::load(&path).expect("valid config");
        assert_eq!(config.recent_capacity, 3);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(
            Config::load(dir.path().join("missing.toml")),
            Err(PhotoSearchError::Io(_))
        ));
    }
}
