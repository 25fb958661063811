//! Error types for the photo search controller.
//!
//! This module defines the centralized error type [`PhotoSearchError`] and a type alias
//! [`Result`] used by the ports and adapters. The controller itself never returns these
//! across its public boundary: fetch failures are folded into the pagination phase and
//! recent-term failures are logged and dropped.

use thiserror::Error;

/// The main error type for photo search operations.
///
/// Port implementations return this type. Most variants carry a description string
/// so that adapters can wrap whatever their backing library reports.
///
/// # Examples
///
/// ```
/// use photosearch::domain::PhotoSearchError;
///
/// fn fetch() -> Result<(), PhotoSearchError> {
///     Err(PhotoSearchError::Transport("connection reset".to_string()))
/// }
///
/// assert!(fetch().is_err());
/// ```
#[derive(Debug, Error)]
pub enum PhotoSearchError {
    /// A search term was constructed from an empty string.
    #[error("search term must not be empty")]
    EmptyTerm,

    /// The search backend failed to produce a page.
    ///
    /// Raised by [`SearchPort`](crate::ports::SearchPort) implementations.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Reading or writing recent search terms failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input was pushed after the controller's event loop stopped.
    #[error("search controller has shut down")]
    Closed,
}

/// A specialized `Result` type for photo search operations.
pub type Result<T> = std::result::Result<T, PhotoSearchError>;
