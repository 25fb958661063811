//! Domain layer for the photo search controller.
//!
//! This module contains the value types shared by every other layer, independent
//! of any runtime, transport or storage concern.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`photo`]: Photo model and image URL derivation
//! - [`query`]: Search terms, page requests and backend pages
//! - [`search_item`]: Recent search entries
//!
//! # Examples
//!
//! ```
//! use photosearch::domain::{SearchQuery, SearchTerm};
//!
//! let term = SearchTerm::new("Kittens")?;
//! let query = SearchQuery::new(term, 1, 20);
//! assert_eq!(query.page, 1);
//! # Ok::<(), photosearch::domain::PhotoSearchError>(())
//! ```

pub mod error;
pub mod photo;
pub mod query;
pub mod search_item;

pub use error::{PhotoSearchError, Result};
pub use photo::Photo;
pub use query::{ResultPage, SearchQuery, SearchTerm};
pub use search_item::SearchItem;
