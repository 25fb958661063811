//! Search terms, page requests and backend pages.
//!
//! [`SearchTerm`] guarantees the text handed to a search port is never empty.
//! [`SearchQuery`] pairs a term with the page being requested and [`ResultPage`]
//! is what the backend answers with.

use super::error::{PhotoSearchError, Result};
use super::photo::Photo;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty search text entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Wraps `text` as a search term.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoSearchError::EmptyTerm`] if `text` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use photosearch::domain::SearchTerm;
    ///
    /// assert!(SearchTerm::new("Kittens").is_ok());
    /// assert!(SearchTerm::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(PhotoSearchError::EmptyTerm);
        }
        Ok(Self(text))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SearchTerm {
    type Error = PhotoSearchError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SearchTerm> for String {
    fn from(term: SearchTerm) -> Self {
        term.0
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A request for one page of results for a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub term: SearchTerm,
    /// One-based page number.
    pub page: u32,
    pub per_page: u32,
}

impl SearchQuery {
    #[must_use]
    pub const fn new(term: SearchTerm, page: u32, per_page: u32) -> Self {
        Self { term, page, per_page }
    }
}

/// One page of results as reported by the search backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPage {
    /// Page number the backend says it returned.
    pub page: u32,
    /// Total number of pages available for the term.
    pub total_pages: u32,
    pub items: Vec<Photo>,
}
