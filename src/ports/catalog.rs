//! In-memory search adapter.
//!
//! [`CatalogSearch`] answers queries from a fixed list of photos, matching the
//! term against photo titles with the Skim fuzzy matcher. It stands in for the
//! network backend in the binary and in tests.
//!
//! # Matching
//!
//! 1. Split the term on whitespace and lowercase each token
//! 2. Keep photos whose lowercased title fuzzy-matches every token
//! 3. Slice the matches into pages of `per_page` items
//!
//! `total_pages` is `ceil(matches / per_page)`. A page past the end yields no
//! items but still reports the total.

use crate::domain::error::{PhotoSearchError, Result};
use crate::domain::{Photo, ResultPage, SearchQuery};
use crate::ports::SearchPort;
use async_trait::async_trait;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::path::Path;

/// Subjects used by [`CatalogSearch::sample`].
const SAMPLE_SUBJECTS: [&str; 5] = ["Kittens", "Dogs", "Mountains", "Beach", "City lights"];

/// Photos generated per subject by [`CatalogSearch::sample`].
const SAMPLE_PER_SUBJECT: usize = 45;

/// Search port serving pages from photos held in memory.
pub struct CatalogSearch {
    photos: Vec<Photo>,
    matcher: SkimMatcherV2,
}

impl std::fmt::Debug for CatalogSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogSearch")
            .field("photos", &self.photos.len())
            .finish_non_exhaustive()
    }
}

impl CatalogSearch {
    #[must_use]
    pub fn new(photos: Vec<Photo>) -> Self {
        Self {
            photos,
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Builds a catalog with a few subjects, 45 photos each.
    ///
    /// # Examples
    ///
    /// ```
    /// use photosearch::ports::CatalogSearch;
    ///
    /// let catalog = CatalogSearch::sample();
    /// assert_eq!(catalog.len(), 225);
    /// ```
    #[must_use]
    pub fn sample() -> Self {
        let photos = SAMPLE_SUBJECTS
            .iter()
            .enumerate()
            .flat_map(|(subject_idx, subject)| {
                (1..=SAMPLE_PER_SUBJECT).map(move |n| {
                    let id = format!("{}{:04}", subject_idx + 1, n);
                    let secret = format!("{:08x}", (subject_idx * 1000 + n) * 7919);
                    let farm = u32::try_from(subject_idx % 9 + 1).unwrap_or(1);
                    Photo::new(id, secret, "65535", farm, format!("{subject} #{n}"))
                })
            })
            .collect();
        Self::new(photos)
    }

    /// Loads a catalog from a JSON array of photos.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON array of
    /// photo records.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading photo catalog");

        let contents = std::fs::read_to_string(path)?;
        let photos: Vec<Photo> = serde_json::from_str(&contents)
            .map_err(|e| PhotoSearchError::Config(format!("failed to parse catalog: {e}")))?;

        tracing::debug!(photo_count = photos.len(), "photo catalog loaded");
        Ok(Self::new(photos))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    fn matching(&self, term: &str) -> Vec<&Photo> {
        let tokens: Vec<String> = term.split_whitespace().map(str::to_lowercase).collect();

        self.photos
            .iter()
            .filter(|photo| {
                let title = photo.title.to_lowercase();
                tokens
                    .iter()
                    .all(|token| self.matcher.fuzzy_match(&title, token).is_some())
            })
            .collect()
    }

    fn page(&self, query: &SearchQuery) -> Result<ResultPage> {
        let _span = tracing::debug_span!("catalog_search",
            term = %query.term,
            page = query.page,
            per_page = query.per_page
        )
        .entered();

        if query.page == 0 || query.per_page == 0 {
            return Err(PhotoSearchError::Transport(format!(
                "invalid page request: page={} per_page={}",
                query.page, query.per_page
            )));
        }

        let matches = self.matching(query.term.as_str());
        let per_page = query.per_page as usize;
        let total_pages = u32::try_from(matches.len().div_ceil(per_page)).unwrap_or(u32::MAX);

        let start = (query.page as usize - 1).saturating_mul(per_page);
        let items: Vec<Photo> = matches
            .into_iter()
            .skip(start)
            .take(per_page)
            .cloned()
            .collect();

        tracing::debug!(item_count = items.len(), total_pages = total_pages, "catalog page served");

        Ok(ResultPage {
            page: query.page,
            total_pages,
            items,
        })
    }
}

#[async_trait]
impl SearchPort for CatalogSearch {
    async fn search(&self, query: &SearchQuery) -> Result<ResultPage> {
        self.page(query)
    }
}
