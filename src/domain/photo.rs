//! Photo domain model.
//!
//! A [`Photo`] is the result item produced by the search backend. The field set
//! mirrors the Flickr photo record so catalogs exported from the public API can be
//! loaded as-is.

use serde::{Deserialize, Serialize};

/// A single photo returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub owner: String,
    pub secret: String,
    pub server: String,
    pub farm: u32,
    pub title: String,
    #[serde(rename = "ispublic", default)]
    pub is_public: u8,
    #[serde(rename = "isfriend", default)]
    pub is_friend: u8,
    #[serde(rename = "isfamily", default)]
    pub is_family: u8,
}

impl Photo {
    /// Creates a public photo with the given identity and title.
    ///
    /// # Examples
    ///
    /// ```
    /// use photosearch::domain::Photo;
    ///
    /// let photo = Photo::new("12345", "qwrw", "65535", 66, "Kittens");
    /// assert_eq!(photo.is_public, 1);
    /// ```
    pub fn new(
        id: impl Into<String>,
        secret: impl Into<String>,
        server: impl Into<String>,
        farm: u32,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            owner: String::new(),
            secret: secret.into(),
            server: server.into(),
            farm,
            title: title.into(),
            is_public: 1,
            is_friend: 0,
            is_family: 0,
        }
    }

    /// Returns the static image URL for this photo.
    ///
    /// # Examples
    ///
    /// ```
    /// use photosearch::domain::Photo;
    ///
    /// let photo = Photo::new("12345", "qwrw", "wrwrw", 44, "Test");
    /// assert_eq!(
    ///     photo.image_url(),
    ///     "https://farm44.static.flickr.com/wrwrw/12345_qwrw.jpg"
    /// );
    /// ```
    #[must_use]
    pub fn image_url(&self) -> String {
        format!(
            "https://farm{}.static.flickr.com/{}/{}_{}.jpg",
            self.farm, self.server, self.id, self.secret
        )
    }
}
