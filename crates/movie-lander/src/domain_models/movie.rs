use serde::{Deserialize, Serialize};

/// A movie record as found in the bundled OMDb-style dataset.
///
/// Every field defaults to empty so malformed entries still load; a missing
/// `imdbID` shows up later as a duplicate key warning, never as a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Poster", default, skip_serializing_if = "String::is_empty")]
    pub poster: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
}

impl Movie {
    pub fn new(imdb_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            imdb_id: imdb_id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Builder-style year setter
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    /// Key used to identify the movie in rendered lists
    pub fn key(&self) -> &str {
        &self.imdb_id
    }

    /// "Title (Year)", or just the title when the year is unknown
    pub fn display_title(&self) -> String {
        if self.year.is_empty() {
            self.title.clone()
        } else {
            format!("{} ({})", self.title, self.year)
        }
    }

    /// Case-insensitive title match used by the navbar search
    pub fn title_matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}
