use serde::{Deserialize, Serialize};

/// Base URL for TMDB poster images (w500 rendition).
pub const TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// A single movie as returned by the catalog.
///
/// Equality is structural over all fields, not by `id` alone. Collection
/// membership checks rely on this: two records that differ in any field are
/// distinct members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    // TMDB sends null, not absence, for movies without a poster
    #[serde(default, deserialize_with = "null_as_empty")]
    pub poster_path: String,
    /// ISO-like `YYYY-MM-DD`, or empty when the catalog has no date.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub release_date: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

impl Movie {
    /// Full URL of the poster image.
    pub fn poster_url(&self) -> String {
        format!("{}{}", TMDB_IMAGE_BASE_URL, self.poster_path)
    }

    /// Release year parsed from the leading `YYYY` segment of the release
    /// date, or 0 when the date is empty or unparseable.
    pub fn release_year(&self) -> i32 {
        self.release_date
            .split('-')
            .next()
            .and_then(|y| y.parse().ok())
            .unwrap_or(0)
    }
}
