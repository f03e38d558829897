use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

pub mod poster;
pub mod streaming;

pub use poster::{TmdbMovie, TmdbSearchResponse};
pub use streaming::{
    SourceType, WatchmodeSearchResponse, WatchmodeSource, WatchmodeTitle, WatchmodeTitleDetails,
};

// ============================================================================
// Recommendation Backend Types
// ============================================================================

/// Recommender used by the backend `/recommend` endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    #[default]
    Hybrid,
    ContentBased,
}

impl ModelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Hybrid => "hybrid",
            ModelType::ContentBased => "content_based",
        }
    }
}

impl Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering accepted by `/browse/genre/{genre}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Rating,
    Popularity,
    Recent,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Rating => "rating",
            SortBy::Popularity => "popularity",
            SortBy::Recent => "recent",
        }
    }
}

/// A genre as the backend sends it: either a bare name or a `{name}` record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenreEntry {
    Name(String),
    Record { name: String },
    Other(serde_json::Value),
}

impl GenreEntry {
    pub fn name(&self) -> Option<&str> {
        match self {
            GenreEntry::Name(name) | GenreEntry::Record { name } if !name.is_empty() => {
                Some(name.as_str())
            }
            _ => None,
        }
    }
}

/// Reads the leading integer of a year string, ignoring any trailing text
///
/// `"2010"`, `" 2010"` and `"2010-07-16"` all give `Some(2010)`; a string with no
/// leading digits gives `None`.
pub fn parse_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i32>().ok().map(|year| sign * year)
}

/// Backend years arrive as numbers, numeric strings or null
fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Number(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<RawYear>::deserialize(deserializer)? {
        Some(RawYear::Number(year)) => i32::try_from(year).ok(),
        Some(RawYear::Float(year)) => Some(year.trunc() as i32),
        Some(RawYear::Text(text)) => parse_year(&text),
        None => None,
    })
}

/// A movie returned by the recommendation backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_year")]
    pub year: Option<i32>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub genres: Vec<GenreEntry>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub hybrid_score: Option<f64>,
    #[serde(default)]
    pub similarity_score: Option<f64>,
}

impl Movie {
    /// Genre names, skipping entries that carry no usable name
    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().filter_map(GenreEntry::name).collect()
    }

    /// Hybrid score when the backend sent a non-zero one, else the similarity score, else 0
    pub fn match_score(&self) -> f64 {
        self.hybrid_score
            .filter(|score| *score != 0.0)
            .or(self.similarity_score)
            .unwrap_or(0.0)
    }
}

/// `GET /search` response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub movies: Vec<MovieSuggestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieSuggestion {
    pub title: String,
}

/// `GET /recommend` response
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendResponse {
    pub query_movie: String,
    #[serde(default)]
    pub recommendations: Vec<Movie>,
}

/// `GET /browse/genre/{genre}` response
#[derive(Debug, Clone, Deserialize)]
pub struct GenreBrowseResponse {
    pub genre: String,
    pub sort_by: String,
    #[serde(default)]
    pub total_found: u64,
    #[serde(default)]
    pub recommendations: Vec<Movie>,
}

/// `GET /genres` response
#[derive(Debug, Clone, Deserialize)]
pub struct GenresResponse {
    #[serde(default)]
    pub genres: Vec<String>,
}

/// `GET /stats` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_movies: u64,
    pub available_genres: u64,
}
