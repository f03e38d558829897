use serde::Deserialize;

// ============================================================================
// TMDB API Types
// ============================================================================

/// TMDB `/search/movie` response
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSearchResponse {
    #[serde(default)]
    pub results: Vec<TmdbMovie>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl TmdbSearchResponse {
    /// Poster path of the first result, if that result has one
    pub fn first_poster_path(&self) -> Option<&str> {
        self.results
            .first()
            .and_then(|movie| movie.poster_path.as_deref())
            .filter(|path| !path.is_empty())
    }
}
