/// Third-party metadata providers
///
/// Posters and streaming availability come from separate services. Each provider
/// trait covers exactly the calls the resolvers make, so resolvers can be tested
/// against mocks and the HTTP implementations can be swapped independently.
use crate::{
    error::AppResult,
    models::{WatchmodeTitle, WatchmodeTitleDetails},
};

pub mod tmdb;
pub mod watchmode;

pub use tmdb::TmdbProvider;
pub use watchmode::WatchmodeProvider;

/// Trait for poster image providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PosterProvider: Send + Sync {
    /// Searches for a movie and returns the first result's full poster URL, if any
    async fn search_poster(&self, title: &str, year: Option<i32>) -> AppResult<Option<String>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Trait for streaming availability providers
///
/// Availability takes two calls: a title search that yields provider IDs, then a
/// detail fetch for one chosen ID that carries the sources.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait StreamingProvider: Send + Sync {
    /// Search for titles by name
    async fn search_titles(&self, title: &str) -> AppResult<Vec<WatchmodeTitle>>;

    /// Fetch title details including availability sources
    async fn fetch_details(&self, id: u64) -> AppResult<WatchmodeTitleDetails>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
