use crate::{
    cache::{Cache, CacheKey},
    cached,
    error::AppResult,
    services::providers::PosterProvider,
};
use std::sync::Arc;

/// Resolves card poster URLs through the session cache
///
/// A confirmed "no poster" is cached like a URL; failed lookups are not.
#[derive(Clone)]
pub struct PosterResolver {
    provider: Option<Arc<dyn PosterProvider>>,
    cache: Cache<Option<String>>,
}

impl PosterResolver {
    pub fn new(provider: Option<Arc<dyn PosterProvider>>) -> Self {
        Self {
            provider,
            cache: Cache::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn fetch_poster_url(&self, title: &str, year: Option<i32>) -> Option<String> {
        let key = CacheKey::poster(title, year);

        if let Some(poster) = self.cache.get_from_cache(&key).await {
            return poster;
        }

        let provider = self.provider.as_ref()?;

        let lookup: AppResult<Option<String>> =
            cached!(self.cache, key, provider.search_poster(title, year));

        match lookup {
            Ok(poster) => poster,
            Err(e) => {
                tracing::warn!(
                    title = %title,
                    year = ?year,
                    provider = provider.name(),
                    error = %e,
                    "Error fetching poster"
                );
                None
            }
        }
    }
}
