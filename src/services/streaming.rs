use crate::{
    cache::{Cache, CacheKey},
    cached,
    error::{AppError, AppResult},
    models::{WatchmodeTitle, WatchmodeTitleDetails},
    services::{
        platforms::{platform_badges, streaming_platforms, ProviderBadge},
        providers::StreamingProvider,
    },
};
use serde::Serialize;
use std::sync::Arc;

/// What the modal's streaming panel shows for one title
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StreamingInfo {
    /// No Watchmode credential is configured
    Unconfigured,
    /// Watchmode has no title by this name
    NotListed,
    /// Listed, but with no sources at all
    Unavailable,
    /// Only rent or buy offers
    RentOrBuyOnly,
    Platforms { badges: Vec<ProviderBadge> },
    Failed { error: String },
}

impl StreamingInfo {
    /// Renders a detail payload into badges or an availability notice
    pub fn from_details(details: &WatchmodeTitleDetails) -> Self {
        let sources = match details.sources.as_deref() {
            Some(sources) if !sources.is_empty() => sources,
            _ => return StreamingInfo::Unavailable,
        };

        let platforms = streaming_platforms(sources);
        if platforms.is_empty() {
            return StreamingInfo::RentOrBuyOnly;
        }

        StreamingInfo::Platforms {
            badges: platform_badges(&platforms),
        }
    }

    /// Notice text for the non-badge states
    pub fn message(&self) -> Option<String> {
        match self {
            StreamingInfo::Unconfigured => {
                Some("Configure Watchmode API key to see streaming availability".to_string())
            }
            StreamingInfo::NotListed => Some("Streaming info not available".to_string()),
            StreamingInfo::Unavailable => {
                Some("Not currently available on major streaming platforms".to_string())
            }
            StreamingInfo::RentOrBuyOnly => Some("Available for rent/purchase".to_string()),
            StreamingInfo::Platforms { .. } => None,
            StreamingInfo::Failed { error } => {
                Some(format!("Unable to load streaming info ({})", error))
            }
        }
    }
}

/// Picks the search result a title lookup refers to
///
/// Without a year the first result wins. With a year, the first result released
/// that year wins, falling back to the first result.
pub fn select_match(results: &[WatchmodeTitle], year: Option<i32>) -> Option<&WatchmodeTitle> {
    year.and_then(|year| results.iter().find(|result| result.year == Some(year)))
        .or_else(|| results.first())
}

/// Resolves streaming availability for a title through the session cache
#[derive(Clone)]
pub struct StreamingResolver {
    provider: Option<Arc<dyn StreamingProvider>>,
    cache: Cache<WatchmodeTitleDetails>,
}

impl StreamingResolver {
    pub fn new(provider: Option<Arc<dyn StreamingProvider>>) -> Self {
        Self {
            provider,
            cache: Cache::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn fetch_streaming_info(&self, title: &str, year: Option<i32>) -> StreamingInfo {
        let key = CacheKey::streaming(title, year);

        // Cached payloads render without a credential too
        if let Some(details) = self.cache.get_from_cache(&key).await {
            return StreamingInfo::from_details(&details);
        }

        let Some(provider) = self.provider.as_ref() else {
            tracing::debug!(title = %title, "Watchmode key not configured");
            return StreamingInfo::Unconfigured;
        };

        let lookup: AppResult<WatchmodeTitleDetails> = cached!(
            self.cache,
            key,
            Self::lookup_details(provider.as_ref(), title, year)
        );

        match lookup {
            Ok(details) => StreamingInfo::from_details(&details),
            Err(AppError::NotFound(_) | AppError::InvalidInput(_)) => StreamingInfo::NotListed,
            Err(e) => {
                tracing::error!(
                    title = %title,
                    year = ?year,
                    provider = provider.name(),
                    error = %e,
                    "Error fetching streaming info"
                );
                StreamingInfo::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    /// Search then detail fetch; an empty search is `NotFound` so it stays uncached
    async fn lookup_details(
        provider: &dyn StreamingProvider,
        title: &str,
        year: Option<i32>,
    ) -> AppResult<WatchmodeTitleDetails> {
        let results = provider.search_titles(title).await?;
        let chosen = select_match(&results, year)
            .ok_or_else(|| AppError::NotFound(format!("No streaming listing for {}", title)))?;

        tracing::debug!(
            title = %title,
            watchmode_id = chosen.id,
            candidates = results.len(),
            "Selected streaming match"
        );

        provider.fetch_details(chosen.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SourceType, WatchmodeSource};
    use crate::services::platforms::MAX_PLATFORM_BADGES;
    use crate::services::providers::MockStreamingProvider;
    use mockall::predicate::eq;

    fn title(id: u64, year: Option<i32>) -> WatchmodeTitle {
        WatchmodeTitle {
            id,
            name: "Match".to_string(),
            title_type: Some("movie".to_string()),
            year,
            imdb_id: None,
        }
    }

    fn source(name: &str, source_type: SourceType) -> WatchmodeSource {
        WatchmodeSource {
            source_id: None,
            name: name.to_string(),
            source_type,
            region: Some("US".to_string()),
            web_url: None,
            format: None,
        }
    }

    fn details(sources: Vec<WatchmodeSource>) -> WatchmodeTitleDetails {
        WatchmodeTitleDetails {
            id: Some(1),
            title: Some("Match".to_string()),
            sources: Some(sources),
        }
    }

    fn badge_names(info: &StreamingInfo) -> Vec<String> {
        match info {
            StreamingInfo::Platforms { badges } => badges.iter().map(|b| b.name.clone()).collect(),
            other => panic!("expected platforms, got {:?}", other),
        }
    }

    #[test]
    fn test_select_match_by_year() {
        let results = vec![title(1, Some(2010)), title(2, Some(2005))];

        assert_eq!(select_match(&results, Some(2005)).map(|t| t.id), Some(2));
        assert_eq!(select_match(&results, Some(2010)).map(|t| t.id), Some(1));
        assert_eq!(select_match(&results, None).map(|t| t.id), Some(1));
    }

    #[test]
    fn test_select_match_falls_back_to_first() {
        let results = vec![title(1, Some(2010)), title(2, None)];
        assert_eq!(select_match(&results, Some(1984)).map(|t| t.id), Some(1));
        assert!(select_match(&[], Some(1984)).is_none());
    }

    #[test]
    fn test_from_details_dedups_normalized_names() {
        let info = StreamingInfo::from_details(&details(vec![
            source("Disney+", SourceType::Sub),
            source("Hotstar", SourceType::Sub),
            source("Netflix", SourceType::Sub),
        ]));

        assert_eq!(badge_names(&info), vec!["Disney+", "Netflix"]);
    }

    #[test]
    fn test_from_details_rent_only() {
        let info = StreamingInfo::from_details(&details(vec![
            source("Vudu", SourceType::Rent),
            source("iTunes", SourceType::Rent),
        ]));

        assert_eq!(info, StreamingInfo::RentOrBuyOnly);
        assert_eq!(info.message().as_deref(), Some("Available for rent/purchase"));
    }

    #[test]
    fn test_from_details_without_sources() {
        assert_eq!(
            StreamingInfo::from_details(&WatchmodeTitleDetails::default()),
            StreamingInfo::Unavailable
        );
        assert_eq!(
            StreamingInfo::from_details(&details(vec![])),
            StreamingInfo::Unavailable
        );
    }

    #[test]
    fn test_from_details_caps_badges() {
        let sources = (0..10)
            .map(|i| source(&format!("Service {}", i), SourceType::Free))
            .collect();
        let info = StreamingInfo::from_details(&details(sources));

        assert_eq!(badge_names(&info).len(), MAX_PLATFORM_BADGES);
    }

    #[test]
    fn test_failed_message() {
        let info = StreamingInfo::Failed {
            error: "connection refused".to_string(),
        };
        assert_eq!(
            info.message().as_deref(),
            Some("Unable to load streaming info (connection refused)")
        );
    }

    #[test]
    fn test_streaming_info_serializes_with_status_tag() {
        let json = serde_json::to_value(StreamingInfo::RentOrBuyOnly).unwrap();
        assert_eq!(json, serde_json::json!({"status": "rent_or_buy_only"}));
    }

    #[tokio::test]
    async fn test_unconfigured_makes_no_calls() {
        let resolver = StreamingResolver::new(None);
        let info = resolver.fetch_streaming_info("Inception", Some(2010)).await;
        assert_eq!(info, StreamingInfo::Unconfigured);
    }

    #[tokio::test]
    async fn test_cache_hit_skips_provider() {
        let mut provider = MockStreamingProvider::new();
        provider
            .expect_search_titles()
            .with(eq("Inception"))
            .times(1)
            .returning(|_| Ok(vec![title(3173903, Some(2010))]));
        provider
            .expect_fetch_details()
            .with(eq(3173903))
            .times(1)
            .returning(|_| Ok(details(vec![source("Netflix", SourceType::Sub)])));
        provider.expect_name().return_const("mock");

        let resolver = StreamingResolver::new(Some(Arc::new(provider)));

        let first = resolver.fetch_streaming_info("Inception", Some(2010)).await;
        let second = resolver.fetch_streaming_info("Inception", Some(2010)).await;

        assert_eq!(first, second);
        assert_eq!(badge_names(&first), vec!["Netflix"]);
    }

    #[tokio::test]
    async fn test_empty_search_is_not_listed_and_not_cached() {
        let mut provider = MockStreamingProvider::new();
        provider
            .expect_search_titles()
            .times(2)
            .returning(|_| Ok(vec![]));
        provider.expect_fetch_details().never();
        provider.expect_name().return_const("mock");

        let resolver = StreamingResolver::new(Some(Arc::new(provider)));

        for _ in 0..2 {
            let info = resolver.fetch_streaming_info("Nothing", None).await;
            assert_eq!(info, StreamingInfo::NotListed);
        }
    }

    #[tokio::test]
    async fn test_blank_title_is_not_listed() {
        let mut provider = MockStreamingProvider::new();
        provider
            .expect_search_titles()
            .with(eq("  "))
            .times(1)
            .returning(|_| Err(AppError::InvalidInput("Search title cannot be empty".to_string())));
        provider.expect_fetch_details().never();
        provider.expect_name().return_const("mock");

        let resolver = StreamingResolver::new(Some(Arc::new(provider)));
        let info = resolver.fetch_streaming_info("  ", None).await;

        assert_eq!(info, StreamingInfo::NotListed);
        assert_eq!(info.message().as_deref(), Some("Streaming info not available"));
    }

    #[tokio::test]
    async fn test_failure_is_reported_and_not_cached() {
        let mut provider = MockStreamingProvider::new();
        provider
            .expect_search_titles()
            .times(2)
            .returning(|_| Err(AppError::ExternalApi("status 500".to_string())));
        provider.expect_name().return_const("mock");

        let resolver = StreamingResolver::new(Some(Arc::new(provider)));

        for _ in 0..2 {
            let info = resolver.fetch_streaming_info("Heat", Some(1995)).await;
            assert!(matches!(info, StreamingInfo::Failed { ref error } if error.contains("status 500")));
        }
    }

    #[tokio::test]
    async fn test_detail_lookup_uses_year_match() {
        let mut provider = MockStreamingProvider::new();
        provider
            .expect_search_titles()
            .returning(|_| Ok(vec![title(1, Some(2010)), title(2, Some(2005))]));
        provider
            .expect_fetch_details()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(details(vec![source("Amazon Prime", SourceType::Sub)])));
        provider.expect_name().return_const("mock");

        let resolver = StreamingResolver::new(Some(Arc::new(provider)));
        let info = resolver.fetch_streaming_info("Match", Some(2005)).await;

        assert_eq!(badge_names(&info), vec!["Prime Video"]);
    }
}
