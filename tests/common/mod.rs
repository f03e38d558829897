#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use cinematch::{
    error::{AppError, AppResult},
    models::{
        GenreBrowseResponse, GenresResponse, ModelType, Movie, MovieSuggestion, RecommendResponse,
        SearchResponse, SortBy, SourceType, StatsResponse, WatchmodeSource, WatchmodeTitle,
        WatchmodeTitleDetails,
    },
    services::{
        providers::{PosterProvider, StreamingProvider},
        PosterResolver, RecommendationBackend, StreamingResolver,
    },
    ui::Controller,
};

pub fn movie(title: &str, year: i32) -> Movie {
    serde_json::from_value(serde_json::json!({
        "title": title,
        "year": year,
        "rating": 8.1,
        "genres": ["Action", "Sci-Fi"],
        "overview": format!("{} overview", title),
        "hybrid_score": 0.87,
    }))
    .unwrap()
}

/// Backend that knows one movie and one genre and counts every call
#[derive(Default)]
pub struct FakeBackend {
    pub search_calls: AtomicUsize,
    pub recommend_calls: AtomicUsize,
    pub browse_calls: AtomicUsize,
}

impl FakeBackend {
    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl RecommendationBackend for FakeBackend {
    async fn search_movies(&self, query: &str, limit: usize) -> AppResult<SearchResponse> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        let movies = ["Inception", "Interstellar", "Insomnia"]
            .iter()
            .filter(|title| title.to_lowercase().starts_with(&query.to_lowercase()))
            .take(limit)
            .map(|title| MovieSuggestion {
                title: title.to_string(),
            })
            .collect();
        Ok(SearchResponse { movies })
    }

    async fn recommend(
        &self,
        title: &str,
        _model: ModelType,
        count: usize,
    ) -> AppResult<RecommendResponse> {
        self.recommend_calls.fetch_add(1, Ordering::SeqCst);
        if title != "Inception" {
            return Err(AppError::NotFound("Movie not found".to_string()));
        }
        Ok(RecommendResponse {
            query_movie: "Inception".to_string(),
            recommendations: [
                ("Interstellar", 2014),
                ("The Prestige", 2006),
                ("Tenet", 2020),
            ]
            .iter()
            .take(count)
            .map(|(title, year)| movie(title, *year))
            .collect(),
        })
    }

    async fn browse_genre(
        &self,
        genre: &str,
        _count: usize,
        sort_by: SortBy,
    ) -> AppResult<GenreBrowseResponse> {
        self.browse_calls.fetch_add(1, Ordering::SeqCst);
        if genre != "Sci-Fi" {
            return Err(AppError::NotFound("Genre not found".to_string()));
        }
        Ok(GenreBrowseResponse {
            genre: genre.to_string(),
            sort_by: sort_by.as_str().to_string(),
            total_found: 2,
            recommendations: vec![movie("Alien", 1979), movie("Arrival", 2016)],
        })
    }

    async fn genres(&self) -> AppResult<GenresResponse> {
        Ok(GenresResponse {
            genres: vec![
                "Action".to_string(),
                "Documentary".to_string(),
                "Sci-Fi".to_string(),
            ],
        })
    }

    async fn stats(&self) -> AppResult<StatsResponse> {
        Ok(StatsResponse {
            total_movies: 4803,
            available_genres: 20,
        })
    }
}

/// Poster source that counts lookups per title
#[derive(Default)]
pub struct FakePosters {
    pub calls: AtomicUsize,
}

#[async_trait::async_trait]
impl PosterProvider for FakePosters {
    async fn search_poster(&self, title: &str, _year: Option<i32>) -> AppResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Some(format!(
            "https://image.tmdb.org/t/p/w500/{}.jpg",
            title.to_lowercase().replace(' ', "_")
        )))
    }

    fn name(&self) -> &'static str {
        "fake_tmdb"
    }
}

/// Streaming source listing every title on Netflix and Disney+ Hotstar
#[derive(Default)]
pub struct FakeStreaming {
    pub search_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
}

#[async_trait::async_trait]
impl StreamingProvider for FakeStreaming {
    async fn search_titles(&self, title: &str) -> AppResult<Vec<WatchmodeTitle>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![WatchmodeTitle {
            id: 100,
            name: title.to_string(),
            title_type: Some("movie".to_string()),
            year: None,
            imdb_id: None,
        }])
    }

    async fn fetch_details(&self, id: u64) -> AppResult<WatchmodeTitleDetails> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let source = |name: &str| WatchmodeSource {
            source_id: None,
            name: name.to_string(),
            source_type: SourceType::Sub,
            region: Some("US".to_string()),
            web_url: None,
            format: None,
        };
        Ok(WatchmodeTitleDetails {
            id: Some(id),
            title: None,
            sources: Some(vec![source("Netflix"), source("Disney+ Hotstar")]),
        })
    }

    fn name(&self) -> &'static str {
        "fake_watchmode"
    }
}

pub struct Fixture {
    pub controller: Controller,
    pub backend: Arc<FakeBackend>,
    pub posters: Arc<FakePosters>,
    pub streaming: Arc<FakeStreaming>,
}

pub fn fixture() -> Fixture {
    let backend = Arc::new(FakeBackend::default());
    let posters = Arc::new(FakePosters::default());
    let streaming = Arc::new(FakeStreaming::default());

    let controller = Controller::new(
        backend.clone(),
        PosterResolver::new(Some(posters.clone())),
        StreamingResolver::new(Some(streaming.clone())),
        Duration::from_millis(300),
    );

    Fixture {
        controller,
        backend,
        posters,
        streaming,
    }
}
