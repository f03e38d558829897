/// TMDB poster provider
///
/// Uses the movie search endpoint only; the first result's `poster_path` is
/// joined onto the configured image base.
use crate::{
    error::{AppError, AppResult},
    models::TmdbSearchResponse,
    services::providers::PosterProvider,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    search_url: String,
    image_base: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, search_url: String, image_base: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            search_url,
            image_base: image_base.trim_end_matches('/').to_string(),
        }
    }

    fn poster_url(&self, poster_path: &str) -> String {
        if poster_path.starts_with('/') {
            format!("{}{}", self.image_base, poster_path)
        } else {
            format!("{}/{}", self.image_base, poster_path)
        }
    }
}

#[async_trait::async_trait]
impl PosterProvider for TmdbProvider {
    async fn search_poster(&self, title: &str, year: Option<i32>) -> AppResult<Option<String>> {
        let mut params = vec![
            ("api_key", self.api_key.clone()),
            ("query", title.to_string()),
        ];

        if let Some(y) = year {
            params.push(("year", y.to_string()));
        }

        let response = self
            .http_client
            .get(&self.search_url)
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let text = response.text().await?;
        let search: TmdbSearchResponse = serde_json::from_str(&text)?;
        let poster = search.first_poster_path().map(|path| self.poster_url(path));

        tracing::debug!(
            title = %title,
            year = ?year,
            results = search.results.len(),
            found = poster.is_some(),
            provider = "tmdb",
            "Poster search completed"
        );

        Ok(poster)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
