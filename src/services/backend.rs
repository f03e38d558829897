/// Recommendation backend client
///
/// Thin typed wrapper over the recommender REST API. Payloads are validated
/// against the structs in `models`; any shape mismatch surfaces as a parse error.
use crate::{
    error::{AppError, AppResult},
    models::{
        GenreBrowseResponse, GenresResponse, ModelType, RecommendResponse, SearchResponse, SortBy,
        StatsResponse,
    },
};
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;

/// Operations the client needs from the recommendation backend
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationBackend: Send + Sync {
    /// Title suggestions for a partial query
    async fn search_movies(&self, query: &str, limit: usize) -> AppResult<SearchResponse>;

    /// Recommendations for a literal title; a non-2xx status means the title is unknown
    async fn recommend(
        &self,
        title: &str,
        model: ModelType,
        count: usize,
    ) -> AppResult<RecommendResponse>;

    /// Top movies of a genre; a non-2xx status means the genre is unknown
    async fn browse_genre(
        &self,
        genre: &str,
        count: usize,
        sort_by: SortBy,
    ) -> AppResult<GenreBrowseResponse>;

    async fn genres(&self) -> AppResult<GenresResponse>;

    async fn stats(&self) -> AppResult<StatsResponse>;
}

#[derive(Clone)]
pub struct HttpBackend {
    http_client: HttpClient,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Backend returned status {}: {}",
                status, body
            )));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Like `decode`, but any non-2xx status becomes `NotFound(message)`
    async fn decode_or_not_found<T: DeserializeOwned>(
        response: Response,
        message: &str,
    ) -> AppResult<T> {
        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "Backend lookup rejected");
            return Err(AppError::NotFound(message.to_string()));
        }
        Self::decode(response).await
    }
}

#[async_trait::async_trait]
impl RecommendationBackend for HttpBackend {
    async fn search_movies(&self, query: &str, limit: usize) -> AppResult<SearchResponse> {
        let url = format!("{}/search", self.base_url);
        let limit = limit.to_string();
        let response = self
            .http_client
            .get(&url)
            .query(&[("query", query), ("limit", limit.as_str())])
            .send()
            .await?;

        let results: SearchResponse = Self::decode(response).await?;

        tracing::debug!(
            query = %query,
            results = results.movies.len(),
            "Suggestion search completed"
        );

        Ok(results)
    }

    async fn recommend(
        &self,
        title: &str,
        model: ModelType,
        count: usize,
    ) -> AppResult<RecommendResponse> {
        let url = format!("{}/recommend", self.base_url);
        let count = count.to_string();
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("movie_title", title),
                ("model_type", model.as_str()),
                ("n_recommendations", count.as_str()),
            ])
            .send()
            .await?;

        let recommendations: RecommendResponse =
            Self::decode_or_not_found(response, "Movie not found").await?;

        tracing::info!(
            title = %title,
            model = %model,
            results = recommendations.recommendations.len(),
            "Recommendations fetched"
        );

        Ok(recommendations)
    }

    async fn browse_genre(
        &self,
        genre: &str,
        count: usize,
        sort_by: SortBy,
    ) -> AppResult<GenreBrowseResponse> {
        let url = format!(
            "{}/browse/genre/{}",
            self.base_url,
            urlencoding::encode(genre)
        );
        let count = count.to_string();
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("n_recommendations", count.as_str()),
                ("sort_by", sort_by.as_str()),
            ])
            .send()
            .await?;

        let browse: GenreBrowseResponse =
            Self::decode_or_not_found(response, "Genre not found").await?;

        tracing::info!(
            genre = %genre,
            results = browse.recommendations.len(),
            total_found = browse.total_found,
            "Genre browse fetched"
        );

        Ok(browse)
    }

    async fn genres(&self) -> AppResult<GenresResponse> {
        let url = format!("{}/genres", self.base_url);
        let response = self.http_client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn stats(&self) -> AppResult<StatsResponse> {
        let url = format!("{}/stats", self.base_url);
        let response = self.http_client.get(&url).send().await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_recommend_sends_expected_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recommend"))
            .and(query_param("movie_title", "Inception"))
            .and(query_param("model_type", "hybrid"))
            .and(query_param("n_recommendations", "12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "query_movie": "Inception",
                "recommendations": [{"title": "Interstellar", "year": 2014, "rating": 8.6}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let backend = HttpBackend::new(server.uri());
        let response = backend
            .recommend("Inception", ModelType::Hybrid, 12)
            .await
            .unwrap();

        assert_eq!(response.query_movie, "Inception");
        assert_eq!(response.recommendations[0].title, "Interstellar");
    }

    #[tokio::test]
    async fn test_recommend_non_success_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recommend"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(server.uri());
        let err = backend
            .recommend("Nope", ModelType::Hybrid, 12)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Movie not found"));
    }

    #[tokio::test]
    async fn test_browse_genre_encodes_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/browse/genre/Film%20Noir"))
            .and(query_param("n_recommendations", "20"))
            .and(query_param("sort_by", "rating"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "genre": "Film Noir",
                "sort_by": "rating",
                "total_found": 31,
                "recommendations": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let backend = HttpBackend::new(server.uri());
        let response = backend
            .browse_genre("Film Noir", 20, SortBy::Rating)
            .await
            .unwrap();

        assert_eq!(response.total_found, 31);
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_movies": "many"
            })))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(server.uri());
        let err = backend.stats().await.unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[tokio::test]
    async fn test_search_failure_is_external_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(500).set_body_string("down"))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(server.uri());
        let err = backend.search_movies("inc", 5).await.unwrap_err();
        assert!(matches!(err, AppError::ExternalApi(_)));
    }
}
