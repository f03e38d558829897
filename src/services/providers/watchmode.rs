/// Watchmode API provider
///
/// Provides both title search and streaming source data.
///
/// API Flow:
/// 1. Title Search: /v1/search/?search_field=name → returns Watchmode IDs with years
/// 2. Availability: /v1/title/{watchmode_id}/details/?append_to_response=sources
use crate::{
    error::{AppError, AppResult},
    models::{WatchmodeSearchResponse, WatchmodeTitle, WatchmodeTitleDetails},
    services::providers::StreamingProvider,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct WatchmodeProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl WatchmodeProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl StreamingProvider for WatchmodeProvider {
    async fn search_titles(&self, title: &str) -> AppResult<Vec<WatchmodeTitle>> {
        if title.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search title cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/v1/search/", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("search_field", "name"),
                ("search_value", title),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Watchmode API returned status {}: {}",
                status, body
            )));
        }

        let search_response: WatchmodeSearchResponse = response.json().await?;

        tracing::info!(
            title = %title,
            results = search_response.title_results.len(),
            provider = "watchmode",
            "Title search completed"
        );

        Ok(search_response.title_results)
    }

    async fn fetch_details(&self, id: u64) -> AppResult<WatchmodeTitleDetails> {
        let url = format!("{}/v1/title/{}/details/", self.api_url, id);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("append_to_response", "sources"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Watchmode API returned status {}: {}",
                status, body
            )));
        }

        // Get response text for debugging
        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw Watchmode API response");

        let details: WatchmodeTitleDetails =
            serde_json::from_str(&response_text).map_err(|e| {
                tracing::error!(
                    error = %e,
                    response = %response_text,
                    "Failed to deserialize Watchmode response"
                );
                AppError::Parse(e)
            })?;

        tracing::info!(
            watchmode_id = id,
            sources = details.sources.as_ref().map_or(0, Vec::len),
            provider = "watchmode",
            "Title details fetched"
        );

        Ok(details)
    }

    fn name(&self) -> &'static str {
        "watchmode"
    }
}
