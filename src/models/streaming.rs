use serde::{Deserialize, Serialize};

// ============================================================================
// Watchmode API Types
// ============================================================================

/// Watchmode `/v1/search/` response
#[derive(Debug, Clone, Deserialize)]
pub struct WatchmodeSearchResponse {
    #[serde(default)]
    pub title_results: Vec<WatchmodeTitle>,
}

/// Watchmode search result
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WatchmodeTitle {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub title_type: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub imdb_id: Option<String>,
}

/// Watchmode title details response, fetched with `append_to_response=sources`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WatchmodeTitleDetails {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sources: Option<Vec<WatchmodeSource>>,
}

/// Watchmode streaming source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchmodeSource {
    #[serde(default)]
    pub source_id: Option<u64>,
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: SourceType,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

/// How a source offers the title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Subscription
    Sub,
    /// Ad-supported free
    Free,
    /// TV-provider authenticated
    Tve,
    Rent,
    Buy,
    #[serde(other)]
    Other,
}

impl SourceType {
    /// Offers watchable without a per-title payment
    pub fn is_streaming(&self) -> bool {
        matches!(self, SourceType::Sub | SourceType::Free | SourceType::Tve)
    }
}
