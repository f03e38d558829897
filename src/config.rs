use serde::Deserialize;

use crate::models::ModelType;

/// Placeholder values shipped in sample env files; treated as "no key"
const PLACEHOLDER_KEYS: &[&str] = &["YOUR_API_KEY_HERE", "YOUR_WATCHMODE_API_KEY_HERE"];

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Recommendation backend base URL
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// TMDB API key, posters are skipped when absent
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// TMDB movie search endpoint
    #[serde(default = "default_tmdb_search_url")]
    pub tmdb_search_url: String,

    /// Prefix joined with TMDB `poster_path` values
    #[serde(default = "default_tmdb_image_base")]
    pub tmdb_image_base: String,

    /// Watchmode API key, streaming lookups are skipped when absent
    #[serde(default)]
    pub watchmode_api_key: Option<String>,

    /// Watchmode API base URL
    #[serde(default = "default_watchmode_api_url")]
    pub watchmode_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Quiet period before a suggestion query fires
    #[serde(default = "default_suggestion_debounce_ms")]
    pub suggestion_debounce_ms: u64,

    /// Recommender used until the user picks another one
    #[serde(default)]
    pub default_model: ModelType,
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_tmdb_search_url() -> String {
    "https://api.themoviedb.org/3/search/movie".to_string()
}

fn default_tmdb_image_base() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_watchmode_api_url() -> String {
    "https://api.watchmode.com".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_suggestion_debounce_ms() -> u64 {
    300
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_pairs<I>(pairs: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(pairs)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn tmdb_credential(&self) -> Option<&str> {
        credential(self.tmdb_api_key.as_deref())
    }

    pub fn watchmode_credential(&self) -> Option<&str> {
        credential(self.watchmode_api_key.as_deref())
    }
}

fn credential(key: Option<&str>) -> Option<&str> {
    key.map(str::trim)
        .filter(|k| !k.is_empty() && !PLACEHOLDER_KEYS.contains(k))
}
