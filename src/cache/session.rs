use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Poster { title: String, year: Option<i32> },
    Streaming { title: String, year: Option<i32> },
}

impl CacheKey {
    pub fn poster(title: &str, year: Option<i32>) -> Self {
        CacheKey::Poster {
            title: title.to_string(),
            year,
        }
    }

    pub fn streaming(title: &str, year: Option<i32>) -> Self {
        CacheKey::Streaming {
            title: title.to_string(),
            year,
        }
    }
}

fn title_year(title: &str, year: &Option<i32>) -> String {
    match year {
        Some(year) => format!("{}_{}", title, year),
        None => format!("{}_", title),
    }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheKey::Poster { title, year } => write!(f, "poster:{}", title_year(title, year)),
            CacheKey::Streaming { title, year } => {
                write!(f, "streaming:{}", title_year(title, year))
            }
        }
    }
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    cached_at: DateTime<Utc>,
}

/// Process-lifetime cache for enrichment lookups
///
/// Entries are write-once: the first value stored under a key wins and is never
/// replaced, expired or evicted.
#[derive(Debug)]
pub struct Cache<V> {
    entries: Arc<RwLock<HashMap<String, Entry<V>>>>,
}

impl<V> Clone for Cache<V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<V> Default for Cache<V> {
    fn default() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<V: Clone> Cache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves a value from the cache by key
    pub async fn get_from_cache(&self, key: &CacheKey) -> Option<V> {
        let entries = self.entries.read().await;
        entries.get(&key.to_string()).map(|entry| {
            tracing::debug!(
                key = %key,
                age_secs = (Utc::now() - entry.cached_at).num_seconds(),
                "Cache hit"
            );
            entry.value.clone()
        })
    }

    /// Stores a value unless the key is already present
    ///
    /// Returns `false` when an earlier value was kept.
    pub async fn set(&self, key: &CacheKey, value: &V) -> bool {
        let mut entries = self.entries.write().await;
        let key = key.to_string();
        if entries.contains_key(&key) {
            return false;
        }
        entries.insert(
            key,
            Entry {
                value: value.clone(),
                cached_at: Utc::now(),
            },
        );
        true
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
