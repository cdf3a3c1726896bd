use moka::future::Cache;
use serde_json::Value;
use std::time::Duration;

use super::{ApiResult, QueryPairs};

const MAX_ENTRIES: u64 = 10_000;

/// Cache key: request path plus its query parameters, in call order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    path: String,
    params: Vec<(String, String)>,
}

impl CacheKey {
    pub fn new(path: &str, params: QueryPairs<'_>) -> Self {
        Self {
            path: path.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        }
    }
}

/// Time-windowed cache of backend call outcomes, failures included.
///
/// Entries are never invalidated explicitly; they expire after `ttl`.
/// A zero TTL disables caching.
#[derive(Clone)]
pub struct ResponseCache {
    ttl: Duration,
    entries: Option<Cache<CacheKey, ApiResult<Value>>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        let entries = (!ttl.is_zero()).then(|| {
            Cache::builder()
                .max_capacity(MAX_ENTRIES)
                .time_to_live(ttl)
                .build()
        });
        Self { ttl, entries }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn get(&self, key: &CacheKey) -> Option<ApiResult<Value>> {
        match self.entries {
            Some(ref entries) => entries.get(key).await,
            None => None,
        }
    }

    pub async fn insert(&self, key: CacheKey, outcome: ApiResult<Value>) {
        if let Some(ref entries) = self.entries {
            entries.insert(key, outcome).await;
        }
    }
}
