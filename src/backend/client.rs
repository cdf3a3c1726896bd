use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::{ApiError, ApiResult, CacheKey, MovieBackend, QueryPairs, ResponseCache};
use crate::config::BackendConfig;

/// HTTP client for the recommendation API.
///
/// One attempt per call, no retries. Outcomes are cached for the configured
/// TTL, so callers must expect slightly stale data.
pub struct ApiClient {
    http: Client,
    base_url: String,
    cache: ResponseCache,
}

impl ApiClient {
    pub fn new(config: &BackendConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cache: ResponseCache::new(Duration::from_secs(config.cache_ttl_secs)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, path: &str, params: QueryPairs<'_>) -> ApiResult<Value> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(ApiError::Http(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl MovieBackend for ApiClient {
    async fn get_json(&self, path: &str, params: QueryPairs<'_>) -> ApiResult<Value> {
        let key = CacheKey::new(path, params);

        if let Some(outcome) = self.cache.get(&key).await {
            debug!(path = %path, "backend cache hit");
            return outcome;
        }

        debug!(path = %path, ?params, "backend request");
        let outcome = self.fetch(path, params).await;

        if let Err(ref e) = outcome {
            warn!(path = %path, error = %e, "backend request failed");
        }

        self.cache.insert(key, outcome.clone()).await;
        outcome
    }
}
