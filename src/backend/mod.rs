//! Access to the remote movie-recommendation API.

pub mod cache;
pub mod category;
pub mod client;

pub use cache::{CacheKey, ResponseCache};
pub use category::HomeCategory;
pub use client::ApiClient;

use async_trait::async_trait;
use serde_json::Value;

use crate::normalize::MovieId;

pub type QueryPairs<'a> = &'a [(&'a str, String)];

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single backend call. Transport problems and HTTP status
/// failures are reported to the user the same way, as a short reason.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {0}")]
    Http(u16),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Request failed: {0}")]
    Decode(String),
    #[error("Unknown error")]
    Empty,
}

/// A read-only JSON backend.
///
/// Implementors only provide `get_json`; the endpoint helpers build the
/// paths and parameters the backend expects.
#[async_trait]
pub trait MovieBackend: Send + Sync {
    async fn get_json(&self, path: &str, params: QueryPairs<'_>) -> ApiResult<Value>;

    async fn search(&self, query: &str) -> ApiResult<Value> {
        self.get_json("/tmdb/search", &[("query", query.to_string())])
            .await
    }

    async fn home(&self, category: HomeCategory, limit: usize) -> ApiResult<Value> {
        self.get_json(
            "/home",
            &[
                ("category", category.as_str().to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    async fn movie(&self, id: MovieId) -> ApiResult<Value> {
        self.get_json(&format!("/movie/id/{}", id), &[]).await
    }

    async fn recommendations(
        &self,
        title: &str,
        tfidf_top_n: usize,
        genre_limit: usize,
    ) -> ApiResult<Value> {
        self.get_json(
            "/movie/search",
            &[
                ("query", title.to_string()),
                ("tfidf_top_n", tfidf_top_n.to_string()),
                ("genre_limit", genre_limit.to_string()),
            ],
        )
        .await
    }
}
