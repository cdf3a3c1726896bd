#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use movierec_web::backend::{ApiError, ApiResult, MovieBackend, QueryPairs};
use movierec_web::catalog::Catalog;
use movierec_web::config::Config;
use movierec_web::server::{build_router, AppState};

/// In-memory backend keyed by path. Records every call.
#[derive(Default)]
pub struct FakeBackend {
    responses: HashMap<String, ApiResult<Value>>,
    calls: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, response: ApiResult<Value>) -> Self {
        self.responses.insert(path.to_string(), response);
        self
    }

    pub fn calls(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.calls().into_iter().map(|(path, _)| path).collect()
    }
}

#[async_trait]
impl MovieBackend for FakeBackend {
    async fn get_json(&self, path: &str, params: QueryPairs<'_>) -> ApiResult<Value> {
        self.calls.lock().unwrap().push((
            path.to_string(),
            params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        ));
        self.responses
            .get(path)
            .cloned()
            .unwrap_or(Err(ApiError::Http(404)))
    }
}

pub fn catalog(backend: Arc<FakeBackend>) -> Catalog {
    let config = Config::default();
    Catalog::new(backend, &config.backend, config.ui)
}

pub fn app(backend: Arc<FakeBackend>) -> axum::Router {
    let config = Config::default();
    let catalog = Catalog::new(backend, &config.backend, config.ui.clone());
    build_router(AppState::new(config, catalog))
}

pub fn batman_search() -> Value {
    json!({"results": [
        {"id": 5, "title": "Batman Begins", "poster_path": "/a.jpg", "release_date": "2005-06-10"},
        {"id": 6, "title": "Catwoman", "poster_path": "/b.jpg", "release_date": "2004-01-01"},
    ]})
}

pub fn home_feed() -> Value {
    json!([
        {"tmdb_id": 27205, "title": "Inception", "poster_url": "https://img/inception.jpg"},
        {"tmdb_id": 157336, "title": "Interstellar", "poster_url": null},
    ])
}

pub fn inception_details() -> Value {
    json!({
        "title": "Inception",
        "release_date": "2010-07-15",
        "genres": [{"name": "Action"}, {"name": "Science Fiction"}],
        "overview": "Cobb steals secrets from dreams.",
        "poster_url": "https://img/inception.jpg",
        "backdrop_url": "https://img/inception-bd.jpg",
    })
}

pub fn inception_recommendations() -> Value {
    json!({
        "tfidf_recommendations": [
            {"title": "Interstellar", "tmdb": {"tmdb_id": 157336, "title": "Interstellar"}},
            {"tmdb_id": 0, "title": "Broken"},
        ],
        "genre_recommendations": [
            {"tmdb_id": 155, "title": "The Dark Knight", "poster_url": "https://img/tdk.jpg"},
        ],
    })
}
