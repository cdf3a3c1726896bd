use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::backend::{ApiError, ApiResult, HomeCategory, MovieBackend};
use crate::config::{BackendConfig, UiConfig};
use crate::normalize::{
    cards_from_flat_list, parse_movie_details, parse_recommendations, parse_search_results,
    DetailsBundle, MovieCard, MovieDetails, MovieId, Recommendations, SearchOutcome,
};

/// Everything the details view shows. The recommendations are fetched
/// separately and may fail on their own; `None` means they were not
/// requested because the movie has no title.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsPage {
    pub movie: MovieDetails,
    pub recommendations: Option<ApiResult<Recommendations>>,
}

impl DetailsPage {
    pub fn bundle(&self) -> DetailsBundle {
        let recommendations = match self.recommendations {
            Some(Ok(ref recs)) => recs.clone(),
            _ => Recommendations::default(),
        };
        DetailsBundle::new(self.movie.clone(), recommendations)
    }
}

/// Fetches backend data and normalizes it for the views. One method per
/// page section; each returns its own result so a failing section never
/// hides the others.
pub struct Catalog {
    backend: Arc<dyn MovieBackend>,
    image_base: String,
    ui: UiConfig,
}

fn is_blank(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

impl Catalog {
    pub fn new(
        backend: Arc<dyn MovieBackend>,
        backend_config: &BackendConfig,
        ui: UiConfig,
    ) -> Self {
        Self {
            backend,
            image_base: backend_config.image_base.clone(),
            ui,
        }
    }

    pub fn ui(&self) -> &UiConfig {
        &self.ui
    }

    pub async fn search(&self, keyword: &str, limit: Option<usize>) -> ApiResult<SearchOutcome> {
        let keyword = keyword.trim();
        let data = self.backend.search(keyword).await?;
        let outcome = parse_search_results(
            &data,
            keyword,
            &self.image_base,
            limit.unwrap_or(self.ui.search_limit),
        );
        debug!(
            keyword = %keyword,
            suggestions = outcome.suggestions.len(),
            cards = outcome.cards.len(),
            "search normalized"
        );
        Ok(outcome)
    }

    /// Home feed cards. An empty payload is reported as a failure; a
    /// non-empty one whose entries have no usable ids yields no cards.
    pub async fn home_feed(
        &self,
        category: HomeCategory,
        limit: Option<usize>,
    ) -> ApiResult<Vec<MovieCard>> {
        let data = self
            .backend
            .home(category, limit.unwrap_or(self.ui.home_limit))
            .await?;
        if is_blank(&data) {
            return Err(ApiError::Empty);
        }
        Ok(cards_from_flat_list(Some(&data)))
    }

    pub async fn movie(&self, id: MovieId) -> ApiResult<MovieDetails> {
        let data = self.backend.movie(id).await?;
        parse_movie_details(&data).ok_or(ApiError::Empty)
    }

    /// Recommendations are keyed by title, not by id.
    pub async fn recommendations(&self, title: &str) -> ApiResult<Recommendations> {
        let data = self
            .backend
            .recommendations(title, self.ui.tfidf_top_n, self.ui.genre_limit)
            .await?;
        parse_recommendations(&data).ok_or(ApiError::Empty)
    }

    pub async fn details(&self, id: MovieId) -> ApiResult<DetailsPage> {
        let movie = self.movie(id).await?;

        let title = movie.title.trim();
        let recommendations = if title.is_empty() {
            None
        } else {
            Some(self.recommendations(title).await)
        };

        Ok(DetailsPage {
            movie,
            recommendations,
        })
    }
}
