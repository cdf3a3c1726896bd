use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::backend::{ApiError, HomeCategory};
use crate::normalize::{DetailsBundle, MovieCard, MovieId, SearchOutcome};
use crate::server::AppState;
use crate::util::QueryParams;

/// A backend failure reported as JSON.
pub struct ApiFailure(ApiError);

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<QueryParams>,
) -> Result<Json<SearchOutcome>, Response> {
    let keyword = query
        .get_trimmed("q")
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "missing q").into_response())?;
    let limit = query.parse::<usize>("limit");

    let outcome = state
        .catalog
        .search(keyword, limit)
        .await
        .map_err(|e| ApiFailure(e).into_response())?;

    Ok(Json(outcome))
}

pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<QueryParams>,
) -> Result<Json<Vec<MovieCard>>, Response> {
    let category = match query.get_trimmed("category") {
        Some(c) => c
            .parse::<HomeCategory>()
            .map_err(|e| (StatusCode::BAD_REQUEST, e).into_response())?,
        None => HomeCategory::default(),
    };

    let cards = state
        .catalog
        .home_feed(category, query.parse::<usize>("limit"))
        .await
        .map_err(|e| ApiFailure(e).into_response())?;

    Ok(Json(cards))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsResponse {
    #[serde(flatten)]
    pub bundle: DetailsBundle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations_error: Option<String>,
}

pub async fn movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DetailsResponse>, Response> {
    let id = MovieId::parse(&raw_id).ok_or_else(|| StatusCode::NOT_FOUND.into_response())?;

    let page = state
        .catalog
        .details(id)
        .await
        .map_err(|e| ApiFailure(e).into_response())?;

    let recommendations_error = match page.recommendations {
        Some(Err(ref e)) => Some(e.to_string()),
        _ => None,
    };

    Ok(Json(DetailsResponse {
        bundle: page.bundle(),
        recommendations_error,
    }))
}
