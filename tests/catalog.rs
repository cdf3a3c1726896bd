mod common;

use std::sync::Arc;

use common::*;
use movierec_web::backend::{ApiError, HomeCategory};
use movierec_web::normalize::MovieId;
use serde_json::json;

#[tokio::test]
async fn test_search_filters_by_keyword() {
    let backend = Arc::new(FakeBackend::new().with("/tmdb/search", Ok(batman_search())));
    let catalog = catalog(backend.clone());

    let outcome = catalog.search("  bat ", None).await.unwrap();
    assert_eq!(outcome.suggestions.len(), 1);
    assert_eq!(outcome.suggestions[0].label, "Batman Begins (2005)");
    assert_eq!(outcome.cards[0].id, MovieId::new(5).unwrap());
    assert_eq!(
        outcome.cards[0].poster_url.as_deref(),
        Some("https://image.tmdb.org/t/p/w500/a.jpg")
    );

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, vec![("query".to_string(), "bat".to_string())]);
}

#[tokio::test]
async fn test_search_failure_is_propagated() {
    let backend = Arc::new(FakeBackend::new().with("/tmdb/search", Err(ApiError::Http(500))));
    let err = catalog(backend).search("bat", None).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 500");
}

#[tokio::test]
async fn test_home_feed() {
    let backend = Arc::new(FakeBackend::new().with("/home", Ok(home_feed())));
    let catalog = catalog(backend.clone());

    let cards = catalog.home_feed(HomeCategory::TopRated, None).await.unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[1].poster_url, None);

    let calls = backend.calls();
    assert_eq!(
        calls[0].1,
        vec![
            ("category".to_string(), "top_rated".to_string()),
            ("limit".to_string(), "24".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_empty_home_feed_is_an_error() {
    let backend = Arc::new(FakeBackend::new().with("/home", Ok(json!([]))));
    let err = catalog(backend).home_feed(HomeCategory::Trending, None).await.unwrap_err();
    assert_eq!(err, ApiError::Empty);
    assert_eq!(err.to_string(), "Unknown error");
}

#[tokio::test]
async fn test_home_feed_without_ids_is_not_an_error() {
    let backend = Arc::new(
        FakeBackend::new().with("/home", Ok(json!([{"title": "No id"}, {"tmdb_id": 0}]))),
    );
    let cards = catalog(backend).home_feed(HomeCategory::Trending, None).await.unwrap();
    assert!(cards.is_empty());
}

#[tokio::test]
async fn test_details_fetches_recommendations_by_title() {
    let backend = Arc::new(
        FakeBackend::new()
            .with("/movie/id/27205", Ok(inception_details()))
            .with("/movie/search", Ok(inception_recommendations())),
    );
    let catalog = catalog(backend.clone());

    let page = catalog.details(MovieId::new(27205).unwrap()).await.unwrap();
    assert_eq!(page.movie.title, "Inception");

    let recs = page.recommendations.clone().unwrap().unwrap();
    assert_eq!(recs.tfidf.len(), 1);
    assert_eq!(recs.tfidf[0].title, "Interstellar");
    assert_eq!(recs.genre[0].title, "The Dark Knight");

    let bundle = page.bundle();
    assert_eq!(bundle.tfidf_recommendations.len(), 1);
    assert_eq!(bundle.genre_recommendations.len(), 1);

    let calls = backend.calls();
    assert_eq!(calls[1].0, "/movie/search");
    assert_eq!(
        calls[1].1,
        vec![
            ("query".to_string(), "Inception".to_string()),
            ("tfidf_top_n".to_string(), "12".to_string()),
            ("genre_limit".to_string(), "12".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_recommendation_failure_keeps_details() {
    let backend = Arc::new(
        FakeBackend::new()
            .with("/movie/id/27205", Ok(inception_details()))
            .with("/movie/search", Err(ApiError::Transport("timed out".to_string()))),
    );

    let page = catalog(backend).details(MovieId::new(27205).unwrap()).await.unwrap();
    assert_eq!(page.movie.title, "Inception");
    assert!(matches!(page.recommendations, Some(Err(ApiError::Transport(_)))));
    assert!(page.bundle().tfidf_recommendations.is_empty());
}

#[tokio::test]
async fn test_blank_title_skips_recommendations() {
    let backend = Arc::new(
        FakeBackend::new().with("/movie/id/1", Ok(json!({"title": "  ", "overview": "?"}))),
    );
    let catalog = catalog(backend.clone());

    let page = catalog.details(MovieId::new(1).unwrap()).await.unwrap();
    assert_eq!(page.recommendations, None);
    assert_eq!(backend.paths(), vec!["/movie/id/1".to_string()]);
}

#[tokio::test]
async fn test_empty_details_is_an_error() {
    let backend = Arc::new(FakeBackend::new().with("/movie/id/1", Ok(json!({}))));
    let err = catalog(backend).details(MovieId::new(1).unwrap()).await.unwrap_err();
    assert_eq!(err, ApiError::Empty);
}
