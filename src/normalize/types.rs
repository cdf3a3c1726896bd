use serde::{Deserialize, Serialize};

use super::ids::MovieId;

pub const UNTITLED: &str = "Untitled";

/// Canonical movie record used by every poster grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieCard {
    pub id: MovieId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
}

impl MovieCard {
    /// Build a card, falling back to "Untitled" for a blank title.
    pub fn new(id: MovieId, title: Option<&str>, poster_url: Option<String>) -> Self {
        let title = match title.map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => UNTITLED.to_string(),
        };
        Self {
            id,
            title,
            poster_url: poster_url.filter(|p| !p.is_empty()),
        }
    }
}

/// Entry of the type-ahead selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub label: String,
    pub id: MovieId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub suggestions: Vec<Suggestion>,
    pub cards: Vec<MovieCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop_url: Option<String>,
}

impl MovieDetails {
    pub fn release_label(&self) -> &str {
        self.release_date.as_deref().unwrap_or("-")
    }

    pub fn genres_label(&self) -> String {
        if self.genres.is_empty() {
            "-".to_string()
        } else {
            self.genres.join(", ")
        }
    }

    pub fn overview_text(&self) -> &str {
        self.overview.as_deref().unwrap_or("No overview available.")
    }
}

/// Both recommendation lists returned by `/movie/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub tfidf: Vec<MovieCard>,
    pub genre: Vec<MovieCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsBundle {
    pub movie: MovieDetails,
    pub tfidf_recommendations: Vec<MovieCard>,
    pub genre_recommendations: Vec<MovieCard>,
}

impl DetailsBundle {
    pub fn new(movie: MovieDetails, recommendations: Recommendations) -> Self {
        Self {
            movie,
            tfidf_recommendations: recommendations.tfidf,
            genre_recommendations: recommendations.genre,
        }
    }
}
