//! Normalization of backend payloads into canonical cards.
//!
//! The backend is inconsistent about payload shapes, so every routine here
//! first classifies the raw JSON and then maps it. Unknown shapes produce
//! empty results rather than errors.

pub mod details;
pub mod ids;
pub mod recommendations;
pub mod search;
pub mod types;

pub use details::{parse_movie_details, parse_recommendations};
pub use ids::MovieId;
pub use recommendations::{cards_from_flat_list, cards_from_recommendations};
pub use search::{parse_search_results, DEFAULT_SEARCH_LIMIT, SUGGESTION_LIMIT};
pub use types::*;

use serde_json::{Map, Value};

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn non_blank_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
