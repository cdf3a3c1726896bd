use serde_json::Value;

use super::recommendations::{cards_from_flat_list, cards_from_recommendations};
use super::types::{MovieDetails, Recommendations};
use super::{non_blank_str, string_field};

/// Parse the `/movie/id/{id}` record. Anything but a non-empty object is
/// treated as "no details".
pub fn parse_movie_details(data: &Value) -> Option<MovieDetails> {
    let obj = data.as_object().filter(|o| !o.is_empty())?;

    let genres: Vec<String> = obj
        .get("genres")
        .and_then(Value::as_array)
        .map(|genres| {
            genres
                .iter()
                .filter_map(|g| g.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(MovieDetails {
        title: string_field(obj, "title").unwrap_or_default(),
        release_date: non_blank_str(obj, "release_date").map(str::to_string),
        genres,
        overview: non_blank_str(obj, "overview").map(str::to_string),
        poster_url: non_blank_str(obj, "poster_url").map(str::to_string),
        backdrop_url: non_blank_str(obj, "backdrop_url").map(str::to_string),
    })
}

/// Parse the `/movie/search` bundle. Returns `None` for an empty or
/// non-object payload.
pub fn parse_recommendations(data: &Value) -> Option<Recommendations> {
    let obj = data.as_object().filter(|o| !o.is_empty())?;

    Some(Recommendations {
        tfidf: cards_from_recommendations(obj.get("tfidf_recommendations")),
        genre: cards_from_flat_list(obj.get("genre_recommendations")),
    })
}
