use serde_json::{Map, Value};

use super::ids::MovieId;
use super::types::MovieCard;
use super::{non_blank_str, string_field};

/// One entry of a recommendation list, classified by shape.
///
/// Older backends wrap the movie in a `tmdb` sub-record next to the match
/// metadata; newer ones put the movie fields on the item itself.
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationItem<'a> {
    Nested {
        movie: Option<&'a Map<String, Value>>,
        item: &'a Map<String, Value>,
    },
    Flat(&'a Map<String, Value>),
    Unrecognized,
}

impl<'a> RecommendationItem<'a> {
    pub fn classify(value: &'a Value) -> Self {
        let Some(item) = value.as_object() else {
            return RecommendationItem::Unrecognized;
        };

        if let Some(movie) = item.get("tmdb") {
            return RecommendationItem::Nested {
                movie: movie.as_object(),
                item,
            };
        }

        if item.contains_key("tmdb_id") {
            RecommendationItem::Flat(item)
        } else {
            RecommendationItem::Unrecognized
        }
    }

    pub fn into_card(self) -> Option<MovieCard> {
        match self {
            RecommendationItem::Nested { movie, item } => {
                let movie = movie?;
                let id = movie.get("tmdb_id").and_then(MovieId::from_json)?;
                let title = non_blank_str(movie, "title").or_else(|| non_blank_str(item, "title"));
                Some(MovieCard::new(id, title, string_field(movie, "poster_url")))
            }
            RecommendationItem::Flat(item) => {
                let id = item.get("tmdb_id").and_then(MovieId::from_json)?;
                Some(MovieCard::new(
                    id,
                    non_blank_str(item, "title"),
                    string_field(item, "poster_url"),
                ))
            }
            RecommendationItem::Unrecognized => None,
        }
    }
}

/// Normalize a nested-or-flat recommendation list into cards.
///
/// Items without a usable id are skipped. Order is preserved and duplicate
/// ids are passed through.
pub fn cards_from_recommendations(items: Option<&Value>) -> Vec<MovieCard> {
    let Some(items) = items.and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| RecommendationItem::classify(item).into_card())
        .collect()
}

/// Normalize a list of flat card-shaped objects, as returned by the home
/// feed and the genre recommendations.
pub fn cards_from_flat_list(items: Option<&Value>) -> Vec<MovieCard> {
    let Some(items) = items.and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let item = item.as_object()?;
            RecommendationItem::Flat(item).into_card()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(cards: &[MovieCard]) -> Vec<u64> {
        cards.iter().map(|c| c.id.get()).collect()
    }

    #[test]
    fn test_nested_and_flat_items() {
        let items = json!([
            {"title": "Outer", "tmdb": {"tmdb_id": 11, "title": "Star Wars", "poster_url": "https://img/sw.jpg"}},
            {"title": "Outer Title", "tmdb": {"tmdb_id": 12, "title": ""}},
            {"tmdb_id": 13, "title": "Flat", "poster_url": "https://img/f.jpg"},
            {"tmdb_id": 14},
        ]);

        let cards = cards_from_recommendations(Some(&items));
        assert_eq!(ids(&cards), vec![11, 12, 13, 14]);
        assert_eq!(cards[0].title, "Star Wars");
        assert_eq!(cards[0].poster_url.as_deref(), Some("https://img/sw.jpg"));
        assert_eq!(cards[1].title, "Outer Title");
        assert_eq!(cards[1].poster_url, None);
        assert_eq!(cards[2].title, "Flat");
        assert_eq!(cards[3].title, "Untitled");
    }

    #[test]
    fn test_nested_without_id_is_dropped() {
        let items = json!([
            {"title": "No id", "tmdb": {"title": "Ghost"}},
            {"title": "Null sub-record", "tmdb": null},
            {"title": "Nested zero", "tmdb": {"tmdb_id": 0, "title": "Zero"}},
            // the sub-record wins even when the item has its own id
            {"tmdb_id": 5, "tmdb": {}},
        ]);

        assert!(cards_from_recommendations(Some(&items)).is_empty());
    }

    #[test]
    fn test_flat_zero_id_is_absent() {
        let items = json!([{"tmdb_id": 0, "title": "X"}, {"tmdb_id": 7, "title": "Y"}]);
        let cards = cards_from_recommendations(Some(&items));
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id.get(), 7);
        assert_eq!(cards[0].title, "Y");
    }

    #[test]
    fn test_unrecognized_items_and_payloads() {
        let items = json!([{"id": 3, "title": "Plain id"}, "junk", 4, null]);
        assert!(cards_from_recommendations(Some(&items)).is_empty());
        assert!(cards_from_recommendations(Some(&json!({"tmdb_id": 1}))).is_empty());
        assert!(cards_from_recommendations(None).is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let items = json!([{"tmdb_id": 9, "title": "A"}, {"tmdb_id": 9, "title": "A"}]);
        assert_eq!(ids(&cards_from_recommendations(Some(&items))), vec![9, 9]);
    }

    #[test]
    fn test_flat_list() {
        let feed = json!([
            {"tmdb_id": 100, "title": "Dune", "poster_url": "https://img/d.jpg"},
            {"title": "Missing id"},
            {"tmdb_id": "101", "title": null},
        ]);
        let cards = cards_from_flat_list(Some(&feed));
        assert_eq!(ids(&cards), vec![100, 101]);
        assert_eq!(cards[1].title, "Untitled");
        assert!(cards_from_flat_list(Some(&json!({"results": []}))).is_empty());
    }
}
