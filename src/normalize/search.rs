use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

use super::ids::MovieId;
use super::types::{MovieCard, SearchOutcome, Suggestion};
use super::{non_blank_str, string_field};

pub const DEFAULT_SEARCH_LIMIT: usize = 24;
pub const SUGGESTION_LIMIT: usize = 10;

/// The two shapes `/tmdb/search` is known to answer with.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPayload<'a> {
    /// Raw TMDB response: `{"results": [{id, title, poster_path, release_date}]}`.
    Results(&'a [Value]),
    /// Backend list: `[{tmdb_id | id, title, poster_url, release_date}]`.
    Flat(&'a [Value]),
    Unrecognized,
}

impl<'a> SearchPayload<'a> {
    pub fn classify(data: &'a Value) -> Self {
        match data {
            Value::Object(obj) if obj.contains_key("results") => {
                match obj.get("results").and_then(Value::as_array) {
                    Some(results) => SearchPayload::Results(results),
                    None => SearchPayload::Results(&[]),
                }
            }
            Value::Array(items) => SearchPayload::Flat(items),
            _ => SearchPayload::Unrecognized,
        }
    }
}

/// A search hit before it is split into suggestions and cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: MovieId,
    pub title: String,
    pub poster_url: Option<String>,
    pub release_date: String,
}

impl Candidate {
    fn from_results_entry(entry: &Map<String, Value>, image_base: &str) -> Option<Self> {
        let title = non_blank_str(entry, "title")?;
        let id = entry.get("id").and_then(MovieId::from_json)?;
        let poster_url = string_field(entry, "poster_path")
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}{}", image_base, p));

        Some(Candidate {
            id,
            title: title.to_string(),
            poster_url,
            release_date: string_field(entry, "release_date").unwrap_or_default(),
        })
    }

    fn from_flat_entry(entry: &Map<String, Value>) -> Option<Self> {
        let title = non_blank_str(entry, "title")?;
        let id = entry
            .get("tmdb_id")
            .and_then(MovieId::from_json)
            .or_else(|| entry.get("id").and_then(MovieId::from_json))?;

        Some(Candidate {
            id,
            title: title.to_string(),
            poster_url: string_field(entry, "poster_url"),
            release_date: string_field(entry, "release_date").unwrap_or_default(),
        })
    }

    pub fn suggestion(&self) -> Suggestion {
        let label = match release_year(&self.release_date) {
            Some(year) => format!("{} ({})", self.title, year),
            None => self.title.clone(),
        };
        Suggestion { label, id: self.id }
    }

    pub fn card(&self) -> MovieCard {
        MovieCard::new(self.id, Some(&self.title), self.poster_url.clone())
    }
}

fn release_year(release_date: &str) -> Option<&str> {
    static YEAR: OnceLock<Regex> = OnceLock::new();
    let re = YEAR.get_or_init(|| Regex::new(r"^(\d{4})").expect("valid year regex"));
    re.captures(release_date.trim_start())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Extract candidates from a search payload, dropping entries without a
/// title or an id.
pub fn search_candidates(data: &Value, image_base: &str) -> Vec<Candidate> {
    match SearchPayload::classify(data) {
        SearchPayload::Results(results) => results
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|entry| Candidate::from_results_entry(entry, image_base))
            .collect(),
        SearchPayload::Flat(items) => items
            .iter()
            .filter_map(Value::as_object)
            .filter_map(Candidate::from_flat_entry)
            .collect(),
        SearchPayload::Unrecognized => Vec::new(),
    }
}

/// Turn a raw search payload into type-ahead suggestions and result cards.
///
/// Candidates whose title contains the keyword (case-insensitive) are kept.
/// When none match, all candidates are used instead. Suggestions and cards
/// are truncated independently.
pub fn parse_search_results(
    data: &Value,
    keyword: &str,
    image_base: &str,
    limit: usize,
) -> SearchOutcome {
    let keyword = keyword.trim().to_lowercase();
    let candidates = search_candidates(data, image_base);

    let matched: Vec<&Candidate> = candidates
        .iter()
        .filter(|c| c.title.to_lowercase().contains(&keyword))
        .collect();

    let final_list: Vec<&Candidate> = if matched.is_empty() {
        candidates.iter().collect()
    } else {
        matched
    };

    SearchOutcome {
        suggestions: final_list
            .iter()
            .take(SUGGESTION_LIMIT)
            .map(|c| c.suggestion())
            .collect(),
        cards: final_list.iter().take(limit).map(|c| c.card()).collect(),
    }
}
