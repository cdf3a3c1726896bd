use crate::backend::HomeCategory;
use crate::normalize::MovieId;
use crate::presenter::grid::Columns;
use crate::util::{encode_query, QueryParams};

use super::state::View;

/// The externally visible navigation parameters, `view` and `id`.
///
/// Values are kept as raw strings; validation happens when a state is
/// derived from them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavParams {
    pub view: Option<String>,
    pub id: Option<String>,
}

impl NavParams {
    pub fn home() -> Self {
        Self {
            view: Some(View::Home.as_str().to_string()),
            id: None,
        }
    }

    pub fn details(id: MovieId) -> Self {
        Self {
            view: Some(View::Details.as_str().to_string()),
            id: Some(id.to_string()),
        }
    }

    pub fn from_query(query: &QueryParams) -> Self {
        Self {
            view: query.get_trimmed("view").map(str::to_string),
            id: query.get_trimmed("id").map(str::to_string),
        }
    }

    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref view) = self.view {
            pairs.push(("view", view.clone()));
        }
        if let Some(ref id) = self.id {
            pairs.push(("id", id.clone()));
        }
        pairs
    }
}

/// Display preferences that travel in the URL next to the navigation
/// parameters. Navigation never resets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub category: HomeCategory,
    pub columns: Columns,
}

impl Preferences {
    pub fn new(category: HomeCategory, columns: Columns) -> Self {
        Self { category, columns }
    }

    /// Read preferences from the query, falling back to the defaults for
    /// missing or invalid values.
    pub fn from_query(query: &QueryParams, default_columns: usize) -> Self {
        let category = query.parse::<HomeCategory>("category").unwrap_or_default();
        let columns = query
            .parse::<usize>("cols")
            .map(Columns::new)
            .unwrap_or_else(|| Columns::new(default_columns));
        Self { category, columns }
    }

    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("category", self.category.as_str().to_string()),
            ("cols", self.columns.get().to_string()),
        ]
    }
}

/// Build a link to the application page for the given navigation
/// parameters, preferences and extra parameters.
pub fn page_url(params: &NavParams, prefs: &Preferences, extra: &[(&str, String)]) -> String {
    let mut pairs: Vec<(&str, String)> = params.pairs();
    pairs.extend(prefs.pairs());
    pairs.extend(extra.iter().cloned());
    format!("/?{}", encode_query(&pairs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query() {
        let query: QueryParams = [("view", "details"), ("id", " 42"), ("q", "bat")]
            .into_iter()
            .collect();
        let params = NavParams::from_query(&query);
        assert_eq!(params.view.as_deref(), Some("details"));
        assert_eq!(params.id.as_deref(), Some("42"));

        let empty = NavParams::from_query(&QueryParams::default());
        assert_eq!(empty, NavParams::default());
    }

    #[test]
    fn test_preferences() {
        let query: QueryParams = [("category", "top_rated"), ("cols", "12")]
            .into_iter()
            .collect();
        let prefs = Preferences::from_query(&query, 6);
        assert_eq!(prefs.category, HomeCategory::TopRated);
        assert_eq!(prefs.columns.get(), 8);

        let query: QueryParams = [("category", "bogus"), ("cols", "wide")].into_iter().collect();
        let prefs = Preferences::from_query(&query, 6);
        assert_eq!(prefs.category, HomeCategory::Trending);
        assert_eq!(prefs.columns.get(), 6);
    }

    #[test]
    fn test_page_url_keeps_preferences() {
        let prefs = Preferences::new(HomeCategory::Upcoming, Columns::new(5));
        let id = MovieId::new(42).unwrap();

        assert_eq!(
            page_url(&NavParams::details(id), &prefs, &[]),
            "/?view=details&id=42&category=upcoming&cols=5"
        );
        assert_eq!(
            page_url(&NavParams::home(), &prefs, &[("q", "star wars".to_string())]),
            "/?view=home&category=upcoming&cols=5&q=star%20wars"
        );
    }
}
