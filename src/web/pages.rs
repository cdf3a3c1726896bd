use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
};
use tracing::debug;

use crate::navigation::{page_url, NavParams, NavigationState, Preferences, View};
use crate::presenter::pages::{self, MIN_KEYWORD_CHARS};
use crate::presenter::html::page;
use crate::server::AppState;
use crate::util::QueryParams;

fn preferences(state: &AppState, query: &QueryParams) -> Preferences {
    Preferences::from_query(query, state.config.ui.default_columns)
}

/// The application page. The view is derived from the URL on every
/// request and rendered in full.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<QueryParams>,
) -> Html<String> {
    let prefs = preferences(&state, &query);
    let nav = NavigationState::initial().derive(&NavParams::from_query(&query));
    debug!(view = nav.view.as_str(), id = ?nav.selected_id, "render");

    let body = match nav.view {
        View::Home => home_view(&state, &query, &prefs).await,
        View::Details => match nav.selected_id {
            Some(id) => {
                let details = state.catalog.details(id).await;
                pages::details(&details, &prefs)
            }
            None => pages::no_selection(&prefs),
        },
    };

    let mut current = nav.params().pairs();
    if nav.view == View::Home {
        if let Some(q) = query.get_trimmed("q") {
            current.push(("q", q.to_string()));
        }
    }

    Html(page(&state.config.ui.title, &prefs, &current, &body))
}

async fn home_view(state: &AppState, query: &QueryParams, prefs: &Preferences) -> String {
    let keyword = query.get_trimmed("q").unwrap_or("");
    let mut body = pages::search_form(keyword, prefs);

    if !keyword.is_empty() {
        if keyword.chars().count() < MIN_KEYWORD_CHARS {
            body.push_str(&pages::keyword_too_short());
        } else {
            let outcome = state.catalog.search(keyword, None).await;
            body.push_str(&pages::search_results(keyword, &outcome, prefs));
        }
        return body;
    }

    let feed = state.catalog.home_feed(prefs.category, None).await;
    body.push_str(&pages::home_feed(prefs.category, &feed, prefs));
    body
}

/// Navigate to the home view. Clears the navigation parameters but keeps
/// the display preferences.
pub async fn go_home(State(state): State<AppState>, Query(query): Query<QueryParams>) -> Redirect {
    let prefs = preferences(&state, &query);
    let transition = NavigationState::initial().go_to_home();
    Redirect::to(&page_url(&transition.params, &prefs, &[]))
}

/// Navigate to the details view for `id`. An invalid id leaves the user
/// where they came from: the home view with their keyword.
pub async fn go_details(
    State(state): State<AppState>,
    Query(query): Query<QueryParams>,
) -> Redirect {
    let prefs = preferences(&state, &query);
    let raw = query.get("id").unwrap_or("");

    match NavigationState::initial().go_to_details(raw) {
        Some(transition) => Redirect::to(&page_url(&transition.params, &prefs, &[])),
        None => {
            debug!(id = %raw, "ignoring invalid movie id");
            let extra: Vec<(&str, String)> = query
                .get_trimmed("q")
                .map(|q| vec![("q", q.to_string())])
                .unwrap_or_default();
            Redirect::to(&page_url(&NavParams::home(), &prefs, &extra))
        }
    }
}
