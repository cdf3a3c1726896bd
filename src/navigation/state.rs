use serde::{Deserialize, Serialize};

use super::params::NavParams;
use crate::normalize::MovieId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Details,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Details => "details",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "home" => Some(View::Home),
            "details" => Some(View::Details),
            _ => None,
        }
    }
}

/// Which view is shown and which movie it is about.
///
/// `selected_id` may still hold the last movie after going back home; it is
/// only read in the details view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationState {
    pub view: View,
    pub selected_id: Option<MovieId>,
}

/// Result of a navigation action: the new state and the URL parameters that
/// mirror it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: NavigationState,
    pub params: NavParams,
}

impl NavigationState {
    pub fn initial() -> Self {
        Self::default()
    }

    /// Re-derive the state from external parameters.
    ///
    /// Any integer `id` wins and forces the details view, even when
    /// `view=home` is given alongside it. Only a positive one selects a
    /// movie; `0` or a negative id leaves the details view empty.
    /// Non-integer values are ignored.
    pub fn derive(self, params: &NavParams) -> Self {
        let mut state = self;

        if let Some(view) = params.view.as_deref().and_then(View::parse) {
            state.view = view;
        }

        if let Some(raw) = params.id.as_deref() {
            if let Ok(value) = raw.trim().parse::<i64>() {
                state.view = View::Details;
                state.selected_id = u64::try_from(value).ok().and_then(MovieId::new);
            }
        }

        state
    }

    /// The parameters that reproduce the current view. A stale selection
    /// is left out of the home view.
    pub fn params(&self) -> NavParams {
        match (self.view, self.selected_id) {
            (View::Details, Some(id)) => NavParams::details(id),
            (View::Details, None) => NavParams {
                view: Some(View::Details.as_str().to_string()),
                id: None,
            },
            (View::Home, _) => NavParams::home(),
        }
    }

    pub fn go_to_home(&self) -> Transition {
        Transition {
            state: NavigationState {
                view: View::Home,
                selected_id: self.selected_id,
            },
            params: NavParams::home(),
        }
    }

    /// Open the details view for a raw id. Returns `None`, leaving the
    /// state untouched, when `raw` is not a positive integer.
    pub fn go_to_details(&self, raw: &str) -> Option<Transition> {
        MovieId::parse(raw).map(|id| self.go_to_movie(id))
    }

    pub fn go_to_movie(&self, id: MovieId) -> Transition {
        Transition {
            state: NavigationState {
                view: View::Details,
                selected_id: Some(id),
            },
            params: NavParams::details(id),
        }
    }
}
