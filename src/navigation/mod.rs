//! Two-view navigation (home, details) mirrored into URL parameters so every
//! view can be shared and bookmarked.

pub mod params;
pub mod state;

pub use params::{page_url, NavParams, Preferences};
pub use state::{NavigationState, Transition, View};
