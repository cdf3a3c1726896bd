use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Home feed categories offered by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeCategory {
    #[default]
    Trending,
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
}

impl HomeCategory {
    pub const ALL: [HomeCategory; 5] = [
        HomeCategory::Trending,
        HomeCategory::Popular,
        HomeCategory::TopRated,
        HomeCategory::NowPlaying,
        HomeCategory::Upcoming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HomeCategory::Trending => "trending",
            HomeCategory::Popular => "popular",
            HomeCategory::TopRated => "top_rated",
            HomeCategory::NowPlaying => "now_playing",
            HomeCategory::Upcoming => "upcoming",
        }
    }

    /// Human readable name, e.g. "Top Rated".
    pub fn label(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromStr for HomeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HomeCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

impl fmt::Display for HomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(HomeCategory::Trending.label(), "Trending");
        assert_eq!(HomeCategory::TopRated.label(), "Top Rated");
        assert_eq!(HomeCategory::NowPlaying.label(), "Now Playing");
    }

    #[test]
    fn test_parse() {
        assert_eq!("upcoming".parse::<HomeCategory>(), Ok(HomeCategory::Upcoming));
        assert!("Upcoming".parse::<HomeCategory>().is_err());
        for category in HomeCategory::ALL {
            assert_eq!(category.as_str().parse::<HomeCategory>(), Ok(category));
        }
    }
}
