use crate::navigation::{page_url, NavigationState, Preferences};
use crate::normalize::MovieCard;

use super::html::escape;

pub const MIN_COLUMNS: usize = 4;
pub const MAX_COLUMNS: usize = 8;
pub const DEFAULT_COLUMNS: usize = 6;

/// Grid width, always within `MIN_COLUMNS..=MAX_COLUMNS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns(usize);

impl Columns {
    pub fn new(n: usize) -> Self {
        Columns(n.clamp(MIN_COLUMNS, MAX_COLUMNS))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for Columns {
    fn default() -> Self {
        Columns(DEFAULT_COLUMNS)
    }
}

/// Split cards into rows of `columns` cells, row-major. The last row may be
/// short. Returns no rows for no cards.
pub fn layout(cards: &[MovieCard], columns: Columns) -> Vec<&[MovieCard]> {
    cards.chunks(columns.get()).collect()
}

/// Render a poster grid. Every card gets an "Open" link to its details
/// view; an empty list renders a notice instead.
pub fn render_grid(cards: &[MovieCard], prefs: &Preferences) -> String {
    let rows = layout(cards, prefs.columns);
    if rows.is_empty() {
        return r#"<div class="notice info">No movies to show.</div>"#.to_string();
    }

    let mut out = format!(
        r#"<div class="grid" style="--cols: {}">"#,
        prefs.columns.get()
    );
    for row in rows {
        out.push_str(r#"<div class="grid-row">"#);
        for card in row {
            out.push_str(&render_card(card, prefs));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

fn render_card(card: &MovieCard, prefs: &Preferences) -> String {
    let open = NavigationState::initial().go_to_movie(card.id);
    let href = page_url(&open.params, prefs, &[]);

    let poster = match card.poster_url {
        Some(ref url) => format!(
            r#"<img class="poster" src="{}" alt="{}" loading="lazy">"#,
            escape(url),
            escape(&card.title)
        ),
        None => r#"<div class="poster placeholder">🖼️ No poster</div>"#.to_string(),
    };

    format!(
        r#"<div class="card">{}<a class="button" href="{}">Open</a><div class="movie-title">{}</div></div>"#,
        poster,
        escape(&href),
        escape(&card.title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HomeCategory;
    use crate::normalize::MovieId;

    fn cards(n: u64) -> Vec<MovieCard> {
        (1..=n)
            .map(|i| {
                let title = format!("Movie {}", i);
                MovieCard::new(MovieId::new(i).unwrap(), Some(title.as_str()), None)
            })
            .collect()
    }

    #[test]
    fn test_columns_are_clamped() {
        assert_eq!(Columns::new(1).get(), 4);
        assert_eq!(Columns::new(6).get(), 6);
        assert_eq!(Columns::new(20).get(), 8);
    }

    #[test]
    fn test_layout_row_major() {
        let cards = cards(10);
        let rows = layout(&cards, Columns::new(4));
        let shape: Vec<usize> = rows.iter().map(|r| r.len()).collect();
        assert_eq!(shape, vec![4, 4, 2]);
        assert_eq!(rows[1][0].id.get(), 5);
        assert!(layout(&[], Columns::default()).is_empty());
    }

    #[test]
    fn test_render_empty() {
        let prefs = Preferences::new(HomeCategory::Trending, Columns::default());
        assert!(render_grid(&[], &prefs).contains("No movies to show."));
    }

    #[test]
    fn test_render_cards() {
        let prefs = Preferences::new(HomeCategory::Popular, Columns::new(4));
        let mut cards = cards(2);
        cards[0].poster_url = Some("https://img/a.jpg".to_string());
        cards[1].title = "Tom & Jerry".to_string();

        let html = render_grid(&cards, &prefs);
        assert_eq!(html.matches(r#"class="card""#).count(), 2);
        assert!(html.contains(r#"src="https://img/a.jpg""#));
        assert!(html.contains("No poster"));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(html.contains(r#"href="/?view=details&amp;id=1&amp;category=popular&amp;cols=4""#));
    }
}
