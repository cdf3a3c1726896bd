use crate::backend::HomeCategory;
use crate::navigation::Preferences;

use super::grid::{MAX_COLUMNS, MIN_COLUMNS};

const STYLE: &str = r#"
body { margin: 0; background: #0f0f0f; color: #fff; font-family: system-ui, sans-serif; }
.layout { display: flex; min-height: 100vh; }
.sidebar { width: 240px; padding: 1rem; background: linear-gradient(180deg, #1a1a1a, #111); border-right: 2px solid #0066ff; }
.main { flex: 1; padding: 1rem 2rem 2rem; max-width: 1500px; }
h1 { font-weight: 800; background: linear-gradient(90deg, #ff0000, #0066ff); -webkit-background-clip: text; color: transparent; }
.muted { color: #3399ff; font-size: 0.92rem; }
hr { border: none; height: 2px; background: linear-gradient(to right, transparent, #0066ff, transparent); margin: 1.5rem 0; }
.grid-row { display: grid; grid-template-columns: repeat(var(--cols), 1fr); gap: 1rem; margin-bottom: 1rem; }
.card { background: rgba(255,255,255,0.04); border-radius: 18px; padding: 12px; border: 1px solid rgba(0,102,255,0.25); }
.poster { width: 100%; border-radius: 12px; }
.placeholder { aspect-ratio: 2 / 3; display: flex; align-items: center; justify-content: center; background: #1c1c1c; }
.movie-title { font-size: 0.9rem; line-height: 1.15rem; height: 2.3rem; overflow: hidden; margin-top: 6px; }
.button, button { display: inline-block; margin-top: 6px; padding: 4px 14px; border: none; border-radius: 30px; background: linear-gradient(90deg, #ff0000, #0066ff); color: #fff; font-weight: 700; text-decoration: none; cursor: pointer; }
input, select { background: #1c1c1c; color: #fff; border-radius: 12px; border: 1px solid rgba(0,102,255,0.3); padding: 6px 10px; }
.notice { padding: 0.75rem 1rem; border-radius: 8px; margin: 0.5rem 0; }
.notice.error { background: rgba(255,0,0,0.15); }
.notice.warning { background: rgba(255,170,0,0.15); }
.notice.info { background: rgba(0,102,255,0.15); }
.details { display: grid; grid-template-columns: 1fr 2.4fr; gap: 2rem; }
.backdrop { width: 100%; border-radius: 12px; }
"#;

/// Escape text for use in HTML element content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Warning,
    Info,
}

pub fn notice(kind: NoticeKind, message: &str) -> String {
    let class = match kind {
        NoticeKind::Error => "error",
        NoticeKind::Warning => "warning",
        NoticeKind::Info => "info",
    };
    format!(r#"<div class="notice {}">{}</div>"#, class, escape(message))
}

/// Sidebar with the home button and the home feed preferences.
///
/// The preferences form resubmits `current`, the parameters of the view
/// being shown, so applying a preference re-renders the same view.
fn sidebar(prefs: &Preferences, current: &[(&str, String)]) -> String {
    let keep: String = current
        .iter()
        .map(|(name, value)| {
            format!(
                r#"<input type="hidden" name="{}" value="{}">"#,
                escape(name),
                escape(value)
            )
        })
        .collect();

    let categories: String = HomeCategory::ALL
        .iter()
        .map(|c| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                c.as_str(),
                if *c == prefs.category { " selected" } else { "" },
                escape(&c.label())
            )
        })
        .collect();

    let columns: String = (MIN_COLUMNS..=MAX_COLUMNS)
        .map(|n| {
            format!(
                r#"<option value="{n}"{}>{n}</option>"#,
                if n == prefs.columns.get() { " selected" } else { "" },
            )
        })
        .collect();

    format!(
        r#"<aside class="sidebar">
<h2>🎬 Menu</h2>
<form action="/go/home" method="get">
<input type="hidden" name="category" value="{category}">
<input type="hidden" name="cols" value="{cols}">
<button type="submit">🏠 Home</button>
</form>
<hr>
<h3>🏠 Home Feed</h3>
<form action="/" method="get">
{keep}
<label>Category<br><select name="category">{categories}</select></label><br><br>
<label>Grid columns<br><select name="cols">{columns}</select></label><br>
<button type="submit">Apply</button>
</form>
</aside>"#,
        category = prefs.category.as_str(),
        cols = prefs.columns.get(),
    )
}

/// Wrap a rendered view in the full page. `current` holds the parameters
/// that reproduce the view, minus the preferences.
pub fn page(title: &str, prefs: &Preferences, current: &[(&str, String)], body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<div class="layout">
{sidebar}
<main class="main">
<h1>🎬 {title}</h1>
<div class="muted">Type keyword → suggestions + matching results → open → details + recommendations</div>
<hr>
{body}
</main>
</div>
</body>
</html>"#,
        title = escape(title),
        style = STYLE,
        sidebar = sidebar(prefs, current),
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::grid::Columns;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("Amélie"), "Amélie");
    }

    #[test]
    fn test_page_marks_current_preferences() {
        let prefs = Preferences::new(HomeCategory::NowPlaying, Columns::new(7));
        let html = page("Movies", &prefs, &[], "<p>body</p>");
        assert!(html.contains(r#"<option value="now_playing" selected>"#));
        assert!(html.contains(r#"<option value="7" selected>7</option>"#));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_preferences_form_keeps_current_view() {
        let prefs = Preferences::new(HomeCategory::Trending, Columns::default());
        let current = [("view", "home".to_string()), ("q", "a\"b".to_string())];
        let html = page("Movies", &prefs, &current, "");
        assert!(html.contains(r#"<input type="hidden" name="view" value="home">"#));
        assert!(html.contains(r#"<input type="hidden" name="q" value="a&quot;b">"#));
    }
}
