use crate::backend::{ApiResult, HomeCategory};
use crate::catalog::DetailsPage;
use crate::navigation::Preferences;
use crate::normalize::{MovieCard, SearchOutcome};
use crate::util::encode_query;

use super::grid::render_grid;
use super::html::{escape, notice, NoticeKind};

pub const MIN_KEYWORD_CHARS: usize = 2;

fn back_to_home(prefs: &Preferences) -> String {
    format!(
        r#"<a class="button" href="/go/home?{}">← Back to Home</a>"#,
        escape(&encode_query(&prefs.pairs()))
    )
}

fn preference_fields(prefs: &Preferences) -> String {
    format!(
        r#"<input type="hidden" name="category" value="{}"><input type="hidden" name="cols" value="{}">"#,
        prefs.category.as_str(),
        prefs.columns.get()
    )
}

/// Keyword input. Submitting it keeps the user on the home view.
pub fn search_form(keyword: &str, prefs: &Preferences) -> String {
    format!(
        r#"<form action="/" method="get" class="search">
<input type="hidden" name="view" value="home">{}
<label>Search by movie title (keyword)<br>
<input type="text" name="q" value="{}" placeholder="Type: avenger, batman, love..." size="40"></label>
<button type="submit">Search</button>
</form>
<hr>"#,
        preference_fields(prefs),
        escape(keyword)
    )
}

pub fn keyword_too_short() -> String {
    format!(
        r#"<div class="muted">Type at least {} characters for suggestions.</div>"#,
        MIN_KEYWORD_CHARS
    )
}

/// Suggestions selector and result grid for a keyword search.
pub fn search_results(
    keyword: &str,
    outcome: &ApiResult<SearchOutcome>,
    prefs: &Preferences,
) -> String {
    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(e) => return notice(NoticeKind::Error, &format!("Search failed: {}", e)),
    };

    let mut out = String::new();

    if !outcome.suggestions.is_empty() {
        let options: String = outcome
            .suggestions
            .iter()
            .map(|s| format!(r#"<option value="{}">{}</option>"#, s.id, escape(&s.label)))
            .collect();

        out.push_str(&format!(
            r#"<form action="/go/details" method="get" class="suggestions">{}
<input type="hidden" name="q" value="{}">
<label>Suggestions<br><select name="id"><option value="">-- Select a movie --</option>{}</select></label>
<button type="submit">Open</button>
</form>"#,
            preference_fields(prefs),
            escape(keyword),
            options
        ));
    }

    out.push_str("<h3>Results</h3>");
    out.push_str(&render_grid(&outcome.cards, prefs));
    out
}

pub fn home_feed(
    category: HomeCategory,
    feed: &ApiResult<Vec<MovieCard>>,
    prefs: &Preferences,
) -> String {
    let mut out = format!("<h3>🏠 Home — {}</h3>", escape(&category.label()));
    match feed {
        Ok(cards) => out.push_str(&render_grid(cards, prefs)),
        Err(e) => out.push_str(&notice(NoticeKind::Error, &format!("Home feed failed: {}", e))),
    }
    out
}

pub fn no_selection(prefs: &Preferences) -> String {
    format!(
        "{}{}",
        notice(NoticeKind::Warning, "No movie selected."),
        back_to_home(prefs)
    )
}

/// Details header, recommendations, and the inline failure messages for
/// whichever section could not be loaded.
pub fn details(page: &ApiResult<DetailsPage>, prefs: &Preferences) -> String {
    let mut out = format!(
        r#"<div class="details-header"><h3>📄 Movie Details</h3>{}</div>"#,
        back_to_home(prefs)
    );

    let page = match page {
        Ok(page) => page,
        Err(e) => {
            out.push_str(&notice(
                NoticeKind::Error,
                &format!("Could not load details: {}", e),
            ));
            return out;
        }
    };

    let movie = &page.movie;
    let poster = movie
        .poster_url
        .as_deref()
        .map(|url| {
            format!(
                r#"<img class="poster" src="{}" alt="{}">"#,
                escape(url),
                escape(&movie.title)
            )
        })
        .unwrap_or_default();

    out.push_str(&format!(
        r#"<div class="details">
<div class="card">{}</div>
<div class="card">
<h2>{}</h2>
<div class="muted">Release: {}</div>
<div class="muted">Genres: {}</div>
<hr>
<h3>Overview</h3>
<p>{}</p>
</div>
</div>"#,
        poster,
        escape(&movie.title),
        escape(movie.release_label()),
        escape(&movie.genres_label()),
        escape(movie.overview_text())
    ));

    if let Some(ref backdrop) = movie.backdrop_url {
        out.push_str(&format!(
            r#"<h4>Backdrop</h4><img class="backdrop" src="{}" alt="">"#,
            escape(backdrop)
        ));
    }

    out.push_str("<hr><h3>✅ Recommendations</h3>");

    match page.recommendations {
        Some(Ok(ref recs)) => {
            out.push_str("<h4>🔎 Similar Movies</h4>");
            out.push_str(&render_grid(&recs.tfidf, prefs));
            out.push_str("<h4>🎭 More Like This</h4>");
            out.push_str(&render_grid(&recs.genre, prefs));
        }
        Some(Err(ref e)) => out.push_str(&notice(
            NoticeKind::Error,
            &format!("Could not load recommendations: {}", e),
        )),
        None => {}
    }

    out
}
