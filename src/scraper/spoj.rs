use ::scraper::{ElementRef, Html, Selector};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::config::Endpoints;
use crate::error::{LayoutError, LayoutResult, ProfileError, Result};
use crate::model::{Platform, SpojProfile};
use crate::scraper::{self, element_text, parse_int};

// Positions of the profile paragraphs among all `<p>` elements on the page.
const JOIN_DATE_PARAGRAPH: usize = 1;
const RANKING_PARAGRAPH: usize = 2;
const INSTITUTE_PARAGRAPH: usize = 3;

/// Fetch a user page and parse it.
///
/// SPOJ serves unknown users with status 200, so a page without a numeric
/// points value is reported as [`ProfileError::UsernameNotFound`]. Missing
/// paragraphs or tables surface as
/// [`LayoutError::ElementNotFound`] inside
/// [`ProfileError::SourceLayoutChanged`]; the client decides how to read
/// those.
#[instrument(skip(client, endpoints))]
pub(crate) async fn get_profile(
    client: &reqwest::Client,
    endpoints: &Endpoints,
    username: &str,
) -> Result<SpojProfile> {
    let url = endpoints.spoj_user(username)?;
    let body = scraper::fetch_text(client, &url, Platform::Spoj, username).await?;
    let document = Html::parse_document(&body);
    let profile = parse_profile(&document)
        .map_err(ProfileError::layout(Platform::Spoj))?
        .ok_or_else(|| ProfileError::not_found(Platform::Spoj, username))?;

    debug!(
        solved = profile.solved.len(),
        todo = profile.todo.as_ref().map(Vec::len),
        "parsed spoj profile"
    );
    Ok(profile)
}

/// Parse a user page. `Ok(None)` means the page has no numeric points value,
/// which is how SPOJ renders a user that does not exist.
pub(crate) fn parse_profile(document: &Html) -> LayoutResult<Option<SpojProfile>> {
    let paragraph_selector = Selector::parse("p")?;
    let paragraphs = document
        .select(&paragraph_selector)
        .map(|p| element_text(&p))
        .collect_vec();

    let paragraph = |index: usize, context: &'static str| {
        paragraphs
            .get(index)
            .map(String::as_str)
            .ok_or(LayoutError::ElementNotFound { context })
    };
    let join_date = parse_join_date(paragraph(JOIN_DATE_PARAGRAPH, "join date paragraph")?)?;
    let (rank, points) = split_ranking(paragraph(RANKING_PARAGRAPH, "ranking paragraph")?)?;
    let institute = parse_institute(paragraph(INSTITUTE_PARAGRAPH, "institute paragraph")?);

    let Ok(points) = points.parse::<f64>() else {
        debug!(points, "points value is not numeric");
        return Ok(None);
    };
    let rank = parse_int(rank)?;

    let solved = parse_solved(document)?;
    let todo = parse_todo(document)?;

    Ok(Some(SpojProfile {
        points,
        rank,
        solved,
        todo,
        join_date,
        institute,
    }))
}

/// Word `index` of `text` split on whitespace.
fn word<'a>(text: &'a str, index: usize, context: &'static str) -> LayoutResult<&'a str> {
    text.split_whitespace()
        .nth(index)
        .ok_or(LayoutError::ElementNotFound { context })
}

/// `text` with its first character removed, e.g. the `#` of a rank.
fn drop_first_char(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.as_str()
}

/// Join date from words 1 and 2 of the join paragraph.
///
/// `"Joined March 2015"` becomes `"March 2015"`.
pub(crate) fn parse_join_date(text: &str) -> LayoutResult<String> {
    let month = word(text, 1, "join date month")?;
    let year = word(text, 2, "join date year")?;
    Ok(format!("{month} {year}"))
}

/// Raw rank and points from words 2 and 3 of the ranking paragraph, each
/// without its leading character.
///
/// `"World Rank: #4021 (12.5 points)"` becomes `("4021", "12.5")`.
pub(crate) fn split_ranking(text: &str) -> LayoutResult<(&str, &str)> {
    let rank = word(text, 2, "world rank")?;
    let points = word(text, 3, "points")?;
    Ok((drop_first_char(rank), drop_first_char(points)))
}

/// Every word after the first of the institute paragraph.
///
/// `"Institution: Some  University"` becomes `"Some University"`.
pub(crate) fn parse_institute(text: &str) -> String {
    text.split_whitespace().skip(1).join(" ")
}

fn parse_solved(document: &Html) -> LayoutResult<Vec<String>> {
    let table_selector = Selector::parse("table.table.table-condensed")?;
    let table = document
        .select(&table_selector)
        .next()
        .ok_or(LayoutError::ElementNotFound {
            context: "solved problems table (table.table-condensed)",
        })?;
    problem_codes(table)
}

fn parse_todo(document: &Html) -> LayoutResult<Option<Vec<String>>> {
    let table_selector = Selector::parse("table.table")?;
    document
        .select(&table_selector)
        .nth(1)
        .map(problem_codes)
        .transpose()
}

/// Link texts of all cells in `table` that hold a non-empty link.
fn problem_codes(table: ElementRef) -> LayoutResult<Vec<String>> {
    let cell_selector = Selector::parse("td")?;
    let link_selector = Selector::parse("a")?;
    Ok(table
        .select(&cell_selector)
        .filter_map(|cell| cell.select(&link_selector).next())
        .map(|link| element_text(&link).trim().to_string())
        .filter(|code| !code.is_empty())
        .collect())
}
