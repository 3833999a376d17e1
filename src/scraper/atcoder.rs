use ::scraper::{Html, Selector};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::config::Endpoints;
use crate::error::{LayoutError, LayoutResult, ProfileError, Result};
use crate::model::{AtCoderProfile, Availability, Platform};
use crate::scraper::{self, element_text, parse_int};

#[instrument(skip(client, endpoints))]
pub(crate) async fn get_profile(
    client: &reqwest::Client,
    endpoints: &Endpoints,
    username: &str,
) -> Result<AtCoderProfile> {
    let url = endpoints.atcoder_user(username)?;
    let body = scraper::fetch_text(client, &url, Platform::AtCoder, username).await?;
    let document = Html::parse_document(&body);
    let profile = parse_profile(&document).map_err(ProfileError::layout(Platform::AtCoder))?;
    debug!(rated = profile.rating.value().is_some(), "parsed atcoder profile");
    Ok(profile)
}

/// Parse a user page.
///
/// The rating history is the second `table.dl-table`; a page with fewer than
/// two such tables belongs to a user who never competed. In that table the
/// cells are read by position: cell 0 holds the rank with a two character
/// ordinal suffix, cell 1 the current rating, and cell 2 a run of spans
/// whose first is the highest rating and whose third is the skill level.
pub(crate) fn parse_profile(document: &Html) -> LayoutResult<AtCoderProfile> {
    let table_selector = Selector::parse("table.dl-table")?;
    let cell_selector = Selector::parse("td")?;
    let span_selector = Selector::parse("span")?;

    let Some(table) = document.select(&table_selector).nth(1) else {
        return Ok(AtCoderProfile::never_rated());
    };
    let cells = table.select(&cell_selector).collect_vec();

    let rank_cell = cells.first().ok_or(LayoutError::ElementNotFound {
        context: "rank cell",
    })?;
    let rank = parse_rank(&element_text(rank_cell))?;

    let rating_cell = cells.get(1).ok_or(LayoutError::ElementNotFound {
        context: "rating cell",
    })?;
    let rating = parse_int(&element_text(rating_cell))?;

    let highest_cell = cells.get(2).ok_or(LayoutError::ElementNotFound {
        context: "highest rating cell",
    })?;
    let spans = highest_cell.select(&span_selector).collect_vec();
    let highest_span = spans.first().ok_or(LayoutError::ElementNotFound {
        context: "highest rating span",
    })?;
    let highest = parse_int(&element_text(highest_span))?;
    let level_span = spans.get(2).ok_or(LayoutError::ElementNotFound {
        context: "skill level span",
    })?;
    let level = element_text(level_span);

    Ok(AtCoderProfile {
        rating: Availability::Available(rating),
        highest: Availability::Available(highest),
        rank: Availability::Available(rank),
        level: Availability::Available(level),
    })
}

/// Parse a rank such as `"1542nd"`, dropping the last two characters.
pub(crate) fn parse_rank(text: &str) -> LayoutResult<u32> {
    let text = text.trim();
    let end = text
        .char_indices()
        .rev()
        .nth(1)
        .map(|(index, _)| index)
        .unwrap_or(0);
    parse_int(&text[..end])
}
