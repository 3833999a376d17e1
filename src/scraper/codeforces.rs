use ::scraper::{ElementRef, Html, Selector};
use itertools::Itertools;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::Endpoints;
use crate::error::{LayoutError, LayoutResult, ProfileError, Result};
use crate::model::{CodeforcesProfile, ContestEntry, Platform, Rated};
use crate::scraper::{self, element_text};

/// Column positions of the contest history table.
const CONTEST_COLUMN: usize = 1;
const RANK_COLUMN: usize = 3;
const SOLVED_COLUMN: usize = 4;
const RATING_CHANGE_COLUMN: usize = 5;
const NEW_RATING_COLUMN: usize = 6;

/// Body of `user.info` from the Codeforces API.
#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    status: String,
    #[serde(default)]
    result: Vec<UserInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserInfo {
    rating: Option<i64>,
    max_rating: Option<i64>,
    rank: Option<String>,
    max_rank: Option<String>,
}

/// Rating fields of a Codeforces profile.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct Ratings {
    pub(crate) rating: Rated<i64>,
    pub(crate) max_rating: Rated<i64>,
    pub(crate) rank: Rated<String>,
    pub(crate) max_rank: Rated<String>,
}

impl Ratings {
    fn unrated() -> Self {
        Self {
            rating: Rated::Unrated,
            max_rating: Rated::Unrated,
            rank: Rated::Unrated,
            max_rank: Rated::Unrated,
        }
    }
}

impl From<UserInfo> for Ratings {
    fn from(info: UserInfo) -> Self {
        match (info.rating, info.max_rating, info.rank, info.max_rank) {
            (Some(rating), Some(max_rating), Some(rank), Some(max_rank)) => Self {
                rating: Rated::Rated(rating),
                max_rating: Rated::Rated(max_rating),
                rank: Rated::Rated(rank),
                max_rank: Rated::Rated(max_rank),
            },
            _ => Self::unrated(),
        }
    }
}

/// Fetch the API rating summary and the contest history page concurrently,
/// then build the profile once both have arrived.
#[instrument(skip(client, endpoints))]
pub(crate) async fn get_profile(
    client: &reqwest::Client,
    endpoints: &Endpoints,
    username: &str,
) -> Result<CodeforcesProfile> {
    let info_url = endpoints.codeforces_user_info(username)?;
    let contests_url = endpoints.codeforces_contests(username)?;
    let (info_body, contests_body) = tokio::try_join!(
        scraper::fetch_text(client, &info_url, Platform::Codeforces, username),
        scraper::fetch_text(client, &contests_url, Platform::Codeforces, username),
    )?;

    let ratings = parse_user_info(&info_body)
        .map_err(ProfileError::layout(Platform::Codeforces))?
        .ok_or_else(|| ProfileError::not_found(Platform::Codeforces, username))?;

    let document = Html::parse_document(&contests_body);
    let contests = parse_contests(&document).map_err(ProfileError::layout(Platform::Codeforces))?;

    debug!(
        contests = contests.len(),
        rated = ratings.rating.value().is_some(),
        "parsed codeforces profile"
    );

    Ok(CodeforcesProfile {
        rating: ratings.rating,
        max_rating: ratings.max_rating,
        rank: ratings.rank,
        max_rank: ratings.max_rank,
        contests,
    })
}

/// Read the rating summary from a `user.info` body.
///
/// Returns `Ok(None)` when the API reports a status other than `OK` or no
/// user. A user missing any of the four rating keys has never been rated and
/// gets [`Rated::Unrated`] for all of them.
pub(crate) fn parse_user_info(body: &str) -> LayoutResult<Option<Ratings>> {
    let response: UserInfoResponse = serde_json::from_str(body)?;
    if response.status != "OK" {
        debug!(status = %response.status, "codeforces api rejected handle");
        return Ok(None);
    }
    Ok(response.result.into_iter().next().map(Ratings::from))
}

/// Parse the rows of the contest history table in page order.
pub(crate) fn parse_contests(document: &Html) -> LayoutResult<Vec<ContestEntry>> {
    let table_selector = Selector::parse("table.user-contests-table")?;
    let body_selector = Selector::parse("tbody")?;
    let row_selector = Selector::parse("tr")?;
    let cell_selector = Selector::parse("td")?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or(LayoutError::ElementNotFound {
            context: "contest history table (table.user-contests-table)",
        })?;
    let body = table
        .select(&body_selector)
        .next()
        .ok_or(LayoutError::ElementNotFound {
            context: "contest history table body",
        })?;

    body.select(&row_selector)
        .map(|row| parse_contest_row(row, &cell_selector))
        .collect()
}

fn parse_contest_row(row: ElementRef, cell_selector: &Selector) -> LayoutResult<ContestEntry> {
    let cells = row
        .select(cell_selector)
        .map(|cell| element_text(&cell).trim().to_string())
        .collect_vec();
    if cells.len() <= NEW_RATING_COLUMN {
        return Err(LayoutError::ElementNotFound {
            context: "contest history row: expected 7 columns",
        });
    }

    Ok(ContestEntry {
        contest: cells[CONTEST_COLUMN].clone(),
        rank: cells[RANK_COLUMN].clone(),
        solved: cells[SOLVED_COLUMN].clone(),
        rating_change: cells[RATING_CHANGE_COLUMN].clone(),
        new_rating: cells[NEW_RATING_COLUMN].clone(),
    })
}
