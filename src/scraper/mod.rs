pub(crate) mod atcoder;
pub(crate) mod codeforces;
pub(crate) mod spoj;

use std::num::ParseIntError;
use std::str::FromStr;

use ::scraper::ElementRef;
use reqwest::Url;
use tracing::debug;

use crate::error::{LayoutError, LayoutResult, ProfileError, Result};
use crate::model::Platform;

/// Fetch a URL and return its body as text.
///
/// A non-success status means the judge has no such user, so it is reported
/// as [`ProfileError::UsernameNotFound`] for `platform` and `username`.
pub(crate) async fn fetch_text(
    client: &reqwest::Client,
    url: &Url,
    platform: Platform,
    username: &str,
) -> Result<String> {
    debug!(%url, "fetching page");

    let response = client.get(url.clone()).send().await.map_err(|e| ProfileError::Http {
        url: url.to_string(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        debug!(%url, %status, "unexpected status");
        return Err(ProfileError::not_found(platform, username));
    }

    response.text().await.map_err(|e| ProfileError::ResponseBody {
        url: url.to_string(),
        source: e,
    })
}

/// Concatenated text of `element` and all its descendants, untrimmed.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect()
}

/// Parse an integer from scraped text, ignoring surrounding whitespace.
pub(crate) fn parse_int<T>(text: &str) -> LayoutResult<T>
where
    T: FromStr<Err = ParseIntError>,
{
    let text = text.trim();
    text.parse().map_err(|e| LayoutError::IntParse {
        text: text.to_owned(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use ::scraper::{Html, Selector};

    use super::*;

    #[test]
    fn test_parse_int_trims() {
        assert_eq!(parse_int::<u32>("  1542\n").unwrap(), 1542);
        assert_eq!(parse_int::<i64>("-12").unwrap(), -12);
    }

    #[test]
    fn test_parse_int_reports_text() {
        let err = parse_int::<u32>(" 12th ").unwrap_err();
        assert!(
            matches!(&err, LayoutError::IntParse { text, .. } if text == "12th"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_element_text_keeps_whitespace() {
        let html = Html::parse_fragment("<p>Joined <b>March</b> 2015 </p>");
        let selector = Selector::parse("p").unwrap();
        let p = html.select(&selector).next().unwrap();
        assert_eq!(element_text(&p), "Joined March 2015 ");
    }
}
