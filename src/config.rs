use reqwest::Url;

use crate::error::{ProfileError, Result};

/// Base URLs the extractors fetch from.
///
/// The defaults point at the live judge sites. Override them to go through a
/// mirror or to point the client at a local test server.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Endpoints {
    /// Root of the Codeforces JSON API, e.g. `https://codeforces.com/api`.
    pub codeforces_api: String,
    pub codeforces_web: String,
    pub spoj: String,
    pub atcoder: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            codeforces_api: "https://codeforces.com/api".to_string(),
            codeforces_web: "https://codeforces.com".to_string(),
            spoj: "https://www.spoj.com".to_string(),
            atcoder: "https://atcoder.jp".to_string(),
        }
    }
}

impl Endpoints {
    /// Use `base` as the root of every site, with the Codeforces API under
    /// `{base}/api`.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            codeforces_api: format!("{base}/api"),
            codeforces_web: base.to_string(),
            spoj: base.to_string(),
            atcoder: base.to_string(),
        }
    }

    pub(crate) fn codeforces_user_info(&self, username: &str) -> Result<Url> {
        let mut url = user_url(&self.codeforces_api, &["user.info"], None)?;
        url.query_pairs_mut().append_pair("handles", username);
        Ok(url)
    }

    pub(crate) fn codeforces_contests(&self, username: &str) -> Result<Url> {
        user_url(&self.codeforces_web, &["contests", "with"], Some(username))
    }

    pub(crate) fn spoj_user(&self, username: &str) -> Result<Url> {
        let mut url = user_url(&self.spoj, &["users"], Some(username))?;
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push("");
        }
        Ok(url)
    }

    pub(crate) fn atcoder_user(&self, username: &str) -> Result<Url> {
        user_url(&self.atcoder, &["users"], Some(username))
    }
}

/// `base` with `segments` appended, followed by `username` as one
/// percent-encoded segment so that `/`, `?` and `#` stay part of the name.
fn user_url(base: &str, segments: &[&str], username: Option<&str>) -> Result<Url> {
    let invalid = |reason: String| ProfileError::InvalidEndpoint {
        url: base.to_owned(),
        reason,
    };
    let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|()| invalid("cannot be a base url".to_string()))?;
        path.pop_if_empty().extend(segments);
        if let Some(username) = username {
            path.push(username);
        }
    }
    Ok(url)
}
