use ::scraper::error::SelectorErrorKind;
use std::num::ParseIntError;

use crate::model::Platform;

/// All ways a profile lookup can fail.
#[derive(thiserror::Error, Debug)]
pub enum ProfileError {
    /// The platform has no user with this name.
    #[error("user {username:?} not found on {platform}")]
    UsernameNotFound { platform: Platform, username: String },

    /// The platform tag is not one of the supported judges.
    #[error("platform not found: {0:?}")]
    PlatformNotFound(String),

    /// The platform is recognized but has no working extractor.
    #[error("no extractor implemented for {0}")]
    NotImplemented(Platform),

    /// A fetched page or payload no longer has the structure the extractor
    /// relies on.
    #[error("{platform} source layout changed: {source}")]
    SourceLayoutChanged {
        platform: Platform,
        source: LayoutError,
    },

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// A configured base URL cannot be turned into a request URL.
    #[error("invalid endpoint \"{url}\": {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },
}

impl ProfileError {
    /// Human-readable message for the `details` field of a failure response.
    pub fn details(&self) -> &'static str {
        match self {
            ProfileError::UsernameNotFound { .. } => "Invalid username",
            ProfileError::PlatformNotFound(_) => "Invalid Platform",
            ProfileError::NotImplemented(_) => "Platform not supported yet",
            ProfileError::SourceLayoutChanged { .. } => "API broken due to site changes",
            ProfileError::Http { .. } | ProfileError::ResponseBody { .. } => {
                "Upstream request failed"
            }
            ProfileError::InvalidEndpoint { .. } => "Invalid endpoint configuration",
        }
    }

    pub(crate) fn not_found(platform: Platform, username: &str) -> Self {
        ProfileError::UsernameNotFound {
            platform,
            username: username.to_owned(),
        }
    }

    pub(crate) fn layout(platform: Platform) -> impl FnOnce(LayoutError) -> Self {
        move |source| ProfileError::SourceLayoutChanged { platform, source }
    }
}

/// Why a page could not be read at the positions an extractor expects.
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    /// An expected HTML element or text segment was not found on the page.
    #[error("expected element not found: {context}")]
    ElementNotFound { context: &'static str },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// Failed to parse an integer from scraped text.
    #[error("failed to parse integer from {text:?}: {source}")]
    IntParse {
        text: String,
        source: ParseIntError,
    },

    /// A JSON payload did not match the expected shape.
    #[error("failed to decode json payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl<'a> From<SelectorErrorKind<'a>> for LayoutError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        LayoutError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;

pub(crate) type LayoutResult<T> = std::result::Result<T, LayoutError>;
