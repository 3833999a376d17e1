use std::str::FromStr;
use std::time::Duration;

use tracing::{debug, instrument};

use crate::config::Endpoints;
use crate::error::{LayoutError, ProfileError, Result};
use crate::model::{Platform, Profile};
use crate::scraper;

/// The main entry point for looking up competitive programming profiles.
///
/// `ProfileClient` wraps a [`reqwest::Client`] and the [`Endpoints`] it
/// fetches from. Every lookup is independent, so one client can serve any
/// number of concurrent calls.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> cp_profile_scraper::Result<()> {
/// use cp_profile_scraper::ProfileClient;
///
/// let client = ProfileClient::new();
/// let profile = client.lookup("codeforces", "uwi").await?;
/// println!("{}", serde_json::to_string(&profile).unwrap());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl ProfileClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: client,
            endpoints: Endpoints::default(),
        }
    }

    /// Create a client whose requests time out after `timeout` and carry
    /// `user_agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_settings(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| ProfileError::Http {
                url: String::new(),
                source: e,
            })?;
        Ok(Self::with_client(client))
    }

    /// Fetch from `endpoints` instead of the live sites.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Look up `username` on the platform named by the tag `platform`
    /// (`"codeforces"`, `"spoj"` or `"atcoder"`).
    ///
    /// The username is sent as a single URL path segment. An empty name, or
    /// `"."` / `".."` which cannot be a path segment, is reported as
    /// [`ProfileError::UsernameNotFound`] without any request.
    ///
    /// # Errors
    ///
    /// [`ProfileError::PlatformNotFound`] for an unknown tag,
    /// [`ProfileError::NotImplemented`] for a recognized platform without an
    /// extractor, otherwise whatever the platform lookup returns.
    #[instrument(skip(self))]
    pub async fn lookup(&self, platform: &str, username: &str) -> Result<Profile> {
        let platform = Platform::from_str(platform)
            .map_err(|_| ProfileError::PlatformNotFound(platform.to_owned()))?;
        self.lookup_platform(platform, username).await
    }

    /// Look up `username` on an already parsed [`Platform`].
    pub async fn lookup_platform(&self, platform: Platform, username: &str) -> Result<Profile> {
        match platform {
            Platform::Codeforces => self.codeforces(username).await,
            Platform::Spoj => self.spoj(username).await,
            Platform::AtCoder => self.atcoder(username).await,
            Platform::InterviewBit => Err(ProfileError::NotImplemented(platform)),
        }
    }

    /// Fetch a Codeforces rating summary and contest history.
    #[instrument(skip(self))]
    pub async fn codeforces(&self, username: &str) -> Result<Profile> {
        ensure_username(Platform::Codeforces, username)?;
        let details =
            scraper::codeforces::get_profile(&self.http, &self.endpoints, username).await?;
        Ok(Profile::new(username, details.into()))
    }

    /// Fetch a SPOJ ranking and problem lists.
    ///
    /// SPOJ answers with status 200 for unknown users, so a page missing the
    /// profile elements is reported as [`ProfileError::UsernameNotFound`].
    #[instrument(skip(self))]
    pub async fn spoj(&self, username: &str) -> Result<Profile> {
        ensure_username(Platform::Spoj, username)?;
        let details = scraper::spoj::get_profile(&self.http, &self.endpoints, username)
            .await
            .map_err(|err| match err {
                ProfileError::SourceLayoutChanged {
                    source: LayoutError::ElementNotFound { context },
                    ..
                } => {
                    debug!(context, "spoj profile elements missing, treating as unknown user");
                    ProfileError::not_found(Platform::Spoj, username)
                }
                other => other,
            })?;
        Ok(Profile::new(username, details.into()))
    }

    /// Fetch an AtCoder rating summary.
    #[instrument(skip(self))]
    pub async fn atcoder(&self, username: &str) -> Result<Profile> {
        ensure_username(Platform::AtCoder, username)?;
        let details = scraper::atcoder::get_profile(&self.http, &self.endpoints, username).await?;
        Ok(Profile::new(username, details.into()))
    }
}

impl Default for ProfileClient {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_username(platform: Platform, username: &str) -> Result<()> {
    if matches!(username, "" | "." | "..") {
        return Err(ProfileError::not_found(platform, username));
    }
    Ok(())
}
