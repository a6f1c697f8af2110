//! GitHub repository existence check.
//!
//! The front-matter validator only needs the HTTP status of a single GET, so
//! the network sits behind the one-method [`RepoProbe`] capability.
//! [`GithubProbe`] is the `reqwest` implementation.

use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use thiserror::Error;

use crate::config::{GITHUB_WEB_PREFIX, ProbeConfig};

/// Transport-level failure of a repository lookup.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Unavailable(String),
}

/// Fetches the HTTP status code for a URL.
pub trait RepoProbe: Send + Sync {
    /// Issue one GET request and return the response status.
    ///
    /// Any response, successful or not, is `Ok`; only failures to obtain a
    /// response at all are `Err`.
    fn fetch_status(&self, url: &str) -> impl Future<Output = Result<u16, ProbeError>> + Send;
}

/// Rewrite a `https://github.com/<owner>/<name>` URL to its API endpoint.
///
/// Only the web prefix is replaced; the `<owner>/<name>` suffix is kept
/// verbatim. A URL without the web prefix is returned unchanged.
#[must_use]
pub fn api_url_for(repo: &str, api_base: &str) -> String {
    repo.strip_prefix(GITHUB_WEB_PREFIX)
        .map_or_else(|| repo.to_owned(), |rest| format!("{api_base}{rest}"))
}

/// [`RepoProbe`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct GithubProbe {
    client: Client,
}

impl GithubProbe {
    /// Build a probe with the configured headers and timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &ProbeConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl RepoProbe for GithubProbe {
    async fn fetch_status(&self, url: &str) -> Result<u16, ProbeError> {
        let response = self.client.get(url).send().await?;
        Ok(response.status().as_u16())
    }
}
