//! Featured-projects source.
//!
//! [`ProjectSource`] is the seam between the homepage lifecycle and the
//! projects API. [`HttpProjectSource`] talks to the real backend; tests plug
//! in their own sources.

use std::error::Error as StdError;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::types::Project;

/// Path of the projects endpoint, relative to the API base.
pub const PROJECTS_PATH: &str = "/api/projects";

/// Why the featured projects could not be fetched.
///
/// All variants lead to the same placeholder fallback on the page; the
/// distinction only exists for logs.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout, body read error
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
    /// The server answered with a non-2xx status
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },
    /// The body was not a JSON array of projects
    #[error("could not decode project list from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// The source panicked before producing a result
    #[error("project source aborted: {0}")]
    Aborted(String),
}

/// Internal classification of a [`FetchError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Transport failure or timeout
    Network,
    /// Non-2xx response
    Status,
    /// Unreadable body
    Decode,
    /// Panicking source
    Aborted,
}

impl FetchErrorKind {
    /// Label used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            FetchErrorKind::Network => "network",
            FetchErrorKind::Status => "status",
            FetchErrorKind::Decode => "decode",
            FetchErrorKind::Aborted => "aborted",
        }
    }
}

impl FetchError {
    /// Classification for logs.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network { .. } => FetchErrorKind::Network,
            FetchError::Status { .. } => FetchErrorKind::Status,
            FetchError::Decode { .. } => FetchErrorKind::Decode,
            FetchError::Aborted(_) => FetchErrorKind::Aborted,
        }
    }
}

/// Something that can produce the featured project list.
pub trait ProjectSource: Send + Sync {
    /// Fetch featured projects, in the order the API returns them.
    fn fetch_featured(&self) -> impl Future<Output = Result<Vec<Project>, FetchError>> + Send;
}

/// [`ProjectSource`] backed by `GET {api_base}/api/projects?featured=true`.
#[derive(Clone, Debug)]
pub struct HttpProjectSource {
    client: reqwest::Client,
    url: String,
}

impl HttpProjectSource {
    /// Source with a default client. `timeout` of `None` waits indefinitely.
    pub fn new(api_base: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self::with_client(client, api_base))
    }

    /// Source using an existing client.
    pub fn with_client(client: reqwest::Client, api_base: &str) -> Self {
        Self {
            client,
            url: featured_url(api_base),
        }
    }

    /// The featured-projects URL this source requests.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn network(&self, err: reqwest::Error) -> FetchError {
        FetchError::Network {
            url: self.url.clone(),
            source: Box::new(err),
        }
    }
}

/// Full featured-projects URL for an API base such as `http://localhost:5001`.
pub fn featured_url(api_base: &str) -> String {
    format!("{}{PROJECTS_PATH}?featured=true", api_base.trim_end_matches('/'))
}

impl ProjectSource for HttpProjectSource {
    async fn fetch_featured(&self) -> Result<Vec<Project>, FetchError> {
        debug!(url = %self.url, "fetching featured projects");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.network(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.network(e))?;
        let projects: Vec<Project> =
            serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
                url: self.url.clone(),
                source,
            })?;

        debug!(url = %self.url, count = projects.len(), "featured projects received");
        Ok(projects)
    }
}
