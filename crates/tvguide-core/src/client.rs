//! HTTP client for the TVmaze catalog
//!
//! Provides the [`Catalog`] seam used by the selection logic and its
//! reqwest-backed implementation. Every call is a single GET: no
//! retries and no caching at this layer.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{Result, TvGuideError};
use crate::types::{Episode, Show, ShowId};
use crate::url::{BASE_URL, build_episodes_url, build_shows_url, is_http_url};

const USER_AGENT: &str = concat!("tvguide/", env!("CARGO_PKG_VERSION"));

/// Read access to a show catalog
///
/// Implemented by [`TvMazeClient`]; tests drive the browser through
/// in-memory doubles.
pub trait Catalog {
    /// List every show in the catalog index
    fn list_shows(&self) -> impl Future<Output = Result<Vec<Show>>> + Send;

    /// List all episodes of one show
    fn list_episodes(&self, show_id: ShowId) -> impl Future<Output = Result<Vec<Episode>>> + Send;
}

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Catalog API root (default: "https://api.tvmaze.com")
    pub base_url: String,
    /// Request timeout in seconds (default: none, requests may hang)
    pub timeout_secs: Option<u64>,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// HTTP client for the TVmaze REST API
///
/// Handles the two read endpoints the browser needs:
/// - `GET /shows` for the show index
/// - `GET /shows/{id}/episodes` for a show's episodes
///
/// Non-success statuses, transport errors and malformed bodies are all
/// returned as errors.
#[derive(Debug, Clone)]
pub struct TvMazeClient {
    client: reqwest::Client,
    base_url: String,
}

impl TvMazeClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `InvalidUrl` - `base_url` is not an http(s) URL
    /// - `HttpError` - the underlying reqwest client could not be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        if !is_http_url(&config.base_url) {
            return Err(TvGuideError::InvalidUrl(config.base_url));
        }

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(TvGuideError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// API root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a URL and decode its JSON body
    ///
    /// # Errors
    /// - `HttpError` - Network or transport errors
    /// - `Status` - Any non-2xx response
    /// - `ParseError` - Body is not the expected JSON shape
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url = %url, "catalog request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TvGuideError::HttpError)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TvGuideError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(TvGuideError::HttpError)?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Catalog for TvMazeClient {
    async fn list_shows(&self) -> Result<Vec<Show>> {
        let url = build_shows_url(&self.base_url);
        self.fetch_json(&url).await
    }

    async fn list_episodes(&self, show_id: ShowId) -> Result<Vec<Episode>> {
        let url = build_episodes_url(&self.base_url, show_id);
        self.fetch_json(&url).await
    }
}
