//! HTTP client abstraction for search-engine pings.
//!
//! The trait allows dependency injection so tests can run without network
//! access; [`ReqwestClient`] is the production implementation.

use crate::error::SitemapError;

/// Response from one ping request.
#[derive(Debug, Clone)]
pub struct PingResponse {
    pub status: u16,
    pub body: String,
}

/// Capability for issuing blocking HTTP GET requests.
///
/// Implementations return `Ok` for any HTTP status the server answers with;
/// `Err` is reserved for transport failures (DNS, connect, timeout). Callers
/// must tolerate either without aborting unrelated work.
pub trait HttpClient {
    fn get(&self, url: &str) -> Result<PingResponse, SitemapError>;
}

/// Real HTTP client backed by `reqwest::blocking`.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("sitemapper/", env!("CARGO_PKG_VERSION"));

impl ReqwestClient {
    /// Create a client with the default 30-second timeout.
    pub fn new() -> Result<Self, SitemapError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, SitemapError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SitemapError::Http(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<PingResponse, SitemapError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| SitemapError::Http(format!("GET {url} failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| SitemapError::Http(format!("failed to read response from {url}: {e}")))?;

        Ok(PingResponse { status, body })
    }
}
