//! Outbound fetch of the user list.
//!
//! DESIGN
//! ======
//! One GET against a fixed URL, no query, headers or auth. Every failure is
//! mapped into one of three `FetchError` kinds and returned; nothing is
//! retried here. `UserSource` is the seam the reload flow depends on, so
//! tests can drive the board without a network. Body parsing is a pure
//! function over text for the same reason.

use std::time::Duration;

use super::record::UserRecord;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by a single fetch attempt. All are terminal for that attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure: DNS, refused connection, timeout, body read.
    #[error("network request failed: {0}")]
    Network(String),

    /// The server answered outside 2xx.
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    /// The body was not a JSON array of objects.
    #[error("response body could not be decoded: {0}")]
    Decode(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// SOURCE TRAIT
// =============================================================================

/// Anything that can produce the current list of users. Enables mocking in tests.
#[async_trait::async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the full, ordered user list.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing why the list could not be produced.
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError>;
}

// =============================================================================
// HTTP SOURCE
// =============================================================================

/// `reqwest`-backed source for a fixed endpoint.
pub struct HttpUserSource {
    http: reqwest::Client,
    url: String,
}

impl HttpUserSource {
    /// Build a source for `url` with the given timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::HttpClientBuild`] if the client cannot be built.
    pub fn new(url: impl Into<String>, request_timeout: Duration, connect_timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| FetchError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url: url.into() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_users(&text)
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Parse a response body into user records, preserving order.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] if the body is not a JSON array of objects.
pub fn parse_users(body: &str) -> Result<Vec<UserRecord>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "fetch_test.rs"]
mod tests;
