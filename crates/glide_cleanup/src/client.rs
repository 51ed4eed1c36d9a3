//! REST client for the cleanup run
//!
//! Thin wrapper over `reqwest` that deletes one collection item at a time
//! and re-fetches it to confirm the delete landed. Rate limiting (429) and
//! server errors (5xx) are retried indefinitely with a linear backoff
//! capped at 8 s; every other non-2xx status is final and gets recorded by
//! the caller instead of retried.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

/// Backoff grows by this much per attempt.
pub const BACKOFF_STEP_MS: u64 = 2000;
/// Longest pause between attempts.
pub const MAX_BACKOFF_MS: u64 = 8000;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Whether a status is worth another attempt.
pub fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Pause before the given (1-based) retry attempt.
pub fn backoff_ms(attempt: u64) -> u64 {
    (BACKOFF_STEP_MS * attempt).min(MAX_BACKOFF_MS)
}

/// Bearer-authenticated client bound to one API base URL.
pub struct CleanupClient {
    http: Client,
    base_url: String,
    token: String,
}

impl CleanupClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn item_url(&self, collection: &str, item: &str) -> String {
        format!("{}/collections/{}/items/{}", self.base_url, collection, item)
    }

    /// Delete one item, retrying through rate limits and server errors.
    /// Returns the first final status.
    pub async fn delete_item(
        &self,
        collection: &str,
        item: &str,
    ) -> Result<StatusCode, ClientError> {
        let url = self.item_url(collection, item);
        let mut attempt: u64 = 0;
        loop {
            attempt += 1;
            let status = self
                .http
                .delete(&url)
                .bearer_auth(&self.token)
                .send()
                .await?
                .status();
            if is_retryable(status) {
                let pause = backoff_ms(attempt);
                warn!(%status, attempt, pause_ms = pause, item, "delete retrying");
                tokio::time::sleep(Duration::from_millis(pause)).await;
                continue;
            }
            debug!(%status, item, "delete resolved");
            return Ok(status);
        }
    }

    /// Fetch the item after deletion; 404 means the delete stuck. Retries
    /// the same statuses as the delete so a rate limit cannot fake a
    /// verification result.
    pub async fn item_status(
        &self,
        collection: &str,
        item: &str,
    ) -> Result<StatusCode, ClientError> {
        let url = self.item_url(collection, item);
        let mut attempt: u64 = 0;
        loop {
            attempt += 1;
            let status = self
                .http
                .get(&url)
                .bearer_auth(&self.token)
                .send()
                .await?
                .status();
            if is_retryable(status) {
                let pause = backoff_ms(attempt);
                warn!(%status, attempt, pause_ms = pause, item, "verify retrying");
                tokio::time::sleep(Duration::from_millis(pause)).await;
                continue;
            }
            return Ok(status);
        }
    }
}
