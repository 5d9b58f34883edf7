///! Shared HTTP plumbing for the upstream API clients
use reqwest::Client;
use std::time::Duration;

use crate::error::{WatchError, WatchResult};

const USER_AGENT: &str = concat!("iss-watch/", env!("CARGO_PKG_VERSION"));

/// Build the client used for both upstream requests.
///
/// `timeout` of `None` leaves requests unbounded.
pub fn build_client(timeout: Option<Duration>) -> WatchResult<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| WatchError::Config(format!("Failed to build HTTP client: {}", e)))
}

/// Issue one GET and return the body text. A non-success status is an error.
pub async fn get_text(client: &Client, url: reqwest::Url, service: &'static str) -> WatchResult<String> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| WatchError::Request { service, source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(WatchError::HttpStatus { service, status });
    }

    response
        .text()
        .await
        .map_err(|source| WatchError::Request { service, source })
}

/// Parse a configured endpoint into a URL.
pub fn parse_url(raw: &str, service: &'static str) -> WatchResult<reqwest::Url> {
    reqwest::Url::parse(raw)
        .map_err(|e| WatchError::Config(format!("Invalid {} URL '{}': {}", service, raw, e)))
}
