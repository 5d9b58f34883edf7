///! Open Notify client for the current ISS position
use reqwest::Client;

use super::parser::parse_iss_json;
use super::types::IssPosition;
use super::SERVICE;
use crate::error::WatchResult;
use crate::http::{get_text, parse_url};

/// Fetch the current station position.
///
/// A non-success HTTP status fails immediately. There is no retry.
pub async fn fetch_iss_position(client: &Client, url: &str) -> WatchResult<IssPosition> {
    tracing::info!("Fetching ISS position from {}", url);

    let url = parse_url(url, SERVICE)?;
    let body = get_text(client, url, SERVICE).await?;
    let position = parse_iss_json(&body)?;

    tracing::info!(
        "ISS position: lat {}, lng {} (timestamp {:?})",
        position.latitude,
        position.longitude,
        position.timestamp
    );

    Ok(position)
}
