///! sunrise-sunset.org client
use reqwest::Client;

use super::parser::parse_sun_json;
use super::types::DaylightWindow;
use super::SERVICE;
use crate::error::WatchResult;
use crate::http::{get_text, parse_url};

/// Fetch sunrise and sunset hours for a location.
///
/// Sends `lat`, `lng` and `formatted=0` as query parameters.
pub async fn fetch_daylight_window(
    client: &Client,
    url: &str,
    lat: f64,
    lng: f64,
) -> WatchResult<DaylightWindow> {
    let mut url = parse_url(url, SERVICE)?;
    url.query_pairs_mut()
        .append_pair("lat", &lat.to_string())
        .append_pair("lng", &lng.to_string())
        .append_pair("formatted", "0");

    tracing::info!("Fetching sunrise/sunset for ({}, {})", lat, lng);

    let body = get_text(client, url, SERVICE).await?;
    let window = parse_sun_json(&body)?;

    tracing::info!(
        "Daylight window: sunrise hour {}, sunset hour {}",
        window.sunrise_hour,
        window.sunset_hour
    );

    Ok(window)
}
