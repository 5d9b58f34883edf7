///! sunrise-sunset.org JSON parser
///!
///! With `formatted=0` the API returns ISO-8601 timestamps:
///! `{"results": {"sunrise": "2024-01-01T06:30:00+00:00", "sunset": "2024-01-01T18:45:00+00:00", ...}, "status": "OK"}`

use serde::Deserialize;

use super::types::DaylightWindow;
use super::SERVICE;
use crate::error::{WatchError, WatchResult};

#[derive(Debug, Deserialize)]
struct SunResults {
    sunrise: Option<String>,
    sunset: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SunResponse {
    /// An empty string when the request was rejected
    results: Option<serde_json::Value>,
    #[serde(default)]
    status: Option<String>,
}

/// Hour component of an ISO-8601 timestamp.
///
/// Takes the text after the `T` up to the first `:`. No timezone
/// normalization: "2024-01-01T18:45:00+02:00" yields 18.0.
pub fn extract_hour(field: &str, timestamp: &str) -> WatchResult<f64> {
    let time = timestamp.split('T').nth(1).ok_or_else(|| {
        WatchError::data_shape(
            SERVICE,
            format!("{} '{}' has no 'T' separator", field, timestamp),
        )
    })?;
    let hour_text = time.split(':').next().unwrap_or(time);

    let hour: f64 = hour_text.trim().parse().map_err(|_| {
        WatchError::data_shape(
            SERVICE,
            format!("{} '{}' has a non-numeric hour", field, timestamp),
        )
    })?;

    if !(0.0..24.0).contains(&hour) {
        return Err(WatchError::data_shape(
            SERVICE,
            format!("{} '{}' has hour {} outside 0-23", field, timestamp, hour),
        ));
    }

    Ok(hour)
}

/// Parse a sunrise-sunset body into a [`DaylightWindow`].
pub fn parse_sun_json(json: &str) -> WatchResult<DaylightWindow> {
    let resp: SunResponse = serde_json::from_str(json)
        .map_err(|e| WatchError::data_shape(SERVICE, format!("invalid JSON: {}", e)))?;

    if let Some(status) = resp.status.as_deref() {
        if status != "OK" {
            return Err(WatchError::UpstreamStatus {
                service: SERVICE,
                status: status.to_string(),
            });
        }
    }

    let results = resp
        .results
        .ok_or_else(|| WatchError::data_shape(SERVICE, "missing 'results'"))?;
    let results: SunResults = serde_json::from_value(results)
        .map_err(|e| WatchError::data_shape(SERVICE, format!("invalid 'results': {}", e)))?;
    let sunrise = results
        .sunrise
        .ok_or_else(|| WatchError::data_shape(SERVICE, "missing 'results.sunrise'"))?;
    let sunset = results
        .sunset
        .ok_or_else(|| WatchError::data_shape(SERVICE, "missing 'results.sunset'"))?;

    Ok(DaylightWindow {
        sunrise_hour: extract_hour("sunrise", &sunrise)?,
        sunset_hour: extract_hour("sunset", &sunset)?,
    })
}
