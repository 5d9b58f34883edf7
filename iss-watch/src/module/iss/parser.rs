///! Open Notify `iss-now.json` parser
///!
///! Expected body:
///! `{"iss_position": {"latitude": "-12.3", "longitude": "45.6"}, "timestamp": 1700000000, "message": "success"}`

use serde::Deserialize;

use super::types::IssPosition;
use super::SERVICE;
use crate::error::{WatchError, WatchResult};

/// Coordinates arrive as numeric strings, but plain numbers are accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCoordinate {
    Number(f64),
    Text(String),
}

impl RawCoordinate {
    fn to_degrees(&self, field: &str) -> WatchResult<f64> {
        let value = match self {
            RawCoordinate::Number(n) => *n,
            RawCoordinate::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                WatchError::data_shape(SERVICE, format!("{} '{}' is not a number", field, s))
            })?,
        };
        if !value.is_finite() {
            return Err(WatchError::data_shape(
                SERVICE,
                format!("{} '{}' is not finite", field, value),
            ));
        }
        Ok(value)
    }
}

#[derive(Debug, Deserialize)]
struct RawIssPosition {
    latitude: Option<RawCoordinate>,
    longitude: Option<RawCoordinate>,
}

#[derive(Debug, Deserialize)]
struct IssNowResponse {
    iss_position: Option<RawIssPosition>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    timestamp: Option<i64>,
}

/// Parse an `iss-now.json` body into an [`IssPosition`].
pub fn parse_iss_json(json: &str) -> WatchResult<IssPosition> {
    let resp: IssNowResponse = serde_json::from_str(json)
        .map_err(|e| WatchError::data_shape(SERVICE, format!("invalid JSON: {}", e)))?;

    if let Some(message) = resp.message.as_deref() {
        if message != "success" {
            return Err(WatchError::UpstreamStatus {
                service: SERVICE,
                status: message.to_string(),
            });
        }
    }

    let raw = resp
        .iss_position
        .ok_or_else(|| WatchError::data_shape(SERVICE, "missing 'iss_position'"))?;

    let latitude = raw
        .latitude
        .ok_or_else(|| WatchError::data_shape(SERVICE, "missing 'iss_position.latitude'"))?
        .to_degrees("latitude")?;
    let longitude = raw
        .longitude
        .ok_or_else(|| WatchError::data_shape(SERVICE, "missing 'iss_position.longitude'"))?
        .to_degrees("longitude")?;

    Ok(IssPosition {
        latitude,
        longitude,
        timestamp: resp.timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string_coordinates() {
        let pos = parse_iss_json(
            r#"{"iss_position": {"latitude": "10.0", "longitude": "12.0"}}"#,
        )
        .unwrap();
        assert_eq!(pos.latitude, 10.0);
        assert_eq!(pos.longitude, 12.0);
        assert_eq!(pos.timestamp, None);
    }

    #[test]
    fn test_parse_full_open_notify_body() {
        let body = r#"{
            "message": "success",
            "timestamp": 1718000000,
            "iss_position": {"longitude": "-73.9249", "latitude": "-51.3120"}
        }"#;
        let pos = parse_iss_json(body).unwrap();
        // Fields are read by name, so key order in the body does not matter
        assert_eq!(pos.latitude, -51.3120);
        assert_eq!(pos.longitude, -73.9249);
        assert_eq!(pos.timestamp, Some(1718000000));
    }

    #[test]
    fn test_parse_numeric_coordinates() {
        let pos = parse_iss_json(r#"{"iss_position": {"latitude": 50.5, "longitude": -60}}"#)
            .unwrap();
        assert_eq!(pos.latitude, 50.5);
        assert_eq!(pos.longitude, -60.0);
    }

    #[test]
    fn test_missing_position_is_data_shape_error() {
        let err = parse_iss_json(r#"{"message": "success"}"#).unwrap_err();
        assert!(matches!(err, WatchError::DataShape { .. }));
        assert!(err.to_string().contains("iss_position"));
    }

    #[test]
    fn test_missing_longitude_is_data_shape_error() {
        let err = parse_iss_json(r#"{"iss_position": {"latitude": "1.0"}}"#).unwrap_err();
        assert!(err.to_string().contains("longitude"));
    }

    #[test]
    fn test_non_numeric_coordinate() {
        let err =
            parse_iss_json(r#"{"iss_position": {"latitude": "north", "longitude": "1.0"}}"#)
                .unwrap_err();
        assert!(matches!(err, WatchError::DataShape { .. }));
        assert!(err.to_string().contains("north"));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_iss_json("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, WatchError::DataShape { .. }));
    }

    #[test]
    fn test_failure_message_is_upstream_status() {
        let err = parse_iss_json(r#"{"message": "failure"}"#).unwrap_err();
        match err {
            WatchError::UpstreamStatus { status, .. } => assert_eq!(status, "failure"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
