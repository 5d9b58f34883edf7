//! Error types for a single ISS visibility check.

/// Result type for check operations
pub type WatchResult<T> = Result<T, WatchError>;

/// Error type for check operations
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request to {service} failed: {source}")]
    Request {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} from {service}")]
    HttpStatus {
        service: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("{service} reported status '{status}'")]
    UpstreamStatus {
        service: &'static str,
        status: String,
    },

    #[error("Unexpected data from {service}: {detail}")]
    DataShape {
        service: &'static str,
        detail: String,
    },
}

impl WatchError {
    pub fn data_shape(service: &'static str, detail: impl Into<String>) -> Self {
        WatchError::DataShape {
            service,
            detail: detail.into(),
        }
    }

    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            WatchError::Config(_) => 2,
            WatchError::Request { .. } => 3,
            WatchError::HttpStatus { .. } | WatchError::UpstreamStatus { .. } => 4,
            WatchError::DataShape { .. } => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_kind() {
        let config = WatchError::Config("bad".to_string());
        let http = WatchError::HttpStatus {
            service: "open-notify",
            status: reqwest::StatusCode::BAD_GATEWAY,
        };
        let upstream = WatchError::UpstreamStatus {
            service: "sunrise-sunset",
            status: "INVALID_REQUEST".to_string(),
        };
        let shape = WatchError::data_shape("open-notify", "missing iss_position");

        assert_eq!(config.exit_code(), 2);
        assert_eq!(http.exit_code(), 4);
        assert_eq!(upstream.exit_code(), 4);
        assert_eq!(shape.exit_code(), 5);
    }

    #[test]
    fn test_display_names_service() {
        let err = WatchError::HttpStatus {
            service: "open-notify",
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        };
        assert_eq!(err.to_string(), "HTTP error 503 Service Unavailable from open-notify");

        let err = WatchError::data_shape("sunrise-sunset", "sunset has no 'T' separator");
        assert_eq!(
            err.to_string(),
            "Unexpected data from sunrise-sunset: sunset has no 'T' separator"
        );
    }
}
