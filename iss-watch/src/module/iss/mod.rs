///! ISS position module
///!
///! Fetches the station's current sub-satellite point from Open Notify.

pub mod types;
pub mod parser;
pub mod api_client;

pub use types::IssPosition;
pub use parser::parse_iss_json;
pub use api_client::fetch_iss_position;

/// Service name used in errors and logs
pub const SERVICE: &str = "open-notify";

pub const DEFAULT_ISS_URL: &str = "http://api.open-notify.org/iss-now.json";
