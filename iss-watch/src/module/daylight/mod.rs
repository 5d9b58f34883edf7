///! Daylight module
///!
///! Resolves sunrise and sunset hours for the observer via sunrise-sunset.org.

pub mod types;
pub mod parser;
pub mod api_client;

pub use types::DaylightWindow;
pub use parser::{extract_hour, parse_sun_json};
pub use api_client::fetch_daylight_window;

/// Service name used in errors and logs
pub const SERVICE: &str = "sunrise-sunset";

pub const DEFAULT_SUN_URL: &str = "https://api.sunrise-sunset.org/json";
