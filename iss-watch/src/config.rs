use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{WatchError, WatchResult};
use crate::http::parse_url;
use crate::module::daylight::{self, DEFAULT_SUN_URL};
use crate::module::iss::{self, DEFAULT_ISS_URL};
use crate::module::visibility::{
    Clock, EvaluationSettings, NightRule, ObserverLocation, DEFAULT_ERROR_MARGIN,
};

/// Environment variable naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "ISS_WATCH_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub const LOCAL_LAT_ENV: &str = "LOCAL_LAT";
pub const LOCAL_LNG_ENV: &str = "LOCAL_LNG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    #[serde(default = "default_iss_url")]
    pub iss_url: String,

    #[serde(default = "default_sun_url")]
    pub sun_url: String,

    /// Overhead bounding-box half width, in degrees
    #[serde(default = "default_error_margin")]
    pub error_margin: f64,

    /// Unset means no timeout
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(default)]
    pub night_rule: NightRule,

    #[serde(default)]
    pub clock: Clock,

    #[serde(default)]
    pub wrap_longitude: bool,

    #[serde(default)]
    pub observer: ObserverLocation,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_iss_url() -> String {
    DEFAULT_ISS_URL.to_string()
}

fn default_sun_url() -> String {
    DEFAULT_SUN_URL.to_string()
}

fn default_error_margin() -> f64 {
    DEFAULT_ERROR_MARGIN
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: default_log_dir(),
            iss_url: default_iss_url(),
            sun_url: default_sun_url(),
            error_margin: default_error_margin(),
            request_timeout_secs: None,
            night_rule: NightRule::default(),
            clock: Clock::default(),
            wrap_longitude: false,
            observer: ObserverLocation::default(),
        }
    }
}

impl WatchConfig {
    pub fn from_file(path: impl AsRef<Path>) -> WatchResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WatchError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&content)
            .map_err(|e| WatchError::Config(format!("Failed to parse config file '{}': {}", path.display(), e)))
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load `path` if it exists, otherwise start from defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> WatchResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `LOCAL_LAT` / `LOCAL_LNG` overrides through `lookup`.
    ///
    /// Absent or blank variables leave the current value untouched.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> WatchResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(lat) = read_coordinate(&lookup, LOCAL_LAT_ENV)? {
            self.observer.latitude = lat;
        }
        if let Some(lng) = read_coordinate(&lookup, LOCAL_LNG_ENV)? {
            self.observer.longitude = lng;
        }
        Ok(())
    }

    pub fn validate(&self) -> WatchResult<()> {
        if !self.error_margin.is_finite() || self.error_margin < 0.0 {
            return Err(WatchError::Config(format!(
                "error_margin must be a non-negative number, got {}",
                self.error_margin
            )));
        }
        if !(-90.0..=90.0).contains(&self.observer.latitude) {
            return Err(WatchError::Config(format!(
                "observer latitude {} is outside -90..90",
                self.observer.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.observer.longitude) {
            return Err(WatchError::Config(format!(
                "observer longitude {} is outside -180..180",
                self.observer.longitude
            )));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(WatchError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        parse_url(&self.iss_url, iss::SERVICE)?;
        parse_url(&self.sun_url, daylight::SERVICE)?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn evaluation_settings(&self) -> EvaluationSettings {
        EvaluationSettings {
            error_margin: self.error_margin,
            night_rule: self.night_rule,
            wrap_longitude: self.wrap_longitude,
        }
    }
}

fn read_coordinate<F>(lookup: &F, name: &str) -> WatchResult<Option<f64>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(WatchError::Config(format!(
            "{} must be a number, got '{}'",
            name, raw
        ))),
    }
}

/// Load `path` into the process environment. Variables already set win.
///
/// Returns `false` when the file does not exist.
pub fn load_env_file(path: impl AsRef<Path>) -> WatchResult<bool> {
    let path = path.as_ref();
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(WatchError::Config(format!(
            "Failed to load env file '{}': {}",
            path.display(),
            e
        ))),
    }
}

/// Load the nearest `.env` (current directory or its parents), if any.
pub fn load_dotenv() -> WatchResult<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(WatchError::Config(format!("Failed to load .env: {}", e))),
    }
}

/// Load configuration: the TOML file (if present), then environment overrides.
pub fn read_config() -> WatchResult<WatchConfig> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let mut config = WatchConfig::load_or_default(&path)?;
    config.apply_env_overrides(|name| std::env::var(name).ok())?;
    config.validate()?;

    Ok(config)
}
