///! Visibility evaluation types

use serde::{Deserialize, Serialize};

/// Fixed observer position, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverLocation {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

impl Default for ObserverLocation {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

/// How "night" is decided from the daylight window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NightRule {
    /// Night for the rest of the calendar day once the sunset hour is reached.
    /// The sunrise hour is ignored.
    #[default]
    AfterSunset,
    /// Night from the sunset hour until the sunrise hour, wrapping past midnight.
    UntilSunrise,
}

/// Wall clock used for the current hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Clock {
    #[default]
    Local,
    Utc,
}

/// Tuning knobs for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationSettings {
    /// Bounding-box half width in degrees
    pub error_margin: f64,
    pub night_rule: NightRule,
    /// Compare longitudes on the circle instead of on the raw number line
    pub wrap_longitude: bool,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            error_margin: DEFAULT_ERROR_MARGIN,
            night_rule: NightRule::AfterSunset,
            wrap_longitude: false,
        }
    }
}

pub const DEFAULT_ERROR_MARGIN: f64 = 5.0;

/// Result of one check. Each variant maps to one fixed line of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Overhead and dark
    Visible,
    /// Overhead but the sun is still up
    OverheadInDaylight,
    /// Not overhead
    NothingToSee,
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Visible => "The ISS is overhead, look up!",
            Outcome::OverheadInDaylight => {
                "The ISS is overhead but you probably won't see it, the sun is still up."
            }
            Outcome::NothingToSee => "Nothing to look at yet.",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
