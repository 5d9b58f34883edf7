///! Overhead and darkness checks
///!
///! Pure functions only. The current hour is passed in by the caller so
///! nothing here reads the clock or the network.

use super::outcome::select_outcome;
use super::types::{EvaluationSettings, NightRule, ObserverLocation, Outcome};
use crate::module::daylight::DaylightWindow;
use crate::module::iss::IssPosition;

/// Whether `value` lies in `[center - margin, center + margin]`.
fn within(value: f64, center: f64, margin: f64) -> bool {
    (center - margin) <= value && value <= (center + margin)
}

/// Shortest angular distance between two longitudes, in `[0, 180]`.
fn longitude_gap(a: f64, b: f64) -> f64 {
    let gap = (a - b).abs() % 360.0;
    gap.min(360.0 - gap)
}

/// Bounding-box overhead check.
///
/// Each axis is compared independently against `observer ± error_margin`.
/// Longitudes are compared on the raw number line, so a station at 179.0
/// is not overhead of an observer at -179.0.
pub fn is_overhead(iss: &IssPosition, observer: &ObserverLocation, error_margin: f64) -> bool {
    within(iss.latitude, observer.latitude, error_margin)
        && within(iss.longitude, observer.longitude, error_margin)
}

/// Same box as [`is_overhead`] but with the longitude axis wrapping at ±180.
pub fn is_overhead_wrapped(
    iss: &IssPosition,
    observer: &ObserverLocation,
    error_margin: f64,
) -> bool {
    within(iss.latitude, observer.latitude, error_margin)
        && longitude_gap(iss.longitude, observer.longitude) <= error_margin
}

/// Night once the truncated sunset hour has been reached.
pub fn is_night(sunset_hour: f64, current_hour: u32) -> bool {
    i64::from(current_hour) >= sunset_hour.trunc() as i64
}

/// Night check under an explicit [`NightRule`].
pub fn is_night_with_rule(window: &DaylightWindow, current_hour: u32, rule: NightRule) -> bool {
    match rule {
        NightRule::AfterSunset => is_night(window.sunset_hour, current_hour),
        NightRule::UntilSunrise => {
            let sunrise = window.sunrise_hour.trunc() as i64;
            let sunset = window.sunset_hour.trunc() as i64;
            let hour = i64::from(current_hour);
            if sunset >= sunrise {
                hour >= sunset || hour < sunrise
            } else {
                // Both events expressed in a clock where sunset comes first
                hour >= sunset && hour < sunrise
            }
        }
    }
}

/// Everything decided during one check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub overhead: bool,
    pub night: bool,
    pub outcome: Outcome,
}

/// Combine the fetched inputs into an [`Evaluation`].
pub fn evaluate(
    iss: &IssPosition,
    window: &DaylightWindow,
    observer: &ObserverLocation,
    settings: &EvaluationSettings,
    current_hour: u32,
) -> Evaluation {
    let overhead = if settings.wrap_longitude {
        is_overhead_wrapped(iss, observer, settings.error_margin)
    } else {
        is_overhead(iss, observer, settings.error_margin)
    };
    let night = is_night_with_rule(window, current_hour, settings.night_rule);

    Evaluation {
        overhead,
        night,
        outcome: select_outcome(overhead, night),
    }
}
