///! Daylight window types

/// Sunrise and sunset for the observer, reduced to whole hours.
///
/// Each value is the hour digits of the upstream timestamp as a float.
/// Minutes, seconds and the UTC offset are dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaylightWindow {
    pub sunrise_hour: f64,
    pub sunset_hour: f64,
}
