///! ISS position data types

/// Current sub-satellite point of the station, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IssPosition {
    pub latitude: f64,
    pub longitude: f64,
    /// Unix time the upstream service attached to the fix, if any
    pub timestamp: Option<i64>,
}
