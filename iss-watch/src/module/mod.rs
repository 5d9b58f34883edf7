pub mod iss;
pub mod daylight;
pub mod visibility;
