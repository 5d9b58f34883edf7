///! Visibility evaluation
///!
///! Combines the station position, the daylight window and the observer
///! location into one of three fixed outcomes.

pub mod types;
pub mod evaluator;
pub mod outcome;

pub use types::{Clock, EvaluationSettings, NightRule, ObserverLocation, Outcome, DEFAULT_ERROR_MARGIN};
pub use evaluator::{evaluate, is_night, is_night_with_rule, is_overhead, is_overhead_wrapped, Evaluation};
pub use outcome::select_outcome;
