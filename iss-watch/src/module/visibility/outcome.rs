use super::types::Outcome;

/// Three-way choice between the fixed outcomes.
pub fn select_outcome(overhead: bool, night: bool) -> Outcome {
    match (overhead, night) {
        (true, true) => Outcome::Visible,
        (true, false) => Outcome::OverheadInDaylight,
        (false, _) => Outcome::NothingToSee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_outcome() {
        assert_eq!(select_outcome(true, true), Outcome::Visible);
        assert_eq!(select_outcome(true, false), Outcome::OverheadInDaylight);
        assert_eq!(select_outcome(false, true), Outcome::NothingToSee);
        assert_eq!(select_outcome(false, false), Outcome::NothingToSee);
    }

    #[test]
    fn test_messages_are_single_lines() {
        for outcome in [Outcome::Visible, Outcome::OverheadInDaylight, Outcome::NothingToSee] {
            assert!(!outcome.message().is_empty());
            assert!(!outcome.message().contains('\n'));
            assert_eq!(outcome.to_string(), outcome.message());
        }
    }
}
