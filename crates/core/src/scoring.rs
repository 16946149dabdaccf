//! Scoring module - points per commit
//!
//! The schedule is fixed and non-linear: 0, 100, 300, 500 and 800 points for
//! clearing 0 to 4 rows in one commit. No level multiplier, combos or drop
//! bonuses.

use crate::error::CoreError;
use crate::types::LINE_SCORES;

/// Points awarded for a commit that cleared `rows` rows.
///
/// The tallest piece spans four rows, so more than four cleared rows means the
/// board or the clear logic is broken; that is reported as an error rather
/// than clamped.
pub fn points_for_clear(rows: usize) -> Result<u32, CoreError> {
    LINE_SCORES
        .get(rows)
        .copied()
        .ok_or(CoreError::InvalidClearCount(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_schedule() {
        assert_eq!(points_for_clear(0).unwrap(), 0);
        assert_eq!(points_for_clear(1).unwrap(), 100);
        assert_eq!(points_for_clear(2).unwrap(), 300);
        assert_eq!(points_for_clear(3).unwrap(), 500);
        assert_eq!(points_for_clear(4).unwrap(), 800);
    }

    #[test]
    fn test_impossible_clear_count_is_an_error() {
        assert_eq!(points_for_clear(5), Err(CoreError::InvalidClearCount(5)));
        let err = points_for_clear(20).unwrap_err();
        assert_eq!(err.to_string(), "cleared 20 rows in one commit; at most 4 is possible");
    }
}
