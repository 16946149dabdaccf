//! Errors raised by the core rules.

use thiserror::Error;

/// Invariant violations detected by the core rules.
///
/// These indicate a logic defect rather than bad input and end the current
/// game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("cleared {0} rows in one commit; at most 4 is possible")]
    InvalidClearCount(usize),
}
