use thiserror::Error;

use crate::core::CoreError;

/// Fatal engine failures. The current game cannot continue after one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invariant violated during commit: {0}")]
    Invariant(#[from] CoreError),
}
