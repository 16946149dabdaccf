//! Leaderboard error types.

use thiserror::Error;

/// Leaderboard errors
#[derive(Debug, Error)]
pub enum LeaderboardError {
    /// Reading or writing the backing file failed
    #[error("leaderboard I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not a valid record list
    #[error("leaderboard JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Insert of an id that is already stored
    #[error("user {0:?} already has a record")]
    DuplicateId(String),

    /// Update of an id that is not stored
    #[error("no record for user {0:?}")]
    UnknownId(String),

    /// User id rejected before reaching the store
    #[error("invalid user id {id:?}: {reason}")]
    InvalidUserId { id: String, reason: &'static str },
}
