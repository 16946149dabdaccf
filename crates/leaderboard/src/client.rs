//! Leaderboard client used by the runner at game over.

use tracing::{debug, warn};

use crate::error::LeaderboardError;
use crate::store::{LeaderboardRecord, LeaderboardStore};

/// Longest accepted user id, in characters.
pub const MAX_USER_ID_LEN: usize = 32;

/// Number of records shown by the leaderboard view.
pub const TOP_N: usize = 6;

/// Check a user id before it reaches the store.
pub fn validate_user_id(id: &str) -> Result<(), LeaderboardError> {
    let reason = if id.trim().is_empty() {
        "must not be empty"
    } else if id.chars().count() > MAX_USER_ID_LEN {
        "longer than 32 characters"
    } else {
        return Ok(());
    };
    Err(LeaderboardError::InvalidUserId {
        id: id.to_string(),
        reason,
    })
}

/// Highscore client over a [`LeaderboardStore`].
#[derive(Debug, Clone)]
pub struct Leaderboard<S> {
    store: S,
}

impl<S: LeaderboardStore> Leaderboard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record `score` for `user_id`: update the existing record or insert a
    /// new one. A stored highscore is only replaced by a higher score.
    ///
    /// Returns whether the store is now consistent with the submission.
    /// Failures are logged and never propagate.
    pub fn submit_score(&mut self, user_id: &str, score: u32) -> bool {
        match self.try_submit(user_id, score) {
            Ok(()) => true,
            Err(err) => {
                warn!(user = user_id, score, error = %err, "leaderboard submission failed");
                false
            }
        }
    }

    fn try_submit(&mut self, user_id: &str, score: u32) -> Result<(), LeaderboardError> {
        validate_user_id(user_id)?;
        let id = user_id.trim();

        match self.store.get(id)? {
            Some(existing) if existing.highscore >= score => {
                debug!(user = id, score, best = existing.highscore, "score below highscore");
                Ok(())
            }
            Some(_) => {
                debug!(user = id, score, "highscore updated");
                self.store.update(LeaderboardRecord::new(id, score))
            }
            None => {
                debug!(user = id, score, "highscore inserted");
                self.store.insert(LeaderboardRecord::new(id, score))
            }
        }
    }

    /// Every record, best first; ties ordered by id.
    pub fn ranking(&self) -> Result<Vec<LeaderboardRecord>, LeaderboardError> {
        let mut records = self.store.list()?;
        records.sort_by(|a, b| b.highscore.cmp(&a.highscore).then_with(|| a.id.cmp(&b.id)));
        Ok(records)
    }

    /// The first [`TOP_N`] records of [`Leaderboard::ranking`]. Errors are
    /// logged and yield an empty list.
    pub fn top(&self) -> Vec<LeaderboardRecord> {
        match self.ranking() {
            Ok(mut records) => {
                records.truncate(TOP_N);
                records
            }
            Err(err) => {
                warn!(error = %err, "failed to read leaderboard");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_validate_user_id() {
        assert!(validate_user_id("ada").is_ok());
        assert!(validate_user_id(&"x".repeat(MAX_USER_ID_LEN)).is_ok());
        assert!(matches!(
            validate_user_id("   "),
            Err(LeaderboardError::InvalidUserId { .. })
        ));
        assert!(validate_user_id(&"x".repeat(MAX_USER_ID_LEN + 1)).is_err());
    }

    #[test]
    fn test_submit_inserts_then_keeps_best() {
        let mut board = Leaderboard::new(MemoryStore::new());

        assert!(board.submit_score("ada", 300));
        assert!(board.submit_score("ada", 100));
        assert_eq!(
            board.store().get("ada").unwrap(),
            Some(LeaderboardRecord::new("ada", 300))
        );

        assert!(board.submit_score("ada", 800));
        assert_eq!(board.ranking().unwrap(), vec![LeaderboardRecord::new("ada", 800)]);
    }

    #[test]
    fn test_invalid_user_is_reported_not_stored() {
        let mut board = Leaderboard::new(MemoryStore::new());
        assert!(!board.submit_score("", 500));
        assert!(board.ranking().unwrap().is_empty());
    }

    #[test]
    fn test_ranking_order_and_top() {
        let records = vec![
            LeaderboardRecord::new("carl", 100),
            LeaderboardRecord::new("bea", 900),
            LeaderboardRecord::new("al", 900),
            LeaderboardRecord::new("dee", 300),
            LeaderboardRecord::new("eve", 50),
            LeaderboardRecord::new("fay", 10),
            LeaderboardRecord::new("gus", 0),
        ];
        let board = Leaderboard::new(MemoryStore::with_records(records));

        let ids: Vec<_> = board.ranking().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["al", "bea", "dee", "carl", "eve", "fay", "gus"]);

        let top = board.top();
        assert_eq!(top.len(), TOP_N);
        assert_eq!(top.last().map(|r| r.id.as_str()), Some("fay"));
    }
}
