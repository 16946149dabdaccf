//! Highscore leaderboard.
//!
//! The game hands `(user_id, score)` to [`Leaderboard::submit_score`] at game
//! over. The client upserts into a [`LeaderboardStore`] and reports success
//! as a `bool`; a failed write is logged and never touches game state.
//!
//! The client is constructed explicitly and passed to whoever needs it.
//!
//! ```
//! use falling_blocks_leaderboard::{Leaderboard, MemoryStore};
//!
//! let mut board = Leaderboard::new(MemoryStore::new());
//! assert!(board.submit_score("ada", 1200));
//! assert_eq!(board.top()[0].highscore, 1200);
//! ```

pub mod client;
pub mod error;
pub mod store;

pub use client::{validate_user_id, Leaderboard, MAX_USER_ID_LEN, TOP_N};
pub use error::LeaderboardError;
pub use store::{JsonFileStore, LeaderboardRecord, LeaderboardStore, MemoryStore};
