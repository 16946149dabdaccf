//! Falling Blocks (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the runner, the
//! integration tests and the benchmarks can use
//! `falling_blocks::{core,engine,input,leaderboard,term,types}`.
//! The runner's environment configuration, log setup and per-session
//! bookkeeping live here too.

pub mod config;
pub mod logging;
pub mod session;

pub use falling_blocks_core as core;
pub use falling_blocks_engine as engine;
pub use falling_blocks_input as input;
pub use falling_blocks_leaderboard as leaderboard;
pub use falling_blocks_term as term;
pub use falling_blocks_types as types;

pub use config::AppConfig;
pub use session::{ConfettiClock, ScoreKeeper, CONFETTI_LIFETIME_MS};
