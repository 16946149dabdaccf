//! Game engine for the falling-block puzzle.
//!
//! Owns a [`Game`] session: the board state, score, upcoming queue, gravity
//! timer and confetti. The engine is driven by two inputs:
//!
//! - [`Game::apply`] with a [`types::GameCommand`] from an input source
//! - [`Game::update`] with elapsed milliseconds from the runner's loop
//!
//! It is renderer-agnostic; consumers read a [`GameSnapshot`].
//!
//! ```
//! use falling_blocks_engine::Game;
//!
//! let mut game = Game::with_seed(7);
//! game.start_game();
//! assert!(game.is_playing());
//! game.update(800).unwrap();
//! assert_eq!(game.active().row, 1);
//! ```

pub mod config;
pub mod confetti;
pub mod error;
pub mod game;
pub mod snapshot;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use config::{EngineConfig, SpawnProbe};
pub use confetti::{ConfettiEvent, ConfettiList};
pub use error::EngineError;
pub use game::{Game, LastEvent, Phase};
pub use snapshot::GameSnapshot;
