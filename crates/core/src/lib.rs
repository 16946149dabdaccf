//! Core rules - pure, deterministic, and testable
//!
//! This crate holds the rules of the falling-block game with **zero
//! dependencies** on UI, input devices or I/O:
//!
//! - [`shapes`]: occupancy masks for the seven kinds and 90° clockwise rotation
//! - [`board`]: the 10x20 committed grid, collision checks and row clearing
//! - [`board_state`]: the reducer that owns the grid and the active piece
//! - [`rng`]: uniform, seedable piece-kind randomizer
//! - [`timer`]: repeating timer with a mutable period
//! - [`scoring`]: points per commit
//!
//! # Example
//!
//! ```
//! use falling_blocks_core::{reduce, BoardAction, BoardState};
//! use falling_blocks_core::types::{MoveFlags, PieceKind};
//!
//! let state = reduce(&BoardState::new(), BoardAction::Start { first: PieceKind::I });
//! let state = reduce(&state, BoardAction::Move(MoveFlags::right()));
//! assert_eq!(state.active.col, 4);
//!
//! let state = reduce(&state, BoardAction::Drop);
//! assert_eq!(state.active.row, 1);
//! ```

pub mod board;
pub mod board_state;
pub mod error;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod timer;

pub use falling_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::{has_collision, Board, Row};
pub use board_state::{reduce, spawn_anchor, ActivePiece, BoardAction, BoardState};
pub use error::CoreError;
pub use rng::SimpleRng;
pub use scoring::points_for_clear;
pub use shapes::{canonical_shape, Shape};
pub use timer::IntervalTimer;
