//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget libraries and renders into a plain framebuffer that is flushed to
//! the terminal with crossterm.
//!
//! - [`GameView`] is pure: snapshot + leaderboard in, framebuffer out
//! - [`TerminalRenderer`] owns the terminal mode and writes frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use falling_blocks_engine as engine;
pub use falling_blocks_leaderboard as leaderboard;
pub use falling_blocks_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
