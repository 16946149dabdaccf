//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::KeyInput`] and provides an
//! [`InputListener`] that turns key transitions into engine commands,
//! including the held-direction repeat and an optional auto-release for
//! terminals without key-release events.

pub mod listener;
pub mod map;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use listener::{Commands, InputListener, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{handle_key_event, map_key_code, should_quit};
