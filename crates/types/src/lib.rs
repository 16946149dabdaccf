//! Shared types and constants for the falling-blocks workspace.
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used from the core rules, the engine, input mapping and rendering alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep of the runner loop |
//! | `NORMAL_TICK_MS` | 800 | Gravity period while falling |
//! | `SLIDING_TICK_MS` | 100 | Re-check period of the sliding grace window |
//! | `FAST_TICK_MS` | 50 | Gravity period while the soft-drop key is held |
//! | `MOVE_REPEAT_MS` | 300 | Repeat period of a held left/right key |
//!
//! # Examples
//!
//! ```
//! use falling_blocks_types::{PieceKind, TickSpeed, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(TickSpeed::Sliding.period_ms(), Some(100));
//! assert_eq!(TickSpeed::Stopped.period_ms(), None);
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed timestep of the runner loop in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity period while a piece is falling normally.
pub const NORMAL_TICK_MS: u32 = 800;

/// Gravity period during the sliding grace window.
pub const SLIDING_TICK_MS: u32 = 100;

/// Gravity period while the soft-drop key is held.
pub const FAST_TICK_MS: u32 = 50;

/// Repeat period of a held left/right key.
pub const MOVE_REPEAT_MS: u32 = 300;

/// Number of kinds shown in the upcoming preview.
pub const UPCOMING_LEN: usize = 3;

/// Points per commit, indexed by the number of rows it cleared.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use falling_blocks_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Single uppercase letter, as shown in the preview panel.
    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;

/// Gravity speed of the engine.
///
/// `Stopped` has no period: a timer configured with it never fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSpeed {
    Normal,
    Sliding,
    Fast,
    Stopped,
}

impl TickSpeed {
    /// Timer period in milliseconds, `None` when stopped.
    pub fn period_ms(&self) -> Option<u32> {
        match self {
            TickSpeed::Normal => Some(NORMAL_TICK_MS),
            TickSpeed::Sliding => Some(SLIDING_TICK_MS),
            TickSpeed::Fast => Some(FAST_TICK_MS),
            TickSpeed::Stopped => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TickSpeed::Normal => "normal",
            TickSpeed::Sliding => "sliding",
            TickSpeed::Fast => "fast",
            TickSpeed::Stopped => "stopped",
        }
    }
}

/// Flags carried by a move request.
///
/// When both directions are set, right wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveFlags {
    pub pressing_left: bool,
    pub pressing_right: bool,
    pub rotating: bool,
}

impl MoveFlags {
    pub fn left() -> Self {
        Self {
            pressing_left: true,
            ..Self::default()
        }
    }

    pub fn right() -> Self {
        Self {
            pressing_right: true,
            ..Self::default()
        }
    }

    pub fn rotate() -> Self {
        Self {
            rotating: true,
            ..Self::default()
        }
    }

    /// Column offset implied by the direction flags.
    pub fn column_offset(&self) -> i8 {
        let mut offset = if self.pressing_left { -1 } else { 0 };
        if self.pressing_right {
            offset = 1;
        }
        offset
    }
}

/// Commands accepted by the game engine.
///
/// Produced by the input listener and by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Reset every piece of session state and begin a new game.
    Start,
    /// Shift and/or rotate the active piece.
    Move(MoveFlags),
    /// Soft-drop key pressed (`true`) or released (`false`).
    SoftDrop(bool),
}

/// Keys the game reacts to, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Start,
}

/// Phase of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Down,
    /// Synthetic key-down generated while a key is held.
    Repeat,
    Up,
}

/// A keyboard event as seen by the input listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub state: KeyState,
}

impl KeyInput {
    pub fn down(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Down,
        }
    }

    pub fn repeat(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Repeat,
        }
    }

    pub fn up(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Up,
        }
    }
}
