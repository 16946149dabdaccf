use arrayvec::ArrayVec;

use crate::confetti::ConfettiEvent;
use crate::core::{ActivePiece, Board};
use crate::types::{PieceKind, TickSpeed, UPCOMING_LEN};

/// Read-only view of a game for rendering.
///
/// `board` is derived: while playing it already contains the active piece.
/// It is never the engine's authoritative grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: Option<ActivePiece>,
    pub is_playing: bool,
    pub is_committing: bool,
    pub game_over: bool,
    pub score: u32,
    /// Next piece to drop first.
    pub upcoming: ArrayVec<PieceKind, UPCOMING_LEN>,
    pub tick_speed: TickSpeed,
    pub confetti: Vec<ConfettiEvent>,
}

impl GameSnapshot {
    /// Confetti events that have not been retired yet.
    pub fn live_confetti(&self) -> impl Iterator<Item = &ConfettiEvent> {
        self.confetti.iter().filter(|e| e.alive)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: Board::new(),
            active: None,
            is_playing: false,
            is_committing: false,
            game_over: false,
            score: 0,
            upcoming: ArrayVec::new(),
            tick_speed: TickSpeed::Stopped,
            confetti: Vec::new(),
        }
    }
}
