//! Board state machine - a pure reducer over the committed grid and the
//! active (dropping) piece.
//!
//! [`reduce`] never mutates its input: it returns the next state value. The
//! active piece is kept beside the grid and is only written into it by the
//! engine when a commit happens.

use crate::board::{has_collision, Board};
use crate::shapes::{canonical_shape, Shape};
use crate::types::{MoveFlags, PieceKind, BOARD_WIDTH};

/// The piece currently dropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Board row of the shape matrix's top-left corner.
    pub row: i8,
    /// Board column of the shape matrix's top-left corner.
    pub col: i8,
}

impl ActivePiece {
    /// A piece of `kind` in its canonical orientation at the spawn anchor.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = canonical_shape(kind);
        let (row, col) = spawn_anchor(&shape);
        Self {
            kind,
            shape,
            row,
            col,
        }
    }
}

/// Spawn anchor for a shape: top row, horizontally centred.
pub fn spawn_anchor(shape: &Shape) -> (i8, i8) {
    let col = (BOARD_WIDTH.saturating_sub(shape.width()) / 2) as i8;
    (0, col)
}

/// Authoritative board plus the active piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    pub board: Board,
    pub active: ActivePiece,
}

impl BoardState {
    /// State before any game has started: empty grid, an I piece parked at
    /// the spawn anchor.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: ActivePiece::spawn(PieceKind::I),
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transitions accepted by [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    /// Fresh empty board with `first` at the spawn anchor.
    Start { first: PieceKind },
    /// Move the active piece down one row. The caller has already verified
    /// that row + 1 is free.
    Drop,
    /// Replace the grid with `board` and spawn `next`.
    Commit { board: Board, next: PieceKind },
    /// Shift and/or rotate; rejected silently when the result would collide.
    Move(MoveFlags),
}

/// Apply `action` to `state`, returning the next state.
pub fn reduce(state: &BoardState, action: BoardAction) -> BoardState {
    match action {
        BoardAction::Start { first } => BoardState {
            board: Board::new(),
            active: ActivePiece::spawn(first),
        },
        BoardAction::Drop => {
            let mut next = state.clone();
            next.active.row += 1;
            next
        }
        BoardAction::Commit { board, next } => BoardState {
            board,
            active: ActivePiece::spawn(next),
        },
        BoardAction::Move(flags) => {
            let active = state.active;
            let shape = if flags.rotating {
                active.shape.rotate_cw()
            } else {
                active.shape
            };
            let col = active.col + flags.column_offset();

            let mut next = state.clone();
            if !has_collision(&state.board, &shape, active.row, col) {
                next.active.col = col;
                next.active.shape = shape;
            }
            next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BOARD_HEIGHT;

    fn started(kind: PieceKind) -> BoardState {
        reduce(&BoardState::new(), BoardAction::Start { first: kind })
    }

    #[test]
    fn test_start_is_empty_and_centred() {
        let mut dirty = BoardState::new();
        dirty.board.set(19, 0, Some(PieceKind::Z));
        dirty.active.row = 12;

        let state = reduce(&dirty, BoardAction::Start { first: PieceKind::T });

        assert!(state.board.is_clear());
        assert_eq!(state.active.kind, PieceKind::T);
        assert_eq!(state.active.shape, canonical_shape(PieceKind::T));
        assert_eq!((state.active.row, state.active.col), (0, 3));
    }

    #[test]
    fn test_spawn_column_depends_on_width() {
        assert_eq!(ActivePiece::spawn(PieceKind::I).col, 3);
        assert_eq!(ActivePiece::spawn(PieceKind::L).col, 3);
        assert_eq!(ActivePiece::spawn(PieceKind::O).col, 4);
    }

    #[test]
    fn test_reduce_does_not_mutate_input() {
        let state = started(PieceKind::S);
        let copy = state.clone();
        let _ = reduce(&state, BoardAction::Drop);
        let _ = reduce(&state, BoardAction::Move(MoveFlags::rotate()));
        assert_eq!(state, copy);
    }

    #[test]
    fn test_drop_increments_row_only() {
        let state = started(PieceKind::J);
        let next = reduce(&state, BoardAction::Drop);
        assert_eq!(next.active.row, state.active.row + 1);
        assert_eq!(next.active.col, state.active.col);
        assert_eq!(next.board, state.board);
    }

    #[test]
    fn test_commit_replaces_board_and_spawns_next() {
        let state = reduce(&started(PieceKind::T), BoardAction::Drop);
        let mut board = Board::new();
        board.set(19, 4, Some(PieceKind::T));

        let next = reduce(
            &state,
            BoardAction::Commit {
                board: board.clone(),
                next: PieceKind::O,
            },
        );

        assert_eq!(next.board, board);
        assert_eq!(next.board.rows().len(), BOARD_HEIGHT as usize);
        assert_eq!(next.active, ActivePiece::spawn(PieceKind::O));
    }

    #[test]
    fn test_move_right_until_wall() {
        let mut state = started(PieceKind::I);
        assert_eq!(state.active.col, 3);

        for expected in 4..=6 {
            state = reduce(&state, BoardAction::Move(MoveFlags::right()));
            assert_eq!(state.active.col, expected);
        }

        // Cells would reach column 10.
        let blocked = reduce(&state, BoardAction::Move(MoveFlags::right()));
        assert_eq!(blocked, state);
    }

    #[test]
    fn test_move_left_into_filled_cell_is_rejected() {
        let mut state = started(PieceKind::O);
        state.board.set(0, 3, Some(PieceKind::Z));
        let next = reduce(&state, BoardAction::Move(MoveFlags::left()));
        assert_eq!(next.active.col, 4);
    }

    #[test]
    fn test_both_directions_right_wins() {
        let state = started(PieceKind::T);
        let flags = MoveFlags {
            pressing_left: true,
            pressing_right: true,
            rotating: false,
        };
        let next = reduce(&state, BoardAction::Move(flags));
        assert_eq!(next.active.col, state.active.col + 1);
    }

    #[test]
    fn test_rotation_blocked_keeps_orientation() {
        let mut state = started(PieceKind::I);
        // Vertical I would occupy column 4 rows 0..=3.
        state.board.set(3, 4, Some(PieceKind::L));
        let next = reduce(&state, BoardAction::Move(MoveFlags::rotate()));
        assert_eq!(next.active.shape, canonical_shape(PieceKind::I));

        state.board.set(3, 4, None);
        let next = reduce(&state, BoardAction::Move(MoveFlags::rotate()));
        assert_eq!(next.active.shape, canonical_shape(PieceKind::I).rotate_cw());
    }

    #[test]
    fn test_rotate_and_shift_apply_together_or_not_at_all() {
        let mut state = started(PieceKind::T);
        state.active.col = 7;
        // Rotated T occupies matrix column 0..=1, so shifting right to 8 fits.
        let flags = MoveFlags {
            pressing_right: true,
            rotating: true,
            ..MoveFlags::default()
        };
        let next = reduce(&state, BoardAction::Move(flags));
        assert_eq!(next.active.col, 8);
        assert_eq!(next.active.shape, canonical_shape(PieceKind::T).rotate_cw());

        state.board.set(1, 8, Some(PieceKind::O));
        let next = reduce(&state, BoardAction::Move(flags));
        assert_eq!(next.active, state.active);
    }
}
