//! Board, collision and reducer tests through the facade crate.

use falling_blocks::core::{
    canonical_shape, has_collision, points_for_clear, reduce, Board, BoardAction, BoardState,
};
use falling_blocks::types::{MoveFlags, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, row: i8, cols: std::ops::Range<i8>) {
    for col in cols {
        assert!(board.set(row, col, Some(PieceKind::Z)));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.rows().len(), BOARD_HEIGHT as usize);

    for row in 0..BOARD_HEIGHT as i8 {
        for col in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(row, col), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_HEIGHT as i8, 0), None);
    assert_eq!(board.get(0, BOARD_WIDTH as i8), None);
}

#[test]
fn test_collision_against_walls_floor_and_cells() {
    let mut board = Board::new();
    let o = canonical_shape(PieceKind::O);

    assert!(!has_collision(&board, &o, 0, 0));
    assert!(!has_collision(&board, &o, 18, 8));
    assert!(has_collision(&board, &o, 0, -1), "left wall");
    assert!(has_collision(&board, &o, 0, 9), "right wall");
    assert!(has_collision(&board, &o, 19, 0), "floor");

    board.set(10, 5, Some(PieceKind::T));
    assert!(has_collision(&board, &o, 9, 4));
    assert!(!has_collision(&board, &o, 8, 4));
}

#[test]
fn test_empty_matrix_rows_may_hang_outside() {
    // The canonical I occupies matrix row 2 only.
    let board = Board::new();
    let i = canonical_shape(PieceKind::I);
    assert!(!has_collision(&board, &i, 17, 0));
    assert!(has_collision(&board, &i, 18, 0));
    assert!(!has_collision(&board, &i, -2, 0));
}

#[test]
fn test_o_commit_clears_single_bottom_row() {
    let mut board = Board::new();
    fill_row(&mut board, 19, 0..8);

    let mut state = reduce(
        &BoardState::new(),
        BoardAction::Start {
            first: PieceKind::O,
        },
    );
    state.board = board;
    state.active.row = 18;
    state.active.col = 8;
    let active = state.active;
    assert!(has_collision(&state.board, &active.shape, active.row + 1, active.col));

    let mut settled = state.board.clone();
    settled.burn(active.kind, &active.shape, active.row, active.col);
    let cleared = settled.clear_full_rows();

    assert_eq!(cleared, 1);
    assert_eq!(points_for_clear(cleared), Ok(100));
    assert_eq!(settled.rows().len(), BOARD_HEIGHT as usize);
    assert_eq!(settled.get(19, 8), Some(Some(PieceKind::O)));
    assert_eq!(settled.get(18, 8), Some(None));

    let next = reduce(
        &state,
        BoardAction::Commit {
            board: settled.clone(),
            next: PieceKind::T,
        },
    );
    assert_eq!(next.board, settled);
    assert_eq!(next.active.kind, PieceKind::T);
    assert_eq!((next.active.row, next.active.col), (0, 3));
}

#[test]
fn test_horizontal_i_stops_at_right_wall() {
    let mut state = reduce(
        &BoardState::new(),
        BoardAction::Start {
            first: PieceKind::I,
        },
    );
    assert_eq!(state.active.col, 3);

    for expected in 4..=6 {
        state = reduce(&state, BoardAction::Move(MoveFlags::right()));
        assert_eq!(state.active.col, expected);
    }

    let blocked = reduce(&state, BoardAction::Move(MoveFlags::right()));
    assert_eq!(blocked, state);
}

#[test]
fn test_drop_and_start_reset() {
    let state = reduce(
        &BoardState::new(),
        BoardAction::Start {
            first: PieceKind::S,
        },
    );
    let dropped = reduce(&state, BoardAction::Drop);
    assert_eq!(dropped.active.row, 1);
    assert_eq!(dropped.active.shape, state.active.shape);

    let restarted = reduce(
        &dropped,
        BoardAction::Start {
            first: PieceKind::L,
        },
    );
    assert!(restarted.board.is_clear());
    assert_eq!(restarted.active.row, 0);
    assert_eq!(restarted.active.kind, PieceKind::L);
}

#[test]
fn test_clear_count_above_four_is_an_error() {
    assert!(points_for_clear(5).is_err());
    assert_eq!(points_for_clear(4), Ok(800));
}
