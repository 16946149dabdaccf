//! Board module - the committed grid and collision checks
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Rows are stored top to bottom in a fixed array, so the grid always has exactly
//! `BOARD_HEIGHT` rows of `BOARD_WIDTH` cells.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom), col ranges 0..9

use crate::shapes::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// One board row.
pub type Row = [Cell; BOARD_WIDTH as usize];

/// The game board - 20 rows x 10 columns
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: [Row; BOARD_HEIGHT as usize],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
        }
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<(usize, usize)> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize, col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|(r, c)| self.rows[r][c])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some((r, c)) => {
                self.rows[r][c] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the board and empty
    pub fn is_empty_at(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_some()))
    }

    pub fn is_clear(&self) -> bool {
        self.rows.iter().flatten().all(|cell| cell.is_none())
    }

    /// Write the occupied cells of `shape` anchored at (row, col).
    ///
    /// Cells that fall outside the board are skipped; callers only burn
    /// positions that passed [`has_collision`].
    pub fn burn(&mut self, kind: PieceKind, shape: &Shape, row: i8, col: i8) {
        for (dr, dc) in shape.cells() {
            self.set(row + dr, col + dc, Some(kind));
        }
    }

    /// Remove every full row and pad the top with empty rows.
    ///
    /// Scans bottom to top, compacting surviving rows downwards in place.
    /// Returns the number of rows removed; the height never changes.
    pub fn clear_full_rows(&mut self) -> usize {
        let height = BOARD_HEIGHT as usize;
        let mut write = height;
        let mut cleared = 0;

        for read in (0..height).rev() {
            if self.is_row_full(read) {
                cleared += 1;
            } else {
                write -= 1;
                if write != read {
                    self.rows[write] = self.rows[read];
                }
            }
        }

        for row in &mut self.rows[..write] {
            *row = [None; BOARD_WIDTH as usize];
        }

        cleared
    }

    /// Create from a complete grid of rows
    pub fn from_rows(rows: &[Row; BOARD_HEIGHT as usize]) -> Self {
        Self { rows: *rows }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `shape` anchored at (row, col) overlaps the board boundary or a
/// filled cell.
///
/// Only occupied shape cells are checked, so fully empty rows and columns of
/// the matrix may hang outside the board without colliding.
pub fn has_collision(board: &Board, shape: &Shape, row: i8, col: i8) -> bool {
    shape
        .cells()
        .any(|(dr, dc)| !board.is_empty_at(row + dr, col + dc))
}
