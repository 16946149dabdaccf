//! Shape catalog - occupancy masks for the seven piece kinds
//!
//! Each kind is defined by a boolean matrix in its spawn orientation. The
//! matrix is stored in a fixed 4x4 buffer together with its real dimensions,
//! so shapes are `Copy` and rotating never allocates.
//!
//! Rotation is a plain 90° clockwise transpose-and-reverse applied uniformly
//! to every kind; there is no per-kind rotation centre or kick table.

use crate::types::PieceKind;

/// Largest matrix dimension used by the catalog (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Boolean occupancy mask of a piece in one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    mask: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from row slices. Every row must have the same length
    /// and neither dimension may exceed [`MAX_SHAPE_SIZE`].
    ///
    /// Returns `None` for ragged, oversized or completely empty input.
    pub fn from_rows(rows: &[&[bool]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len())?;
        if height == 0 || height > MAX_SHAPE_SIZE || width == 0 || width > MAX_SHAPE_SIZE {
            return None;
        }
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }

        let mut mask = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            mask[r][..width].copy_from_slice(row);
        }

        let shape = Self {
            rows: height as u8,
            cols: width as u8,
            mask,
        };
        if shape.cells().next().is_none() {
            return None;
        }
        Some(shape)
    }

    /// Number of rows in the matrix.
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns in the matrix.
    pub fn width(&self) -> u8 {
        self.cols
    }

    /// Whether the matrix cell at (row, col) is occupied.
    /// Out-of-matrix coordinates are unoccupied.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.mask[row][col]
    }

    /// Iterate the occupied cells as (row, col) offsets from the anchor.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.mask[r][c])
                .map(move |c| (r as i8, c as i8))
        })
    }

    /// Rotate 90° clockwise.
    ///
    /// An N×M matrix becomes M×N with `rotated[c][N-1-r] = self[r][c]`.
    pub fn rotate_cw(&self) -> Self {
        let n = self.rows as usize;
        let m = self.cols as usize;
        let mut mask = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for r in 0..n {
            for c in 0..m {
                mask[c][n - 1 - r] = self.mask[r][c];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            mask,
        }
    }
}

const X: bool = true;
const O: bool = false;

const I_SHAPE: Shape = Shape {
    rows: 4,
    cols: 4,
    mask: [[O, O, O, O], [O, O, O, O], [X, X, X, X], [O, O, O, O]],
};

const J_SHAPE: Shape = Shape {
    rows: 3,
    cols: 3,
    mask: [[O, O, O, O], [X, O, O, O], [X, X, X, O], [O, O, O, O]],
};

const L_SHAPE: Shape = Shape {
    rows: 3,
    cols: 3,
    mask: [[O, O, O, O], [O, O, X, O], [X, X, X, O], [O, O, O, O]],
};

const O_SHAPE: Shape = Shape {
    rows: 2,
    cols: 2,
    mask: [[X, X, O, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
};

const S_SHAPE: Shape = Shape {
    rows: 3,
    cols: 3,
    mask: [[O, O, O, O], [X, X, O, O], [O, X, X, O], [O, O, O, O]],
};

const T_SHAPE: Shape = Shape {
    rows: 3,
    cols: 3,
    mask: [[O, O, O, O], [O, X, O, O], [X, X, X, O], [O, O, O, O]],
};

const Z_SHAPE: Shape = Shape {
    rows: 3,
    cols: 3,
    mask: [[O, O, O, O], [O, X, X, O], [X, X, O, O], [O, O, O, O]],
};

/// Canonical (spawn) orientation of a piece kind.
pub fn canonical_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}
