//! Pieces module - tetromino catalog and the matrix rotation scheme
//!
//! Shapes are small boolean matrices (rows x cols, variable size per kind)
//! packed into a `u16` bitmask, row-major. Rotation is
//! transpose-then-reverse-rows, a 90 degree clockwise turn; dimensions swap
//! for non-square matrices. There is no wall-kick correction: a rotation
//! that would collide is rejected by the caller and the shape is unchanged.

use crate::types::PieceKind;

/// Largest dimension any canonical shape or its rotations can have
pub const MAX_SHAPE_DIM: u8 = 4;

/// A piece shape: an immutable boolean matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    mask: u16,
}

/// Pack row bit patterns (MSB-first within `cols`) into a shape
const fn pack(rows: u8, cols: u8, bits: [u8; 4]) -> Shape {
    let mut mask: u16 = 0;
    let mut r = 0;
    while r < rows {
        let mut c = 0;
        while c < cols {
            if (bits[r as usize] >> (cols - 1 - c)) & 1 == 1 {
                mask |= 1 << (r * cols + c);
            }
            c += 1;
        }
        r += 1;
    }
    Shape { rows, cols, mask }
}

const I_SHAPE: Shape = pack(1, 4, [0b1111, 0, 0, 0]);
const O_SHAPE: Shape = pack(2, 2, [0b11, 0b11, 0, 0]);
const T_SHAPE: Shape = pack(2, 3, [0b010, 0b111, 0, 0]);
const S_SHAPE: Shape = pack(2, 3, [0b011, 0b110, 0, 0]);
const Z_SHAPE: Shape = pack(2, 3, [0b110, 0b011, 0, 0]);
const J_SHAPE: Shape = pack(2, 3, [0b100, 0b111, 0, 0]);
const L_SHAPE: Shape = pack(2, 3, [0b001, 0b111, 0, 0]);

/// Get the canonical (spawn) shape for a piece kind
pub const fn canonical(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Catalog color for a piece kind (r, g, b)
pub const fn color(kind: PieceKind) -> (u8, u8, u8) {
    match kind {
        PieceKind::I => (0x00, 0xf5, 0xff),
        PieceKind::O => (0xff, 0xd7, 0x00),
        PieceKind::T => (0xa8, 0x55, 0xf7),
        PieceKind::S => (0x22, 0xc5, 0x5e),
        PieceKind::Z => (0xef, 0x44, 0x44),
        PieceKind::J => (0x3b, 0x82, 0xf6),
        PieceKind::L => (0xf9, 0x73, 0x16),
    }
}

impl Shape {
    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the matrix cell at (row, col) is occupied
    #[inline(always)]
    pub fn filled(&self, row: u8, col: u8) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        (self.mask >> (row * self.cols + col)) & 1 == 1
    }

    /// Iterate occupied cells as (dx, dy) offsets from the shape's top-left
    pub fn cells(self) -> impl Iterator<Item = (i8, i8)> {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols).filter_map(move |c| {
                if self.filled(r, c) {
                    Some((c as i8, r as i8))
                } else {
                    None
                }
            })
        })
    }

    /// Rotate 90 degrees clockwise, producing a new matrix
    ///
    /// new[i][j] = old[rows - 1 - j][i]; dimensions swap.
    pub fn rotated_cw(&self) -> Shape {
        let rows = self.cols;
        let cols = self.rows;
        let mut mask: u16 = 0;
        for i in 0..rows {
            for j in 0..cols {
                if self.filled(self.rows - 1 - j, i) {
                    mask |= 1 << (i * cols + j);
                }
            }
        }
        Shape { rows, cols, mask }
    }
}
