//! Board module - manages the settled game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds a piece kind.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) with x in 0..10 (left to right), y in 0..20 (top to
//! bottom). Rows above the grid (y < 0) are legal piece territory: they never
//! collide and are never written, which lets pieces spawn partially off the
//! top.

use arrayvec::ArrayVec;

use crate::core::pieces::Shape;
use crate::types::{Cell, PieceKind, BOARD_COLS, BOARD_HEIGHT, BOARD_ROWS, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_COLS * BOARD_ROWS;

/// The settled grid - 10 columns x 20 rows in flat row-major storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * BOARD_COLS + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (x, y); None when out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y); false when out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check a tentative placement of `shape` with its top-left at (x, y).
    ///
    /// Returns true when any occupied shape cell falls outside the grid
    /// horizontally, at or below the bottom, or overlaps a settled cell.
    /// Cells above the visible grid (row < 0) never collide.
    pub fn collides(&self, shape: Shape, x: i8, y: i8) -> bool {
        for (dx, dy) in shape.cells() {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return true;
            }
            if py >= 0 && self.cells[(py as usize) * BOARD_COLS + (px as usize)].is_some() {
                return true;
            }
        }
        false
    }

    /// Write `kind` into every occupied, in-bounds (row >= 0) cell of `shape`.
    ///
    /// Does not validate: the caller guarantees no overlap, by merging only
    /// after a failed one-step-down collision check.
    pub fn merge(&mut self, shape: Shape, x: i8, y: i8, kind: PieceKind) {
        for (dx, dy) in shape.cells() {
            let py = y + dy;
            if py >= 0 {
                self.set(x + dx, py, Some(kind));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_ROWS {
            return false;
        }
        let start = y * BOARD_COLS;
        self.cells[start..start + BOARD_COLS]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// One row of settled cells
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * BOARD_COLS;
        &self.cells[start..start + BOARD_COLS]
    }

    /// Clear all full rows, dropping the rows above them down, and return the
    /// cleared row indices in top-to-bottom order.
    ///
    /// Two-pointer compaction over the flat array; total row count is
    /// unchanged (empty rows are inserted at the top).
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, BOARD_ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let mut write_y = BOARD_ROWS;

        for read_y in (0..BOARD_ROWS).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * BOARD_COLS;
                    let dst = write_y * BOARD_COLS;
                    self.cells.copy_within(src..src + BOARD_COLS, dst);
                }
            }
        }

        for cell in &mut self.cells[..write_y * BOARD_COLS] {
            *cell = None;
        }

        // Scan order was bottom-up; report top-to-bottom.
        cleared_rows.reverse();
        cleared_rows
    }

    /// Copy the grid into a 2D array (for snapshots)
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_COLS]; BOARD_ROWS]) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells (test/diagnostic helper)
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pieces::canonical;

    #[test]
    fn test_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_collides_with_walls_and_floor() {
        let board = Board::new();
        let o = canonical(PieceKind::O);

        assert!(!board.collides(o, 4, 0));
        assert!(board.collides(o, -1, 0));
        // O is 2 wide: x = 8 is the last legal column.
        assert!(!board.collides(o, 8, 0));
        assert!(board.collides(o, 9, 0));
        // O is 2 tall: y = 18 is the last legal row.
        assert!(!board.collides(o, 4, 18));
        assert!(board.collides(o, 4, 19));
    }

    #[test]
    fn test_rows_above_grid_never_collide() {
        let mut board = Board::new();
        // Settle cells in the columns the shape would pass through.
        board.set(4, 0, Some(PieceKind::T));
        board.set(5, 0, Some(PieceKind::T));

        let o = canonical(PieceKind::O);
        // Entirely above row 0: no collision regardless of settled cells below.
        assert!(!board.collides(o, 4, -2));
        // Overlapping row 0 collides.
        assert!(board.collides(o, 4, -1));
    }

    #[test]
    fn test_merge_skips_rows_above_grid() {
        let mut board = Board::new();
        let o = canonical(PieceKind::O);

        board.merge(o, 4, -1, PieceKind::O);
        // Only the bottom half (row 0) lands on the grid.
        assert_eq!(board.get(4, 0), Some(Some(PieceKind::O)));
        assert_eq!(board.get(5, 0), Some(Some(PieceKind::O)));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_clear_full_rows_reports_top_to_bottom() {
        let mut board = Board::new();
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, 17, Some(PieceKind::I));
            board.set(x, 19, Some(PieceKind::I));
        }
        board.set(0, 18, Some(PieceKind::T));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[17, 19]);

        // The survivor from row 18 dropped to the bottom.
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_clear_preserves_row_count() {
        let mut board = Board::new();
        for y in 16..20 {
            for x in 0..BOARD_WIDTH as i8 {
                board.set(x, y, Some(PieceKind::I));
            }
        }
        let cleared = board.clear_full_rows();
        assert_eq!(cleared.len(), 4);
        assert_eq!(board.cells().len(), BOARD_SIZE);
        assert_eq!(board.occupied_count(), 0);
    }
}
