//! Snapshot module - read-only view of the session for rendering
//!
//! The render loop fills one snapshot per frame via `GameState::snapshot_into`
//! and never touches the live state, so a frame is internally consistent even
//! while input and gravity mutate the session between frames.

use crate::core::game::Tetromino;
use crate::types::{Cell, Phase, PieceKind, BOARD_COLS, BOARD_ROWS};

/// Everything a frontend needs to draw one frame
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_COLS]; BOARD_ROWS],
    pub active: Option<Tetromino>,
    pub ghost_y: Option<i8>,
    pub next: PieceKind,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub combo: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    /// Kind of the active piece covering (x, y), if any
    pub fn active_covers(&self, x: i8, y: i8) -> Option<PieceKind> {
        let piece = self.active?;
        for (dx, dy) in piece.shape.cells() {
            if piece.x + dx == x && piece.y + dy == y {
                return Some(piece.kind);
            }
        }
        None
    }

    /// Whether the ghost outline covers (x, y).
    ///
    /// Cells also covered by the active piece itself are excluded, so the
    /// ghost disappears under the piece as it approaches its resting row.
    pub fn ghost_covers(&self, x: i8, y: i8) -> bool {
        let (Some(piece), Some(ghost_y)) = (self.active, self.ghost_y) else {
            return false;
        };
        if self.active_covers(x, y).is_some() {
            return false;
        }
        piece
            .shape
            .cells()
            .any(|(dx, dy)| piece.x + dx == x && ghost_y + dy == y)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_COLS]; BOARD_ROWS],
            active: None,
            ghost_y: None,
            next: PieceKind::I,
            score: 0,
            lines: 0,
            level: 1,
            combo: 0,
            phase: Phase::Menu,
        }
    }
}
