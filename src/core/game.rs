//! Game module - the complete session state
//!
//! Ties together board, pieces, RNG and scoring: piece movement and rotation,
//! gravity timing, locking, line clears and the session lifecycle. The host
//! loop drives it through `tick` and `apply_action`; both return a
//! `LockResult` event the presentation layer reacts to.

use arrayvec::ArrayVec;

use crate::core::pieces::{canonical, Shape};
use crate::core::rng::PieceRng;
use crate::core::scoring::{drop_interval_ms, level_for_lines, score_for_clear};
use crate::core::{snapshot::GameSnapshot, Board};
use crate::types::{Cell, GameAction, Phase, PieceKind, BASE_DROP_MS, BOARD_COLS, BOARD_ROWS, BOARD_WIDTH};

/// Spawn column: the shape's top-left lands at (C/2 - 1, 0)
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2 - 1) as i8;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: canonical(kind),
            x: SPAWN_X,
            y: 0,
        }
    }
}

/// One cleared row, captured before the board compacted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearedRow {
    pub row: usize,
    pub cells: [Cell; BOARD_COLS],
}

/// Outcome of a soft drop / hard drop / gravity step
///
/// Ephemeral: consumed by scoring display and the effects layer, then
/// dropped. Holds no gameplay state.
#[derive(Debug, Clone, Default)]
pub struct LockResult {
    pub locked: bool,
    pub game_over: bool,
    pub points: u32,
    pub cleared: ArrayVec<ClearedRow, BOARD_ROWS>,
}

impl LockResult {
    pub fn lines_cleared(&self) -> usize {
        self.cleared.len()
    }
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    next: PieceKind,
    rng: PieceRng,
    phase: Phase,
    score: u32,
    lines: u32,
    level: u32,
    combo: u32,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
}

impl GameState {
    /// Create a new session in the menu phase
    pub fn new(seed: u32) -> Self {
        let mut rng = PieceRng::new(seed);
        let next = rng.next_kind();
        Self {
            board: Board::new(),
            active: None,
            next,
            rng,
            phase: Phase::Menu,
            score: 0,
            lines: 0,
            level: 1,
            combo: 0,
            drop_interval_ms: BASE_DROP_MS,
            drop_timer_ms: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Start (or restart) a fresh game: full reset, first piece spawned.
    ///
    /// The RNG sequence continues across restarts, so a restarted session
    /// sees different pieces while the session as a whole stays reproducible
    /// from its seed.
    pub fn start(&mut self) {
        self.board = Board::new();
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.combo = 0;
        self.drop_interval_ms = BASE_DROP_MS;
        self.drop_timer_ms = 0;

        let first = self.next;
        self.next = self.rng.next_kind();
        // The board is empty, so the spawn cannot be blocked.
        self.active = Some(Tetromino::spawn(first));
        self.phase = Phase::Playing;
    }

    /// Toggle between Playing and Paused; no-op in other phases
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            other => other,
        };
    }

    /// Tentatively offset the active piece by (dx, dy); revert on collision.
    ///
    /// Returns whether the move was applied. Rejections are silent: moving
    /// into a wall is a normal no-op, not an error.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if self.board.collides(active.shape, active.x + dx, active.y + dy) {
            return false;
        }
        self.active = Some(Tetromino {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });
        true
    }

    /// Rotate the active piece clockwise; reject and keep the old shape if
    /// the rotated matrix collides at the current offset (no wall kicks).
    pub fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let rotated = active.shape.rotated_cw();
        if self.board.collides(rotated, active.x, active.y) {
            return false;
        }
        self.active = Some(Tetromino {
            shape: rotated,
            ..active
        });
        true
    }

    /// Move the active piece down one row; lock it if the step collides.
    ///
    /// Resets the gravity accumulator either way (a player soft drop counts
    /// as a gravity step).
    pub fn soft_drop(&mut self) -> LockResult {
        self.drop_timer_ms = 0;
        let Some(active) = self.active else {
            return LockResult::default();
        };
        if !self.board.collides(active.shape, active.x, active.y + 1) {
            self.active = Some(Tetromino {
                y: active.y + 1,
                ..active
            });
            return LockResult::default();
        }
        self.lock(active)
    }

    /// Drop the active piece to its resting row and lock it there.
    ///
    /// The resting row is found by pure simulation; scoring is identical to a
    /// soft drop performed at that row.
    pub fn hard_drop(&mut self) -> LockResult {
        let Some(active) = self.active else {
            return LockResult::default();
        };
        self.active = Some(Tetromino {
            y: self.drop_target(active),
            ..active
        });
        self.soft_drop()
    }

    /// Row the active piece would rest on after a hard drop (read-only)
    pub fn ghost_y(&self) -> Option<i8> {
        self.active.map(|active| self.drop_target(active))
    }

    fn drop_target(&self, piece: Tetromino) -> i8 {
        let mut y = piece.y;
        while !self.board.collides(piece.shape, piece.x, y + 1) {
            y += 1;
        }
        y
    }

    /// Settle the piece, score any cleared rows, promote the lookahead.
    fn lock(&mut self, piece: Tetromino) -> LockResult {
        self.board.merge(piece.shape, piece.x, piece.y, piece.kind);

        let mut result = LockResult {
            locked: true,
            ..Default::default()
        };

        // Capture full rows before compacting so the effects layer can still
        // color itself from the vanished cells.
        for y in 0..BOARD_ROWS {
            if self.board.is_row_full(y) {
                let mut cells = [None; BOARD_COLS];
                cells.copy_from_slice(self.board.row(y));
                result.cleared.push(ClearedRow { row: y, cells });
            }
        }
        let removed = self.board.clear_full_rows();
        debug_assert_eq!(removed.len(), result.cleared.len());

        let n = result.cleared.len();
        if n > 0 {
            self.combo += 1;
            // Points use the level in effect before these lines are added.
            result.points = score_for_clear(n, self.level, self.combo);
            self.score += result.points;
            self.lines += n as u32;
            self.level = level_for_lines(self.lines);
            self.drop_interval_ms = drop_interval_ms(self.level);
        } else {
            self.combo = 0;
        }

        // Promote the lookahead; a blocked spawn tops the board out. The
        // blocked piece is never merged.
        let incoming = Tetromino::spawn(self.next);
        self.next = self.rng.next_kind();
        if self.board.collides(incoming.shape, incoming.x, incoming.y) {
            self.active = None;
            self.phase = Phase::GameOver;
            result.game_over = true;
        } else {
            self.active = Some(incoming);
        }

        result
    }

    /// Advance the gravity clock by `elapsed_ms`.
    ///
    /// When the accumulator exceeds the drop interval, exactly one soft drop
    /// fires and the accumulator resets to 0; dropped frames never queue
    /// multiple drops. No-op outside the Playing phase.
    pub fn tick(&mut self, elapsed_ms: u32) -> LockResult {
        if self.phase != Phase::Playing {
            return LockResult::default();
        }
        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms > self.drop_interval_ms {
            return self.soft_drop();
        }
        LockResult::default()
    }

    /// Apply a discrete action, gated by the lifecycle phase.
    ///
    /// Paused and GameOver accept only their transition commands; everything
    /// else is silently ignored.
    pub fn apply_action(&mut self, action: GameAction) -> LockResult {
        match (self.phase, action) {
            (Phase::Menu, GameAction::Start) => self.start(),
            (Phase::GameOver, GameAction::Start | GameAction::Restart) => self.start(),
            (Phase::Playing, GameAction::Restart) => self.start(),
            (Phase::Playing | Phase::Paused, GameAction::TogglePause) => self.toggle_pause(),
            (Phase::Playing, GameAction::MoveLeft) => {
                self.try_move(-1, 0);
            }
            (Phase::Playing, GameAction::MoveRight) => {
                self.try_move(1, 0);
            }
            (Phase::Playing, GameAction::Rotate) => {
                self.try_rotate();
            }
            (Phase::Playing, GameAction::SoftDrop) => return self.soft_drop(),
            (Phase::Playing, GameAction::HardDrop) => return self.hard_drop(),
            _ => {}
        }
        LockResult::default()
    }

    /// Fill a render snapshot without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active;
        out.ghost_y = self.ghost_y();
        out.next = self.next;
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.combo = self.combo;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
