//! Core types shared across the crate
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Board dimensions as usize, for indexing and const-generic bounds
pub const BOARD_COLS: usize = BOARD_WIDTH as usize;
pub const BOARD_ROWS: usize = BOARD_HEIGHT as usize;

/// Host frame tick length (milliseconds)
pub const TICK_MS: u32 = 16;

/// Gravity curve: base interval, per-level speedup, floor (milliseconds)
pub const BASE_DROP_MS: u32 = 1000;
pub const DROP_STEP_MS: u32 = 80;
pub const MIN_DROP_MS: u32 = 100;

/// How long cleared rows keep flashing after they were scored (milliseconds)
pub const LINE_FLASH_MS: u32 = 200;

/// Points awarded for clearing n rows in one lock, indexed by n
pub const BASE_POINTS: [u32; 5] = [0, 100, 300, 500, 800];

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }
}

/// Cell on the board (None = empty, Some = settled block of that kind)
pub type Cell = Option<PieceKind>;

/// Discrete player/lifecycle actions
///
/// Each action is a single trigger; repeat-on-hold comes from the host
/// terminal's key repeat, not from this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    TogglePause,
    Start,
    Restart,
}

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Playing,
    Paused,
    GameOver,
}
