//! Core game logic: board, pieces, scoring, gravity and effects.
//!
//! Everything in here is deterministic and free of terminal concerns; the
//! frontend consumes it through `GameSnapshot` and `Effects`.

pub mod board;
pub mod effects;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use board::Board;
pub use effects::Effects;
pub use game::{GameState, LockResult, Tetromino};
pub use pieces::{canonical, color, Shape};
pub use rng::{PieceRng, SimpleRng};
pub use snapshot::GameSnapshot;
