//! Neotris: a falling-block puzzle game.
//!
//! The `core` module is the headless simulation (board, pieces, gravity,
//! scoring, effects); `input` and `term` are the terminal frontend built on
//! crossterm. The simulation is deterministic from its seed and has no
//! terminal dependencies, which is what the integration tests and benches
//! drive directly.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
