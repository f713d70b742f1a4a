//! RNG module - deterministic piece generation
//!
//! Pieces are drawn uniformly at random from the seven kinds on every draw
//! (no bag). A simple LCG keeps sessions reproducible from a seed, which the
//! tests and the restart path rely on.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Generate random f32 in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

/// Uniform random piece source
#[derive(Debug, Clone)]
pub struct PieceRng {
    rng: SimpleRng,
}

impl PieceRng {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize]
    }

    /// Current RNG state (for restarting with the ongoing sequence)
    pub fn state(&self) -> u32 {
        self.rng.state
    }
}

impl Default for PieceRng {
    fn default() -> Self {
        Self::new(1)
    }
}
