//! Effects module - ephemeral presentation state
//!
//! Line flashes and burst particles live here, outside the game state: they
//! are spawned from `LockResult` events, advanced by wall-clock time and
//! never influence gameplay. The board compacts immediately on a clear; the
//! flash is what makes the vanished rows linger on screen.

use crate::core::game::ClearedRow;
use crate::core::pieces::color;
use crate::core::rng::SimpleRng;
use crate::types::{BOARD_ROWS, LINE_FLASH_MS};

/// Particles spawned per cleared cell
const PARTICLES_PER_CELL: usize = 3;

/// Particle lifetime (milliseconds)
const PARTICLE_LIFE_MS: f32 = 600.0;

/// Downward acceleration, in cells per second squared
const PARTICLE_GRAVITY: f32 = 30.0;

/// A short white flash over a row that was just cleared
#[derive(Debug, Clone, Copy)]
pub struct LineFlash {
    pub row: usize,
    pub remaining_ms: u32,
}

/// One burst particle, in board-cell coordinates
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    vx: f32,
    vy: f32,
    life_ms: f32,
    pub color: (u8, u8, u8),
}

impl Particle {
    /// Remaining life as a 0..=1 fraction (for fade-out)
    pub fn intensity(&self) -> f32 {
        (self.life_ms / PARTICLE_LIFE_MS).clamp(0.0, 1.0)
    }
}

/// All live ephemeral effects
#[derive(Debug, Clone)]
pub struct Effects {
    flashes: Vec<LineFlash>,
    particles: Vec<Particle>,
    rng: SimpleRng,
}

impl Effects {
    pub fn new(seed: u32) -> Self {
        Self {
            flashes: Vec::new(),
            particles: Vec::with_capacity(128),
            rng: SimpleRng::new(seed),
        }
    }

    pub fn flashes(&self) -> &[LineFlash] {
        &self.flashes
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_idle(&self) -> bool {
        self.flashes.is_empty() && self.particles.is_empty()
    }

    /// Drop everything (on restart)
    pub fn clear(&mut self) {
        self.flashes.clear();
        self.particles.clear();
    }

    /// Spawn a flash per cleared row and a particle burst per vanished cell.
    ///
    /// The rows were captured before the board compacted, so the burst colors
    /// come from the cells that no longer exist.
    pub fn on_lines_cleared(&mut self, cleared: &[ClearedRow]) {
        for row in cleared {
            debug_assert!(row.row < BOARD_ROWS);
            self.flashes.push(LineFlash {
                row: row.row,
                remaining_ms: LINE_FLASH_MS,
            });
            for (x, cell) in row.cells.iter().enumerate() {
                let Some(kind) = cell else { continue };
                for _ in 0..PARTICLES_PER_CELL {
                    self.particles.push(Particle {
                        x: x as f32 + 0.5,
                        y: row.row as f32 + 0.5,
                        vx: (self.rng.next_f32() - 0.5) * 8.0,
                        vy: -2.0 - self.rng.next_f32() * 6.0,
                        life_ms: PARTICLE_LIFE_MS,
                        color: color(*kind),
                    });
                }
            }
        }
    }

    /// Advance all effects by `elapsed_ms` of wall-clock time
    pub fn tick(&mut self, elapsed_ms: u32) {
        for flash in &mut self.flashes {
            flash.remaining_ms = flash.remaining_ms.saturating_sub(elapsed_ms);
        }
        self.flashes.retain(|flash| flash.remaining_ms > 0);

        let dt = elapsed_ms as f32 / 1000.0;
        for p in &mut self.particles {
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            p.vy += PARTICLE_GRAVITY * dt;
            p.life_ms -= elapsed_ms as f32;
        }
        self.particles.retain(|p| p.life_ms > 0.0);
    }
}

impl Default for Effects {
    fn default() -> Self {
        Self::new(1)
    }
}
