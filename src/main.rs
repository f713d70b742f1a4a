//! Terminal runner.
//!
//! Fixed 16 ms cadence: render, poll input until the next tick, then advance
//! gravity and effects. The terminal is restored even when the loop errors.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use neotris::core::{Effects, GameSnapshot, GameState, LockResult};
use neotris::input::{map_key, should_quit};
use neotris::term::{Frame, GameView, TerminalRenderer, Viewport};
use neotris::types::{Phase, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(wall_clock_seed());
    let mut effects = Effects::new(wall_clock_seed());

    let view = GameView::default();
    let mut frame = Frame::new(0, 0);
    let mut snapshot = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snapshot);
        view.render(&snapshot, &effects, Viewport::new(w, h), &mut frame);
        term.draw_swap(&mut frame)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key(key.code) {
                        let was_playing = game.phase() == Phase::Playing;
                        let result = game.apply_action(action);
                        feed_effects(&mut effects, &result);
                        // A fresh game gets a clean screen.
                        if !was_playing && game.phase() == Phase::Playing {
                            effects.clear();
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let result = game.tick(TICK_MS);
            feed_effects(&mut effects, &result);
            effects.tick(TICK_MS);
        }
    }
}

fn feed_effects(effects: &mut Effects, result: &LockResult) {
    if !result.cleared.is_empty() {
        effects.on_lines_cleared(&result.cleared);
    }
}
