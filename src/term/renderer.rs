//! Terminal backend: raw mode lifecycle and frame flushing.
//!
//! Draws row-diffed frames: only rows that changed since the previous frame
//! are re-emitted, which keeps per-frame output small at the 16 ms cadence.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::term::fb::{Frame, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<Frame>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint everything (after a resize)
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Flush a frame, then swap it into internal state.
    ///
    /// The caller keeps one `Frame` and passes it in every frame; the swap
    /// hands back the previous buffer so neither side clones.
    pub fn draw_swap(&mut self, frame: &mut Frame) -> Result<()> {
        let full = match &self.prev {
            Some(prev) => (prev.width(), prev.height()) != (frame.width(), frame.height()),
            None => true,
        };

        if full {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let mut style: Option<Style> = None;
        for y in 0..frame.height() {
            let unchanged = !full
                && self
                    .prev
                    .as_ref()
                    .is_some_and(|prev| rows_equal(prev, frame, y));
            if unchanged {
                continue;
            }
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..frame.width() {
                let glyph = frame.get(x, y).unwrap_or_default();
                if style != Some(glyph.style) {
                    self.apply_style(glyph.style)?;
                    style = Some(glyph.style);
                }
                self.stdout.queue(Print(glyph.ch))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        match self.prev.as_mut() {
            Some(prev) => std::mem::swap(prev, frame),
            None => self.prev = Some(frame.clone()),
        }
        Ok(())
    }

    fn apply_style(&mut self, style: Style) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(SetForegroundColor(to_color(style.fg)))?;
        self.stdout.queue(SetBackgroundColor(to_color(style.bg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn rows_equal(a: &Frame, b: &Frame, y: u16) -> bool {
    (0..a.width()).all(|x| a.get(x, y) == b.get(x, y))
}
