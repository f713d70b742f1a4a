//! GameView: maps a `GameSnapshot` plus live effects into a frame.
//!
//! Pure (no I/O), so the whole presentation layer is unit-testable. The view
//! draws the settled board, the ghost outline, the active piece, line
//! flashes and particles, a side panel, and the phase overlays.

use crate::core::pieces::{canonical, color};
use crate::core::{Effects, GameSnapshot};
use crate::term::fb::{Frame, Glyph, Rgb, Style};
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: Rgb = Rgb::new(18, 18, 28);
const BLOCK: char = '█';
const GHOST: char = '░';
const PARTICLE: char = '•';

pub struct GameView {
    /// Board cell width in terminal columns (2 compensates glyph aspect)
    cell_w: u16,
    /// Board cell height in terminal rows
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render one frame into `frame`, resizing it to the viewport
    pub fn render(&self, snap: &GameSnapshot, effects: &Effects, viewport: Viewport, frame: &mut Frame) {
        frame.resize(viewport.width, viewport.height);
        frame.clear(Glyph::default());

        let well_w = BOARD_WIDTH as u16 * self.cell_w;
        let well_h = BOARD_HEIGHT as u16 * self.cell_h;
        let frame_w = well_w + 2;
        let frame_h = well_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        frame.fill_rect(
            start_x + 1,
            start_y + 1,
            well_w,
            well_h,
            ' ',
            Style::fg(Rgb::new(70, 70, 85)).on(WELL_BG),
        );
        self.draw_border(frame, start_x, start_y, frame_w, frame_h);

        // Settled cells, with a faint grid dot for empty ones.
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                match snap.board[y as usize][x as usize] {
                    Some(kind) => self.draw_cell(frame, start_x, start_y, x, y, kind),
                    None => self.cell_rect(
                        frame,
                        start_x,
                        start_y,
                        x,
                        y,
                        '·',
                        Style::fg(Rgb::new(55, 55, 70)).on(WELL_BG).dim(),
                    ),
                }
            }
        }

        // Ghost under the active piece.
        if let (Some(active), Some(ghost_y)) = (snap.active, snap.ghost_y) {
            for (dx, dy) in active.shape.cells() {
                let (x, y) = (active.x + dx, ghost_y + dy);
                if snap.ghost_covers(x, y) {
                    self.cell_rect(
                        frame,
                        start_x,
                        start_y,
                        x,
                        y,
                        GHOST,
                        Style::fg(Rgb::from(color(active.kind)).scaled(0.45)).on(WELL_BG).dim(),
                    );
                }
            }
        }

        if let Some(active) = snap.active {
            for (dx, dy) in active.shape.cells() {
                let (x, y) = (active.x + dx, active.y + dy);
                if y >= 0 {
                    self.draw_cell(frame, start_x, start_y, x, y, active.kind);
                }
            }
        }

        self.draw_effects(frame, effects, start_x, start_y);
        self.draw_side_panel(frame, snap, viewport, start_x, start_y, frame_w);

        match snap.phase {
            Phase::Menu => {
                self.overlay(frame, start_x, start_y, frame_w, frame_h, -1, "NEOTRIS");
                self.overlay(frame, start_x, start_y, frame_w, frame_h, 1, "ENTER TO START");
            }
            Phase::Paused => {
                self.overlay(frame, start_x, start_y, frame_w, frame_h, 0, "PAUSED");
            }
            Phase::GameOver => {
                self.overlay(frame, start_x, start_y, frame_w, frame_h, -1, "GAME OVER");
                let line = format!("SCORE {}", snap.score);
                self.overlay(frame, start_x, start_y, frame_w, frame_h, 1, &line);
                self.overlay(frame, start_x, start_y, frame_w, frame_h, 3, "ENTER TO RESTART");
            }
            Phase::Playing => {}
        }
    }

    fn draw_border(&self, frame: &mut Frame, x: u16, y: u16, w: u16, h: u16) {
        let style = Style::fg(Rgb::new(200, 200, 200));
        frame.put_char(x, y, '┌', style);
        frame.put_char(x + w - 1, y, '┐', style);
        frame.put_char(x, y + h - 1, '└', style);
        frame.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            frame.put_char(x + dx, y, '─', style);
            frame.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            frame.put_char(x, y + dy, '│', style);
            frame.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_cell(&self, frame: &mut Frame, start_x: u16, start_y: u16, x: i8, y: i8, kind: PieceKind) {
        self.cell_rect(
            frame,
            start_x,
            start_y,
            x,
            y,
            BLOCK,
            Style::fg(Rgb::from(color(kind))).on(WELL_BG).bold(),
        );
    }

    fn cell_rect(
        &self,
        frame: &mut Frame,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        ch: char,
        style: Style,
    ) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = start_x + 1 + x as u16 * self.cell_w;
        let py = start_y + 1 + y as u16 * self.cell_h;
        frame.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_effects(&self, frame: &mut Frame, effects: &Effects, start_x: u16, start_y: u16) {
        for flash in effects.flashes() {
            let style = Style::fg(Rgb::new(255, 255, 255)).on(WELL_BG).bold();
            for x in 0..BOARD_WIDTH as i8 {
                self.cell_rect(frame, start_x, start_y, x, flash.row as i8, BLOCK, style);
            }
        }
        for p in effects.particles() {
            let (x, y) = (p.x.floor() as i32, p.y.floor() as i32);
            if x < 0 || x >= BOARD_WIDTH as i32 || y < 0 || y >= BOARD_HEIGHT as i32 {
                continue;
            }
            let px = start_x + 1 + x as u16 * self.cell_w;
            let py = start_y + 1 + y as u16 * self.cell_h;
            let style = Style::fg(Rgb::from(p.color).scaled(p.intensity())).on(WELL_BG);
            frame.put_char(px, py, PARTICLE, style);
        }
    }

    fn draw_side_panel(
        &self,
        frame: &mut Frame,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = Style::fg(Rgb::new(220, 220, 220)).bold();
        let value = Style::fg(Rgb::new(180, 180, 190));

        let mut y = start_y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
            ("COMBO", snap.combo),
        ] {
            frame.put_str(panel_x, y, name, label);
            frame.put_str(panel_x, y + 1, &n.to_string(), value);
            y = y.saturating_add(3);
        }

        frame.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let shape = canonical(snap.next);
        let style = Style::fg(Rgb::from(color(snap.next))).bold();
        for (dx, dy) in shape.cells() {
            frame.fill_rect(
                panel_x + dx as u16 * self.cell_w,
                y + dy as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                BLOCK,
                style,
            );
        }
    }

    fn overlay(
        &self,
        frame: &mut Frame,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        dy: i16,
        text: &str,
    ) {
        let mid = start_y.saturating_add(frame_h / 2).saturating_add_signed(dy);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        frame.put_str(x, mid, text, Style::fg(Rgb::new(255, 255, 255)).bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::Tetromino;
    use crate::core::Effects;

    fn render_default(snap: &GameSnapshot) -> Frame {
        let mut frame = Frame::new(0, 0);
        GameView::default().render(snap, &Effects::default(), Viewport::new(80, 30), &mut frame);
        frame
    }

    // Default view on an 80x30 viewport: well interior starts at (30, 5),
    // each cell is 2 columns wide.
    fn cell_origin(x: i8, y: i8) -> (u16, u16) {
        (30 + x as u16 * 2, 5 + y as u16)
    }

    #[test]
    fn test_active_piece_is_drawn_in_its_color() {
        let mut snap = GameSnapshot::default();
        snap.phase = Phase::Playing;
        snap.active = Some(Tetromino::spawn(PieceKind::O));
        let frame = render_default(&snap);

        let (px, py) = cell_origin(4, 0);
        let glyph = frame.get(px, py).unwrap();
        assert_eq!(glyph.ch, BLOCK);
        assert_eq!(glyph.style.fg, Rgb::from(color(PieceKind::O)));
    }

    #[test]
    fn test_settled_cells_are_drawn() {
        let mut snap = GameSnapshot::default();
        snap.phase = Phase::Playing;
        snap.board[19][0] = Some(PieceKind::Z);
        let frame = render_default(&snap);

        let (px, py) = cell_origin(0, 19);
        let glyph = frame.get(px, py).unwrap();
        assert_eq!(glyph.ch, BLOCK);
        assert_eq!(glyph.style.fg, Rgb::from(color(PieceKind::Z)));
    }

    #[test]
    fn test_ghost_drawn_below_active() {
        let mut snap = GameSnapshot::default();
        snap.phase = Phase::Playing;
        snap.active = Some(Tetromino::spawn(PieceKind::O));
        snap.ghost_y = Some(18);
        let frame = render_default(&snap);

        let (px, py) = cell_origin(4, 18);
        assert_eq!(frame.get(px, py).unwrap().ch, GHOST);
    }

    #[test]
    fn test_line_flash_paints_whole_row_white() {
        let snap = GameSnapshot {
            phase: Phase::Playing,
            ..Default::default()
        };
        // Cells left empty so no particles land on top of the flash.
        let mut effects = Effects::default();
        effects.on_lines_cleared(&[crate::core::game::ClearedRow {
            row: 19,
            cells: [None; BOARD_WIDTH as usize],
        }]);

        let mut frame = Frame::new(0, 0);
        GameView::default().render(&snap, &effects, Viewport::new(80, 30), &mut frame);
        for x in 0..BOARD_WIDTH as i8 {
            let (px, py) = cell_origin(x, 19);
            let glyph = frame.get(px, py).unwrap();
            assert_eq!(glyph.ch, BLOCK);
            assert_eq!(glyph.style.fg, Rgb::new(255, 255, 255));
        }
    }

    #[test]
    fn test_menu_overlay_text_present() {
        let snap = GameSnapshot::default();
        let frame = render_default(&snap);
        let mut chars = String::new();
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                chars.push(frame.get(x, y).unwrap().ch);
            }
        }
        assert!(chars.contains("NEOTRIS"));
        assert!(chars.contains("ENTER TO START"));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let snap = GameSnapshot::default();
        let mut frame = Frame::new(0, 0);
        GameView::default().render(&snap, &Effects::default(), Viewport::new(5, 3), &mut frame);
        GameView::default().render(&snap, &Effects::default(), Viewport::new(0, 0), &mut frame);
    }
}
