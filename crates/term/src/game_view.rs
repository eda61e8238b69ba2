//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Mask, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ColorTag, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Key legend shown in the side panel and on the start screen.
pub const CONTROLS: [(&str, &str); 7] = [
    ("a/d", "move"),
    ("s", "soft drop"),
    ("w", "rotate"),
    ("h/spc", "hard drop"),
    ("g/c", "hold"),
    ("p/r", "pause/resume"),
    ("q", "quit"),
];

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Outer rectangle of the bordered board, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal layout for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y,
            w,
            h,
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Allocation-free; callers reuse one framebuffer across frames.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = self.frame(viewport);
        let border = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            CellStyle::plain(BOARD_BG, BOARD_BG),
        );
        draw_border(fb, frame, border);

        // Locked board cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(tag) => self.draw_block(fb, frame, x as i8, y as i8, *tag),
                    None => self.draw_empty_cell(fb, frame, x as i8, y as i8),
                }
            }
        }

        // Ghost piece, then the active piece over it.
        if !snap.game_over() {
            let ghost_style = CellStyle::plain(Rgb::new(140, 140, 140), BOARD_BG).dim();
            let ghost = Piece {
                y: snap.ghost_y,
                ..snap.active
            };
            for (dx, dy) in ghost.cells() {
                self.fill_board_cell(fb, frame, ghost.x + dx, ghost.y + dy, '░', ghost_style);
            }
        }

        let active = &snap.active;
        for (dx, dy) in active.cells() {
            self.draw_block(fb, frame, active.x + dx, active.y + dy, active.color());
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.paused() {
            draw_overlay(fb, frame, &["PAUSED", "", "press r to resume"], None);
        } else if snap.game_over() {
            draw_overlay(fb, frame, &["GAME OVER", "", "press any key"], Some(snap.score));
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Start screen: title, key legend and a prompt.
    pub fn render_splash_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = self.frame(viewport);
        draw_border(fb, frame, CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG));

        let title = CellStyle::plain(Rgb::new(80, 220, 220), PANEL_BG).bold();
        let text = CellStyle::default();

        let mut y = frame.y + frame.h / 3;
        put_centered(fb, frame, y, "B L O C K   D R O P", title);
        y += 3;
        for (keys, action) in CONTROLS {
            let x = frame.x + frame.w / 2 - 8;
            fb.put_str(x, y, keys, text.bold());
            fb.put_str(x + 7, y, action, text);
            y += 1;
        }
        y += 2;
        put_centered(fb, frame, y, "press any key to start", text.dim());
    }

    pub fn render_splash(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_splash_into(viewport, &mut fb);
        fb
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: i8, y: i8) {
        let style = CellStyle::plain(Rgb::new(90, 90, 100), BOARD_BG).dim();
        self.fill_board_cell(fb, frame, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: i8, y: i8, tag: ColorTag) {
        let style = CellStyle::plain(Rgb::from_tag(tag), BOARD_BG).bold();
        self.fill_board_cell(fb, frame, x, y, '█', style);
    }

    /// Fill one board cell; cells off the board (spawn overhang) are skipped.
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = frame.x + 1 + (x as u16) * self.cell_w;
        let py = frame.y + 1 + (y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Draw the occupied rows of a mask; returns how many rows were used.
    fn draw_mask(&self, fb: &mut FrameBuffer, x: u16, y: u16, mask: &Mask, style: CellStyle) -> u16 {
        let mut rows = 0;
        for row in mask.iter().filter(|row| row.iter().any(|&c| c)) {
            for (col, &filled) in row.iter().enumerate() {
                if filled {
                    let px = x + (col as u16) * self.cell_w;
                    fb.fill_rect(px, y + rows, self.cell_w, 1, '█', style);
                }
            }
            rows += 1;
        }
        rows
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, snap.lines, value);
        y += 3;

        fb.put_str(panel_x, y, "HOLD", label);
        y += 1;
        match &snap.held {
            Some(held) => {
                let mut style = CellStyle::plain(Rgb::from_tag(held.color()), PANEL_BG);
                if !snap.can_hold {
                    style = style.dim();
                }
                y += self.draw_mask(fb, panel_x, y, &held.mask, style);
            }
            None => {
                fb.put_str(panel_x, y, "-", value);
                y += 1;
            }
        }
        y += 1;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        for piece in &snap.preview {
            let style = CellStyle::plain(Rgb::from_tag(piece.color()), PANEL_BG);
            y += self.draw_mask(fb, panel_x, y, &piece.mask, style) + 1;
        }

        y += 1;
        fb.put_str(panel_x, y, "KEYS", label);
        y += 1;
        for (keys, action) in CONTROLS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, keys, value);
            fb.put_str(panel_x + 6, y, action, value.dim());
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn put_centered(fb: &mut FrameBuffer, frame: Frame, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, style);
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// Centered message lines over the board; `score` adds a "SCORE n" line.
fn draw_overlay(fb: &mut FrameBuffer, frame: Frame, lines: &[&str], score: Option<u32>) {
    let style = CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG).bold();
    let total = lines.len() as u16 + if score.is_some() { 2 } else { 0 };
    let mut y = frame.y + frame.h.saturating_sub(total) / 2;

    for (i, line) in lines.iter().enumerate() {
        put_centered(fb, frame, y, line, style);
        y += 1;
        if i == 0 {
            if let Some(score) = score {
                y += 1;
                let w = 6 + digit_count(score);
                let x = frame.x + frame.w.saturating_sub(w) / 2;
                let end = fb.put_str(x, y, "SCORE ", style);
                fb.put_u32(end, y, score, style);
                y += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count_matches_decimal_width() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(1200), 4);
        assert_eq!(digit_count(u32::MAX), 10);
    }

    #[test]
    fn frame_is_centered_and_sized_from_board() {
        let view = GameView::default();
        let frame = view.frame(Viewport::new(100, 40));
        assert_eq!((frame.w, frame.h), (62, 32));
        assert_eq!((frame.x, frame.y), (19, 4));

        let top = GameView::default().with_anchor_y(AnchorY::Top);
        assert_eq!(top.frame(Viewport::new(100, 40)).y, 0);
    }

    #[test]
    fn mask_drawing_skips_empty_rows() {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(10, 4);
        let i_mask = crate::core::template(crate::types::PieceKind::I);

        let rows = view.draw_mask(&mut fb, 0, 0, &i_mask, CellStyle::default());

        assert_eq!(rows, 1);
        assert_eq!(fb.row_text(0), "████████  ");
        assert_eq!(fb.row_text(1), "          ");
    }
}
