//! Renderer seam and the crossterm-backed terminal renderer.
//!
//! [`TerminalRenderer`] lays each snapshot out with [`GameView`] into a reused
//! framebuffer and flushes only the runs that changed since the last frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::game_view::{GameView, Viewport};

/// Read-only consumer of engine state, called once per loop iteration.
pub trait Renderer {
    fn draw(&mut self, snap: &GameSnapshot) -> Result<()>;
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    view: GameView,
    /// Frame being composed.
    back: FrameBuffer,
    /// Frame currently on screen; `None` forces a full redraw.
    front: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_view(GameView::default())
    }

    pub fn with_view(view: GameView) -> Self {
        Self {
            stdout: io::stdout(),
            view,
            back: FrameBuffer::new(0, 0),
            front: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.invalidate();
        Ok(())
    }

    /// Undo [`TerminalRenderer::enter`]. Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.front = None;
    }

    fn viewport() -> Viewport {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }

    /// Show the start screen.
    pub fn draw_splash(&mut self) -> Result<()> {
        self.view.render_splash_into(Self::viewport(), &mut self.back);
        self.present()
    }

    /// Diff the back buffer against the screen, flush, then swap buffers.
    fn present(&mut self) -> Result<()> {
        self.buf.clear();
        let same_size = |fb: &FrameBuffer, back: &FrameBuffer| {
            fb.width() == back.width() && fb.height() == back.height()
        };
        match self.front.take() {
            Some(mut front) if same_size(&front, &self.back) => {
                encode_diff_into(&front, &self.back, &mut self.buf)?;
                self.flush_buf()?;
                std::mem::swap(&mut front, &mut self.back);
                self.front = Some(front);
            }
            _ => {
                encode_full_into(&self.back, &mut self.buf)?;
                self.flush_buf()?;
                self.front = Some(std::mem::replace(&mut self.back, FrameBuffer::new(0, 0)));
            }
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    fn draw(&mut self, snap: &GameSnapshot) -> Result<()> {
        self.view.render_into(snap, Self::viewport(), &mut self.back);
        self.present()
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let w = fb.width() as usize;
    let mut style = None;
    if w > 0 {
        for (y, row) in fb.cells().chunks(w).enumerate() {
            out.queue(cursor::MoveTo(0, y as u16))?;
            for cell in row {
                put_cell(out, cell, &mut style)?;
            }
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the changed runs of `next` relative to `prev` into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        let start = (y as usize) * (next.width() as usize) + x as usize;
        for cell in &next.cells()[start..start + len as usize] {
            put_cell(out, cell, &mut style)?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Print one cell, re-emitting style escapes only when the style changes.
fn put_cell(out: &mut Vec<u8>, cell: &Cell, current: &mut Option<CellStyle>) -> Result<()> {
    if *current != Some(cell.style) {
        apply_style_into(out, cell.style)?;
        *current = Some(cell.style);
    }
    out.queue(Print(cell.ch))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for every horizontal run of cells that differ.
///
/// A size change marks every row dirty.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let w = next.width() as usize;
    if w == 0 {
        return Ok(());
    }
    let resized = prev.width() != next.width() || prev.height() != next.height();

    for (y, row) in next.cells().chunks(w).enumerate() {
        if resized {
            f(0, y as u16, next.width())?;
            continue;
        }

        let old = &prev.cells()[y * w..(y + 1) * w];
        let mut x = 0;
        while x < w {
            if old[x] == row[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && old[x] != row[x] {
                x += 1;
            }
            f(start as u16, y as u16, (x - start) as u16)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_maps_to_truecolor() {
        let style = CellStyle::default();
        assert_eq!(
            rgb_to_color(style.fg),
            Color::Rgb {
                r: style.fg.r,
                g: style.fg.g,
                b: style.fg.b
            }
        );
    }

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(5, 2);
        let mut b = FrameBuffer::new(5, 2);

        for x in 1..=3 {
            b.set(x, 0, Cell { ch: 'X', style });
        }
        b.set(4, 1, Cell { ch: 'Y', style });

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3), (4, 1, 1)]);
    }

    #[test]
    fn identical_frames_encode_no_cells() {
        let a = FrameBuffer::new(4, 2);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(!text.contains(' '));
    }

    #[test]
    fn full_encode_contains_every_row() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str(0, 0, "abc", CellStyle::default());
        fb.put_str(0, 1, "def", CellStyle::default());

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("abc"));
        assert!(text.contains("def"));
    }
}
