//! GridView: maps a `core::Grid` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board is drawn from the top-left corner, one glyph per cell (or
//! `cell_w` copies of it), with a status line underneath when a spare row
//! exists. A board larger than the viewport is not drawn at all: the view
//! reports a capability failure and the caller decides what to show instead.

use crate::core::{Grid, RenderStatus, SurfaceTooSmall};
use crate::fb::{Cell, FrameBuffer, Ink};
use crate::types::{Banner, DEFAULT_ALIVE_SYMBOL, DEFAULT_DEAD_SYMBOL};

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

/// Lightweight renderer for the Life board.
#[derive(Debug, Clone)]
pub struct GridView {
    alive: char,
    dead: char,
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GridView {
    fn default() -> Self {
        Self::new(DEFAULT_ALIVE_SYMBOL, DEFAULT_DEAD_SYMBOL)
    }
}

impl GridView {
    pub fn new(alive: char, dead: char) -> Self {
        Self {
            alive,
            dead,
            cell_w: 1,
        }
    }

    /// Draw every cell `cell_w` columns wide (2 compensates for tall glyphs).
    pub fn with_cell_width(mut self, cell_w: u16) -> Self {
        self.cell_w = cell_w.max(1);
        self
    }

    /// Terminal (width, height) the board occupies, saturating at `u16::MAX`.
    pub fn board_size(&self, grid: &Grid) -> (u16, u16) {
        let (rows, cols) = grid.dimensions();
        let w = (cols as u64).saturating_mul(self.cell_w as u64);
        let h = rows as u64;
        (w.min(u16::MAX as u64) as u16, h.min(u16::MAX as u64) as u16)
    }

    /// Render the committed generation into an existing framebuffer.
    ///
    /// On a capability failure the framebuffer is left untouched.
    pub fn render_into(
        &self,
        grid: &Grid,
        banner: Option<Banner>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> RenderStatus {
        let (board_w, board_h) = self.board_size(grid);
        if board_w > viewport.width || board_h > viewport.height {
            return RenderStatus::CapabilityFailure(SurfaceTooSmall {
                needed: (board_w, board_h),
                available: (viewport.width, viewport.height),
            });
        }

        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let alive = Cell::new(self.alive, Ink::Alive);
        let dead = Cell::new(self.dead, Ink::Dead);
        for r in 0..grid.rows() {
            for (c, &is_alive) in grid.row(r).iter().enumerate() {
                let cell = if is_alive { alive } else { dead };
                let x0 = c as u16 * self.cell_w;
                for dx in 0..self.cell_w {
                    fb.set(x0 + dx, r as u16, cell);
                }
            }
        }

        if board_h < viewport.height {
            let status = format!(
                "gen {}  pop {}  [p] pause  [q] quit",
                grid.generation(),
                grid.population()
            );
            fb.put_str(0, board_h, &status, Ink::Status);
        }

        if let Some(banner) = banner {
            let text = fit(banner, board_w);
            let text_w = text.chars().count() as u16;
            let x = board_w.saturating_sub(text_w) / 2;
            fb.put_str(x, board_h / 2, text, Ink::Banner);
        }

        RenderStatus::Drawn
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        grid: &Grid,
        banner: Option<Banner>,
        viewport: Viewport,
    ) -> (FrameBuffer, RenderStatus) {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let status = self.render_into(grid, banner, viewport, &mut fb);
        (fb, status)
    }

    /// Message-only screen, word-wrapped and vertically centered.
    ///
    /// Falls back to the short banner text when the full message does not fit.
    pub fn render_alert_into(&self, banner: Banner, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }

        let mut lines = wrap_words(banner.message(), viewport.width as usize);
        if lines.len() > viewport.height as usize {
            lines = vec![banner.short().to_string()];
        }

        let top = (viewport.height as usize).saturating_sub(lines.len()) / 2;
        for (i, line) in lines.iter().enumerate() {
            let w = line.chars().count() as u16;
            let x = viewport.width.saturating_sub(w) / 2;
            fb.put_str(x, (top + i) as u16, line, Ink::Banner);
        }
    }
}

fn fit(banner: Banner, width: u16) -> &'static str {
    if banner.message().chars().count() <= width as usize {
        banner.message()
    } else {
        banner.short()
    }
}

/// Greedy word wrap; words longer than `width` are split.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    let mut line = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }

        let line_len = line.chars().count();
        if line_len > 0 && line_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.extend(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
