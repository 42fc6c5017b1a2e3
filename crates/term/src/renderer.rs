//! TerminalRenderer: owns raw mode and the alternate screen, and flushes
//! framebuffers to stdout.
//!
//! Every frame is encoded as a list of horizontal runs. After a size change
//! (or an explicit [`TerminalRenderer::invalidate`]) the runs are whole rows;
//! otherwise they cover only the cells that differ from the last frame shown.

use std::io::{self, IsTerminal, Write};

use anyhow::{bail, Context, Result};

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Ink};

/// A horizontal span of cells on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

/// Iterates the runs of `next` that differ from `prev`.
///
/// Frames of different sizes differ everywhere, so every row is one run.
pub struct ChangedRuns<'a> {
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
    whole_rows: bool,
    x: u16,
    y: u16,
}

impl<'a> ChangedRuns<'a> {
    pub fn new(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> Self {
        let whole_rows = prev.width() != next.width() || prev.height() != next.height();
        Self {
            prev,
            next,
            whole_rows,
            x: 0,
            y: 0,
        }
    }

    fn differs(&self, x: u16) -> bool {
        self.prev.get(x, self.y) != self.next.get(x, self.y)
    }
}

impl Iterator for ChangedRuns<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let w = self.next.width();
        while self.y < self.next.height() {
            if self.whole_rows {
                let run = Run { x: 0, y: self.y, len: w };
                self.y += 1;
                return Some(run);
            }

            while self.x < w && !self.differs(self.x) {
                self.x += 1;
            }
            if self.x < w {
                let start = self.x;
                while self.x < w && self.differs(self.x) {
                    self.x += 1;
                }
                return Some(Run {
                    x: start,
                    y: self.y,
                    len: self.x - start,
                });
            }

            self.x = 0;
            self.y += 1;
        }
        None
    }
}

/// Queues cell runs, switching styles only when the ink changes.
struct Painter<'o> {
    out: &'o mut Vec<u8>,
    ink: Option<Ink>,
}

impl<'o> Painter<'o> {
    fn new(out: &'o mut Vec<u8>) -> Self {
        Self { out, ink: None }
    }

    fn run(&mut self, fb: &FrameBuffer, run: Run) -> Result<()> {
        self.out.queue(cursor::MoveTo(run.x, run.y))?;
        for x in run.x..run.x + run.len {
            let cell = fb.get(x, run.y).unwrap_or_default();
            if self.ink != Some(cell.ink) {
                self.out.queue(SetAttribute(Attribute::Reset))?;
                self.out.queue(SetForegroundColor(ink_color(cell.ink)))?;
                if ink_is_bold(cell.ink) {
                    self.out.queue(SetAttribute(Attribute::Bold))?;
                }
                self.ink = Some(cell.ink);
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        if self.ink.is_some() {
            self.out.queue(ResetColor)?;
            self.out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

/// Encode a full repaint of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut painter = Painter::new(out);
    for y in 0..fb.height() {
        painter.run(fb, Run { x: 0, y, len: fb.width() })?;
    }
    painter.finish()
}

/// Encode only the cells of `next` that differ from `prev`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut painter = Painter::new(out);
    for run in ChangedRuns::new(prev, next) {
        painter.run(next, run)?;
    }
    painter.finish()
}

fn ink_color(ink: Ink) -> Color {
    match ink {
        Ink::Blank | Ink::Dead => Color::Reset,
        Ink::Alive => Color::Green,
        Ink::Status => Color::DarkGrey,
        Ink::Banner => Color::Red,
    }
}

fn ink_is_bold(ink: Ink) -> bool {
    matches!(ink, Ink::Alive | Ink::Banner)
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen; `None` forces a full repaint.
    shown: Option<FrameBuffer>,
    bytes: Vec<u8>,
    raw: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            bytes: Vec::with_capacity(16 * 1024),
            raw: false,
        }
    }

    /// Current terminal size as (columns, rows).
    ///
    /// Fails when stdout is not a terminal; there is nothing to draw on then.
    pub fn probe_size() -> Result<(u16, u16)> {
        if !io::stdout().is_terminal() {
            bail!("stdout is not a terminal; run the simulation from a terminal, not a pipe");
        }
        terminal::size().context("querying the terminal size")
    }

    pub fn is_active(&self) -> bool {
        self.raw
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        self.raw = true;
        self.shown = None;

        self.bytes.clear();
        self.bytes.queue(terminal::EnterAlternateScreen)?;
        self.bytes.queue(terminal::DisableLineWrap)?;
        self.bytes.queue(cursor::Hide)?;
        self.flush()
    }

    /// Restore the terminal. A no-op unless `enter` succeeded.
    pub fn exit(&mut self) -> Result<()> {
        if !self.raw {
            return Ok(());
        }
        self.raw = false;

        self.bytes.clear();
        self.bytes.queue(ResetColor)?;
        self.bytes.queue(SetAttribute(Attribute::Reset))?;
        self.bytes.queue(cursor::Show)?;
        self.bytes.queue(terminal::EnableLineWrap)?;
        self.bytes.queue(terminal::LeaveAlternateScreen)?;
        let flushed = self.flush();
        terminal::disable_raw_mode().context("disabling raw mode")?;
        flushed
    }

    /// Make the next frame a full repaint.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `fb`, then hand back the previously shown buffer through `fb`.
    ///
    /// The two buffers trade places every frame, so steady-state drawing does
    /// not allocate.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.bytes.clear();
        let mut spare = match self.shown.take() {
            Some(shown) if shown.width() == fb.width() && shown.height() == fb.height() => {
                encode_diff_into(&shown, fb, &mut self.bytes)?;
                shown
            }
            other => {
                encode_full_into(fb, &mut self.bytes)?;
                let mut spare = other.unwrap_or_else(|| FrameBuffer::new(0, 0));
                spare.resize(fb.width(), fb.height());
                spare
            }
        };
        self.flush()?;

        std::mem::swap(&mut spare, fb);
        self.shown = Some(spare);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let mut out = self.stdout.lock();
        out.write_all(&self.bytes)?;
        out.flush()?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
