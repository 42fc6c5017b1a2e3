//! Collaborator traits used by the controller.
//!
//! The terminal implementations live in the `term` and `input` crates; tests
//! drive the controller with scripted fakes.

use std::fmt;
use std::time::Duration;

use anyhow::Result;

use crate::grid::Grid;
use crate::types::{Banner, ControlEvent};

/// The display cannot hold the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceTooSmall {
    /// (width, height) the board needs, in terminal cells
    pub needed: (u16, u16),
    /// (width, height) currently available
    pub available: (u16, u16),
}

impl fmt::Display for SurfaceTooSmall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "display is {}x{} but the board needs {}x{}",
            self.available.0, self.available.1, self.needed.0, self.needed.1
        )
    }
}

/// Outcome of a render call that did not hit an I/O error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    Drawn,
    CapabilityFailure(SurfaceTooSmall),
}

/// Something that can show the grid.
pub trait Renderer {
    /// Draw the committed generation, optionally with a banner over it.
    fn render(&mut self, grid: &Grid, banner: Option<Banner>) -> Result<RenderStatus>;

    /// Draw a message-only screen. Must fit any surface size.
    fn alert(&mut self, banner: Banner) -> Result<()>;

    /// Restore the display. Safe to call more than once.
    fn teardown(&mut self) -> Result<()>;
}

/// Source of control events.
pub trait InputSource {
    /// Wait at most `timeout` for a control event.
    fn poll(&mut self, timeout: Duration) -> Result<Option<ControlEvent>>;
}
