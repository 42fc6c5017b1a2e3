//! TerminalDisplay: the controller's [`Renderer`] on a real terminal.

use anyhow::Result;

use crate::core::{Grid, RenderStatus, Renderer};
use crate::fb::FrameBuffer;
use crate::grid_view::{GridView, Viewport};
use crate::renderer::TerminalRenderer;
use crate::types::Banner;

pub struct TerminalDisplay {
    term: TerminalRenderer,
    view: GridView,
    fb: FrameBuffer,
    showing_alert: bool,
}

impl TerminalDisplay {
    pub fn new(view: GridView) -> Self {
        Self {
            term: TerminalRenderer::new(),
            view,
            fb: FrameBuffer::new(0, 0),
            showing_alert: false,
        }
    }

    /// Switch the terminal to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        self.term.enter()
    }

    fn viewport() -> Result<Viewport> {
        let (w, h) = TerminalRenderer::probe_size()?;
        Ok(Viewport::new(w, h))
    }
}

impl Renderer for TerminalDisplay {
    fn render(&mut self, grid: &Grid, banner: Option<Banner>) -> Result<RenderStatus> {
        let viewport = Self::viewport()?;
        let status = self.view.render_into(grid, banner, viewport, &mut self.fb);
        if status == RenderStatus::Drawn {
            if self.showing_alert {
                self.term.invalidate();
                self.showing_alert = false;
            }
            self.term.draw_swap(&mut self.fb)?;
        }
        Ok(status)
    }

    fn alert(&mut self, banner: Banner) -> Result<()> {
        let viewport = Self::viewport()?;
        self.view.render_alert_into(banner, viewport, &mut self.fb);
        self.showing_alert = true;
        self.term.draw_swap(&mut self.fb)
    }

    fn teardown(&mut self) -> Result<()> {
        self.term.exit()
    }
}
