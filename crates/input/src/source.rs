//! Terminal input source: bounded polling of crossterm events.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::core::InputSource;
use crate::map::handle_key_event;
use crate::types::ControlEvent;

/// Reads control events from the terminal.
///
/// Expects raw mode (see `term::TerminalRenderer::enter`), otherwise keys only
/// arrive after ENTER.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    /// Wait up to `timeout` for a mapped key press.
    ///
    /// Unmapped keys, key releases and other events (resize, focus, mouse) are
    /// swallowed while the deadline has not passed.
    fn poll(&mut self, timeout: Duration) -> Result<Option<ControlEvent>> {
        // Past the clock's range the deadline is never reached.
        let deadline = Instant::now().checked_add(timeout);
        loop {
            let remaining = deadline
                .map(|d| d.saturating_duration_since(Instant::now()))
                .unwrap_or(timeout);
            if !event::poll(remaining)? {
                return Ok(None);
            }
            if let Event::Key(key) = event::read()? {
                // Terminal auto-repeat would toggle pause back and forth.
                if key.kind == KeyEventKind::Press {
                    if let Some(ev) = handle_key_event(key) {
                        return Ok(Some(ev));
                    }
                }
            }
            if remaining.is_zero() {
                return Ok(None);
            }
        }
    }
}
