//! Core types module - shared data structures and constants
//!
//! This module defines the small vocabulary shared by the simulation core,
//! the terminal renderer and the keyboard input source. Everything here is
//! plain data with no external dependencies.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 24 | Board rows when the board is not sized to the terminal |
//! | `DEFAULT_COLS` | 80 | Board columns when the board is not sized to the terminal |
//! | `DEFAULT_GEN_DELAY_SECS` | 0.1 | Tick interval between generations |
//! | `DEFAULT_ALIVE_SYMBOL` | `'0'` | Glyph drawn for a live cell |
//! | `DEFAULT_DEAD_SYMBOL` | `' '` | Glyph drawn for a dead cell |
//! | `STATUS_LINES` | 1 | Terminal rows reserved under a terminal-sized board |
//!
//! # Examples
//!
//! ```
//! use term_life_types::{ControlEvent, SimState};
//!
//! assert_eq!(ControlEvent::from_str("pause"), Some(ControlEvent::TogglePause));
//! assert_eq!(ControlEvent::Quit.as_str(), "quit");
//!
//! assert!(SimState::Terminated.is_terminal());
//! assert!(!SimState::Paused.is_terminal());
//! assert!(SimState::Running.is_advancing());
//! ```

/// Board rows used when `dynamic_board_size` is off.
pub const DEFAULT_ROWS: usize = 24;

/// Board columns used when `dynamic_board_size` is off.
pub const DEFAULT_COLS: usize = 80;

/// Seconds between two generations.
pub const DEFAULT_GEN_DELAY_SECS: f64 = 0.1;

/// Glyph for a live cell.
pub const DEFAULT_ALIVE_SYMBOL: char = '0';

/// Glyph for a dead cell.
pub const DEFAULT_DEAD_SYMBOL: char = ' ';

/// Terminal rows kept free below a terminal-sized board for the status line.
pub const STATUS_LINES: u16 = 1;

/// Control events produced by an input source.
///
/// A poll that sees no relevant input yields `None` rather than a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlEvent {
    /// Pause a running simulation, or resume a paused one
    TogglePause,
    /// Leave the program
    Quit,
    /// Explicit "continue" after a notice (resize recovery, pause)
    Acknowledge,
    /// Keyboard interrupt (Ctrl+C)
    Interrupt,
}

impl ControlEvent {
    /// Parse an event name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use term_life_types::ControlEvent;
    ///
    /// assert_eq!(ControlEvent::from_str("Quit"), Some(ControlEvent::Quit));
    /// assert_eq!(ControlEvent::from_str("continue"), Some(ControlEvent::Acknowledge));
    /// assert_eq!(ControlEvent::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pause" | "resume" | "togglepause" => Some(ControlEvent::TogglePause),
            "quit" => Some(ControlEvent::Quit),
            "acknowledge" | "continue" => Some(ControlEvent::Acknowledge),
            "interrupt" => Some(ControlEvent::Interrupt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ControlEvent::TogglePause => "pause",
            ControlEvent::Quit => "quit",
            ControlEvent::Acknowledge => "acknowledge",
            ControlEvent::Interrupt => "interrupt",
        }
    }

    /// Whether this event ends the simulation.
    pub fn is_stop(&self) -> bool {
        matches!(self, ControlEvent::Quit | ControlEvent::Interrupt)
    }
}

/// Lifecycle of the simulation controller.
///
/// ```text
/// Seeding -> Running <-> Paused
///               |  ^       |
///               v  |       v
///           ResizeRecovery
///
/// (any) -> Terminated
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimState {
    /// Grid is being populated; nothing is drawn yet
    Seeding,
    /// Generations advance once per tick
    Running,
    /// Grid frozen by the user
    Paused,
    /// Grid frozen because the display cannot hold it
    ResizeRecovery,
    /// Absorbing; the display has been (or is being) torn down
    Terminated,
}

impl SimState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimState::Seeding => "seeding",
            SimState::Running => "running",
            SimState::Paused => "paused",
            SimState::ResizeRecovery => "resizeRecovery",
            SimState::Terminated => "terminated",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SimState::Terminated)
    }

    /// Only a running simulation steps the grid.
    pub fn is_advancing(&self) -> bool {
        matches!(self, SimState::Running)
    }
}

/// Notice shown on top of (or instead of) the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Paused,
    ResizeRecovery,
}

impl Banner {
    /// Full message text.
    pub fn message(&self) -> &'static str {
        match self {
            Banner::Paused => "PAUSED: press ENTER or P to continue",
            Banner::ResizeRecovery => {
                "PAUSED: the window is too small for the board. \
                 Restore its size and press ENTER to continue."
            }
        }
    }

    /// Short form for narrow surfaces.
    pub fn short(&self) -> &'static str {
        match self {
            Banner::Paused => "PAUSED",
            Banner::ResizeRecovery => "TOO SMALL",
        }
    }
}
