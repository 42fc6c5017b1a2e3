//! Terminal input module.
//!
//! Maps `crossterm` key events into [`ControlEvent`]s and exposes them to the
//! controller as an [`InputSource`](term_life_core::InputSource) with a
//! bounded wait.

pub mod map;
pub mod source;

pub use term_life_core as core;
pub use term_life_types as types;

pub use map::{handle_key_event, is_interrupt, should_quit};
pub use source::TerminalInput;
pub use types::ControlEvent;
