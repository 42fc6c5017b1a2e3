//! Terminal rendering module.
//!
//! A small rendering layer for the Life board: the grid is drawn into a
//! framebuffer, which is then flushed to the terminal with crossterm, rewriting
//! only the cells that changed since the previous frame.
//!
//! - [`fb`]: framebuffer of character cells
//! - [`grid_view`]: pure mapping from a grid (plus an optional banner) to a framebuffer
//! - [`renderer`]: raw mode, alternate screen, full and diff flushing
//! - [`display`]: the controller-facing [`Renderer`](term_life_core::Renderer)

pub mod display;
pub mod fb;
pub mod grid_view;
pub mod renderer;

pub use term_life_core as core;
pub use term_life_types as types;

pub use display::TerminalDisplay;
pub use fb::{Cell, FrameBuffer, Ink};
pub use grid_view::{GridView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, ChangedRuns, Run, TerminalRenderer};
