//! Core simulation module - pure, deterministic, and testable
//!
//! This crate holds Conway's Game of Life on a toroidal board and the
//! controller that sequences it. Apart from reading pattern and configuration
//! files it does no I/O: drawing and keyboard input are reached through the
//! [`Renderer`] and [`InputSource`] traits.
//!
//! # Module Structure
//!
//! - [`grid`]: double-buffered `rows x cols` board with wrap-around access
//! - [`rules`]: the B3/S23 transition
//! - [`stepper`]: one synchronous generation over the whole board
//! - [`controller`]: Seeding / Running / Paused / ResizeRecovery / Terminated
//! - [`pattern`]: `row,col` pattern files and their warnings
//! - [`config`]: JSON configuration
//! - [`rng`]: seeded random source for random boards
//! - [`surface`]: renderer and input traits
//!
//! # Example
//!
//! ```
//! use term_life_core::{stepper, Grid};
//!
//! // A blinker flips between horizontal and vertical.
//! let mut grid = Grid::from_picture(&[
//!     ".....",
//!     ".....",
//!     ".###.",
//!     ".....",
//!     ".....",
//! ]);
//! let start = grid.cells().to_vec();
//!
//! stepper::step(&mut grid);
//! assert!(grid.get(1, 2) && grid.get(2, 2) && grid.get(3, 2));
//! assert!(!grid.get(2, 1));
//!
//! stepper::step(&mut grid);
//! assert_eq!(grid.cells(), &start[..]);
//! assert_eq!(grid.generation(), 2);
//! ```

pub mod config;
pub mod controller;
pub mod grid;
pub mod pattern;
pub mod rng;
pub mod rules;
pub mod stepper;
pub mod surface;

pub use term_life_types as types;

// Re-export commonly used types for convenience
pub use config::{LifeConfig, MAX_GEN_DELAY_SECS};
pub use controller::Controller;
pub use grid::{Grid, NextBuffer, Snapshot};
pub use pattern::{discover_patterns, load_file, load_points, PatternLoad, PatternWarning};
pub use rng::SimpleRng;
pub use rules::next_state;
pub use stepper::{step, step_in_order, step_n};
pub use surface::{InputSource, RenderStatus, Renderer, SurfaceTooSmall};
