//! Terminal Game of Life (workspace facade crate).
//!
//! Re-exports the member crates under one roof so the binary, the integration
//! tests and the benchmarks can use `term_life::{core, input, term, types}`.

pub use term_life_core as core;
pub use term_life_input as input;
pub use term_life_term as term;
pub use term_life_types as types;
