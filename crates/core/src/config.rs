//! Runtime configuration
//!
//! Read from a JSON file; every key is optional:
//!
//! ```json
//! {
//!   "dynamic_board_size": true,
//!   "rows": 24,
//!   "cols": 80,
//!   "gen_delay": 0.1,
//!   "dead_symbol": " ",
//!   "alive_symbol": "0"
//! }
//! ```
//!
//! With `dynamic_board_size` the board takes the terminal size (minus the status
//! line) and `rows`/`cols` are ignored.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::{
    DEFAULT_ALIVE_SYMBOL, DEFAULT_COLS, DEFAULT_DEAD_SYMBOL, DEFAULT_GEN_DELAY_SECS, DEFAULT_ROWS,
    STATUS_LINES,
};

/// Longest accepted `gen_delay`, in seconds.
pub const MAX_GEN_DELAY_SECS: f64 = 3600.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LifeConfig {
    pub dynamic_board_size: bool,
    pub rows: usize,
    pub cols: usize,
    /// Seconds between generations.
    pub gen_delay: f64,
    pub dead_symbol: char,
    pub alive_symbol: char,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            dynamic_board_size: true,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            gen_delay: DEFAULT_GEN_DELAY_SECS,
            dead_symbol: DEFAULT_DEAD_SYMBOL,
            alive_symbol: DEFAULT_ALIVE_SYMBOL,
        }
    }
}

impl LifeConfig {
    /// Parse and validate JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("parsing configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading configuration {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Load `path` when it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("no configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            (0.0..=MAX_GEN_DELAY_SECS).contains(&self.gen_delay)
                && Duration::try_from_secs_f64(self.gen_delay).is_ok(),
            "gen_delay must be between 0 and {} seconds, got {}",
            MAX_GEN_DELAY_SECS,
            self.gen_delay
        );
        if !self.dynamic_board_size {
            ensure!(
                self.rows > 0 && self.cols > 0,
                "rows and cols must be at least 1, got {}x{}",
                self.rows,
                self.cols
            );
        }
        for (name, ch) in [("dead_symbol", self.dead_symbol), ("alive_symbol", self.alive_symbol)] {
            if ch.is_control() {
                bail!("{} must be a displayable character, got {:?}", name, ch);
            }
        }
        Ok(())
    }

    /// `gen_delay` as a duration, capped at [`MAX_GEN_DELAY_SECS`]. An
    /// unvalidated delay that is not a valid duration gives the default tick.
    pub fn tick_interval(&self) -> Duration {
        let max = Duration::from_secs_f64(MAX_GEN_DELAY_SECS);
        match Duration::try_from_secs_f64(self.gen_delay) {
            Ok(tick) => tick.min(max),
            Err(_) if self.gen_delay > MAX_GEN_DELAY_SECS => max,
            Err(_) => Duration::from_secs_f64(DEFAULT_GEN_DELAY_SECS),
        }
    }

    /// Board dimensions (rows, cols) for a terminal of `term_cols x term_rows`.
    pub fn board_dimensions(&self, term_cols: u16, term_rows: u16) -> (usize, usize) {
        if self.dynamic_board_size {
            let rows = term_rows.saturating_sub(STATUS_LINES).max(1) as usize;
            let cols = term_cols.max(1) as usize;
            (rows, cols)
        } else {
            (self.rows, self.cols)
        }
    }
}
