//! Pattern files - plain-text lists of live cells
//!
//! One point per line, `row,col`, both 0-indexed integers:
//!
//! ```text
//! 6,8
//! 7,9
//! 7,10
//! ```
//!
//! Loading never fails on content. A line that does not hold two integers, or
//! a point that falls outside the board, becomes a [`PatternWarning`] and is
//! skipped. Blank lines are ignored.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Non-fatal problem found while loading a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternWarning {
    /// The line is not two comma-separated integers.
    Malformed { line: usize, text: String },
    /// Valid integers, but outside `rows x cols`.
    OutOfBounds { line: usize, row: i64, col: i64 },
}

impl PatternWarning {
    /// 1-based line number the warning refers to.
    pub fn line(&self) -> usize {
        match self {
            PatternWarning::Malformed { line, .. } | PatternWarning::OutOfBounds { line, .. } => {
                *line
            }
        }
    }
}

impl fmt::Display for PatternWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternWarning::Malformed { line, text } => write!(
                f,
                "line {}: expected two integers like `3,1`, got {:?}; line skipped",
                line, text
            ),
            PatternWarning::OutOfBounds { line, row, col } => write!(
                f,
                "line {}: point ({}, {}) is outside the visible board; point skipped \
                 (a larger terminal may fit it)",
                line, row, col
            ),
        }
    }
}

/// Result of loading a pattern: in-bounds points plus everything that was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternLoad {
    pub points: Vec<(usize, usize)>,
    pub warnings: Vec<PatternWarning>,
}

impl PatternLoad {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Emit every warning through the `log` facade.
    pub fn log_warnings(&self, source: &str) {
        for w in &self.warnings {
            log::warn!("{}: {}", source, w);
        }
    }
}

fn parse_point(text: &str) -> Option<(i64, i64)> {
    let mut fields = text.split(',');
    let row = fields.next()?.trim().parse().ok()?;
    let col = fields.next()?.trim().parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Parse pattern text against a board of `dims = (rows, cols)`.
///
/// # Examples
///
/// ```
/// use term_life_core::pattern::{load_points, PatternWarning};
///
/// let load = load_points("1,1\nfoo\n9,9\n", (5, 5));
/// assert_eq!(load.points, vec![(1, 1)]);
/// assert_eq!(load.warnings.len(), 2);
/// assert!(matches!(load.warnings[1], PatternWarning::OutOfBounds { line: 3, .. }));
/// ```
pub fn load_points(text: &str, dims: (usize, usize)) -> PatternLoad {
    let (rows, cols) = dims;
    let mut load = PatternLoad::default();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        if raw.trim().is_empty() {
            continue;
        }
        match parse_point(raw) {
            None => load.warnings.push(PatternWarning::Malformed {
                line,
                text: raw.to_string(),
            }),
            Some((row, col)) => {
                let in_bounds =
                    row >= 0 && col >= 0 && (row as u64) < rows as u64 && (col as u64) < cols as u64;
                if in_bounds {
                    load.points.push((row as usize, col as usize));
                } else {
                    load.warnings.push(PatternWarning::OutOfBounds { line, row, col });
                }
            }
        }
    }

    load
}

/// Read and parse a pattern file.
///
/// Only I/O problems are errors; content problems are warnings.
pub fn load_file(path: &Path, dims: (usize, usize)) -> Result<PatternLoad> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading pattern file {}", path.display()))?;
    Ok(load_points(&text, dims))
}

/// `*.txt` files directly inside `dir`, sorted by file name.
pub fn discover_patterns(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("listing pattern directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_txt = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("txt"))
            .unwrap_or(false);
        if is_txt && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point_accepts_whitespace() {
        assert_eq!(parse_point("3,1"), Some((3, 1)));
        assert_eq!(parse_point(" 3 , 1 \r"), Some((3, 1)));
        assert_eq!(parse_point("-2,4"), Some((-2, 4)));
    }

    #[test]
    fn test_parse_point_rejects_garbage() {
        assert_eq!(parse_point("3"), None);
        assert_eq!(parse_point("3,"), None);
        assert_eq!(parse_point("a,b"), None);
        assert_eq!(parse_point("1.5,2"), None);
        assert_eq!(parse_point("1,2,3"), None);
    }

    #[test]
    fn test_blank_lines_are_skipped_silently() {
        let load = load_points("\n1,1\n   \n", (3, 3));
        assert_eq!(load.points, vec![(1, 1)]);
        assert!(load.is_clean());
    }

    #[test]
    fn test_negative_points_are_out_of_bounds() {
        let load = load_points("-1,0", (3, 3));
        assert!(load.points.is_empty());
        assert_eq!(
            load.warnings,
            vec![PatternWarning::OutOfBounds { line: 1, row: -1, col: 0 }]
        );
    }

    #[test]
    fn test_edge_points_are_in_bounds() {
        let load = load_points("0,0\n2,2\n3,0\n0,3", (3, 3));
        assert_eq!(load.points, vec![(0, 0), (2, 2)]);
        assert_eq!(load.warnings.len(), 2);
    }

    #[test]
    fn test_warning_display_mentions_line() {
        let w = PatternWarning::Malformed {
            line: 4,
            text: "x".to_string(),
        };
        assert!(w.to_string().starts_with("line 4:"));
        assert_eq!(w.line(), 4);
    }
}
