//! Grid module - the toroidal board
//!
//! The grid is a `rows x cols` matrix of booleans (`true` = alive) stored as two
//! flat row-major buffers: `current` holds the committed generation, `next`
//! receives the generation being computed. Every coordinate wraps on both axes,
//! so the last row touches the first and the last column touches the first.
//!
//! A generation transition borrows the grid through [`Grid::split`], which hands
//! out a read-only [`Snapshot`] of `current` and a write-only [`NextBuffer`]
//! over `next`. [`Grid::commit`] then swaps the two buffers in one step.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;

/// Offsets of the 8 cells surrounding a position, as (d_row, d_col).
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Map any signed index into `0..len`.
#[inline(always)]
fn wrap(i: isize, len: usize) -> usize {
    i.rem_euclid(len as isize) as usize
}

/// Toroidal, double-buffered Game of Life board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    current: Vec<bool>,
    next: Vec<bool>,
    generation: u64,
}

impl Grid {
    /// Create an all-dead grid. Zero dimensions are clamped to 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            current: vec![false; rows * cols],
            next: vec![false; rows * cols],
            generation: 0,
        }
    }

    /// Build a grid from rows of cells (`true` = alive). Ragged rows are padded dead.
    pub fn from_rows(cells: &[Vec<bool>]) -> Self {
        let rows = cells.len();
        let cols = cells.iter().map(Vec::len).max().unwrap_or(0);
        let mut grid = Self::new(rows, cols);
        for (r, row) in cells.iter().enumerate() {
            for (c, &alive) in row.iter().enumerate() {
                grid.current[r * grid.cols + c] = alive;
            }
        }
        grid
    }

    /// Parse a picture where `#` or `O` marks a live cell and anything else is dead.
    ///
    /// Handy for tests and built-in shapes:
    ///
    /// ```
    /// use term_life_core::Grid;
    ///
    /// let grid = Grid::from_picture(&[
    ///     "......",
    ///     "..##..",
    ///     "..##..",
    ///     "......",
    /// ]);
    /// assert_eq!(grid.dimensions(), (4, 6));
    /// assert_eq!(grid.population(), 4);
    /// ```
    pub fn from_picture(lines: &[&str]) -> Self {
        let cells: Vec<Vec<bool>> = lines
            .iter()
            .map(|line| line.chars().map(|ch| matches!(ch, '#' | 'O')).collect())
            .collect();
        Self::from_rows(&cells)
    }

    /// (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of committed generations since the grid was seeded.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[inline(always)]
    fn index(&self, row: isize, col: isize) -> usize {
        wrap(row, self.rows) * self.cols + wrap(col, self.cols)
    }

    /// Cell state in the committed generation; both indices wrap.
    pub fn get(&self, row: isize, col: isize) -> bool {
        self.current[self.index(row, col)]
    }

    /// Write a cell of the committed generation; both indices wrap.
    ///
    /// Meant for seeding. The stepper never goes through this.
    pub fn set(&mut self, row: isize, col: isize, alive: bool) {
        let idx = self.index(row, col);
        self.current[idx] = alive;
    }

    /// Flip a cell, returning its new state.
    pub fn toggle(&mut self, row: isize, col: isize) -> bool {
        let idx = self.index(row, col);
        self.current[idx] = !self.current[idx];
        self.current[idx]
    }

    /// The 8 wrapped positions around (row, col), as in-range (row, col) pairs.
    ///
    /// On grids smaller than 3 on an axis, some positions coincide; they are
    /// still listed once per offset.
    pub fn neighbors(&self, row: isize, col: isize) -> ArrayVec<(usize, usize), 8> {
        let (r, c) = (wrap(row, self.rows) as isize, wrap(col, self.cols) as isize);
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| (wrap(r + dr, self.rows), wrap(c + dc, self.cols)))
            .collect()
    }

    /// Live cells among the 8 wrapped neighbors of (row, col), in `0..=8`.
    pub fn neighbor_count(&self, row: isize, col: isize) -> u8 {
        Snapshot::of(self).neighbor_count(row, col)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.current.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.current.iter().any(|&alive| alive)
    }

    /// Kill every cell. The generation counter is left alone.
    pub fn clear(&mut self) {
        self.current.fill(false);
    }

    /// Seed every cell from one random bit.
    pub fn fill_random(&mut self, rng: &mut SimpleRng) {
        for cell in &mut self.current {
            *cell = rng.next_bool();
        }
    }

    /// Positions of live cells, row-major.
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.current
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// One committed row.
    pub fn row(&self, row: usize) -> &[bool] {
        let start = wrap(row as isize, self.rows) * self.cols;
        &self.current[start..start + self.cols]
    }

    /// Committed cells as a flat row-major slice.
    pub fn cells(&self) -> &[bool] {
        &self.current
    }

    /// Borrow the committed buffer for reading and the next buffer for writing.
    ///
    /// Filling the next buffer publishes nothing on its own. Only the stepper
    /// commits, after every cell has been written:
    ///
    /// ```compile_fail
    /// use term_life_core::Grid;
    ///
    /// let mut grid = Grid::new(3, 3);
    /// grid.commit();
    /// ```
    pub fn split(&mut self) -> (Snapshot<'_>, NextBuffer<'_>) {
        let snapshot = Snapshot {
            rows: self.rows,
            cols: self.cols,
            cells: &self.current,
        };
        let next = NextBuffer {
            cols: self.cols,
            cells: &mut self.next,
        };
        (snapshot, next)
    }

    /// Make the next buffer current. Callers must have written every cell
    /// through [`Grid::split`] first.
    pub(crate) fn commit(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }
}

/// Read-only view of a committed generation.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    rows: usize,
    cols: usize,
    cells: &'a [bool],
}

impl<'a> Snapshot<'a> {
    pub fn of(grid: &'a Grid) -> Self {
        Self {
            rows: grid.rows,
            cols: grid.cols,
            cells: &grid.current,
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: isize, col: isize) -> bool {
        self.cells[wrap(row, self.rows) * self.cols + wrap(col, self.cols)]
    }

    pub fn neighbor_count(&self, row: isize, col: isize) -> u8 {
        // In range first, so adding an offset cannot overflow.
        let (r, c) = (wrap(row, self.rows) as isize, wrap(col, self.cols) as isize);
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| self.get(r + dr, c + dc))
            .count() as u8
    }
}

/// Write-only handle over the generation being computed.
#[derive(Debug)]
pub struct NextBuffer<'a> {
    cols: usize,
    cells: &'a mut [bool],
}

impl NextBuffer<'_> {
    /// Record the next state of an in-range cell.
    #[inline(always)]
    pub fn write(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[row * self.cols + col] = alive;
    }
}
