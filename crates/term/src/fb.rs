//! Character-cell framebuffer for terminal rendering.
//!
//! Addressed as (x, y) = (column, row). Writes outside the buffer are dropped,
//! so drawing code can clip by simply writing.

/// What a cell depicts; the renderer maps each ink to terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ink {
    #[default]
    Blank,
    Alive,
    Dead,
    Status,
    Banner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub ink: Ink,
}

impl Cell {
    pub const BLANK: Cell = Cell::new(' ', Ink::Blank);

    pub const fn new(ch: char, ink: Ink) -> Self {
        Self { ch, ink }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the dimensions in place. Callers clear before drawing; the
    /// contents are not preserved in any meaningful layout.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) != (width, height) {
            self.width = width;
            self.height = height;
            self.cells
                .resize(usize::from(width) * usize::from(height), Cell::BLANK);
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.offset(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Cells of row `y`; empty when out of range.
    pub fn row(&self, y: u16) -> &[Cell] {
        match self.offset(0, y) {
            Some(start) => &self.cells[start..start + usize::from(self.width)],
            None => &[],
        }
    }

    /// Write `s` rightwards from (x, y), clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, ink: Ink) {
        let room = self.width.saturating_sub(x);
        for (dx, ch) in (0..room).zip(s.chars()) {
            self.set(x + dx, y, Cell::new(ch, ink));
        }
    }

    /// Characters of row `y` as a string.
    pub fn line(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }
}
