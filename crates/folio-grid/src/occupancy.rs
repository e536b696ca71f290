//! Scratch occupancy grid for one placement pass.

/// Row-major grid of occupied cells with a fixed column count and rows that
/// grow on demand.
///
/// Lives for exactly one call to [`place`](crate::place) and is never shared.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    columns: usize,
    cells: Vec<bool>,
    /// One past the lowest row that holds an occupied cell.
    used_rows: usize,
}

impl OccupancyGrid {
    /// Create a grid with `columns` columns and room for `initial_rows` rows.
    ///
    /// `columns` is clamped to at least one. If the initial allocation would
    /// overflow, rows start empty and grow on demand.
    pub fn new(columns: usize, initial_rows: usize) -> Self {
        let columns = columns.max(1);
        Self {
            columns,
            cells: vec![false; columns.checked_mul(initial_rows).unwrap_or(0)],
            used_rows: 0,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Rows currently allocated.
    pub fn allocated_rows(&self) -> usize {
        self.cells.len() / self.columns
    }

    /// One past the lowest occupied row, zero when empty.
    pub fn used_rows(&self) -> usize {
        self.used_rows
    }

    fn ensure_rows(&mut self, rows: usize) {
        if rows > self.allocated_rows() {
            self.cells.resize(rows.saturating_mul(self.columns), false);
        }
    }

    /// Whether a single cell is occupied. Cells outside the grid are free.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        col < self.columns
            && self
                .cells
                .get(row * self.columns + col)
                .copied()
                .unwrap_or(false)
    }

    /// Whether a `width x height` footprint anchored at `(row, col)` lies
    /// within the columns and covers only free cells.
    pub fn fits(&self, row: usize, col: usize, width: usize, height: usize) -> bool {
        if width == 0 || height == 0 || col + width > self.columns {
            return false;
        }
        // Rows past the allocation are free by definition.
        (row..row + height).all(|r| (col..col + width).all(|c| !self.is_occupied(r, c)))
    }

    /// Mark a footprint occupied, growing rows as needed.
    ///
    /// The width is clamped to the column count.
    pub fn occupy(&mut self, row: usize, col: usize, width: usize, height: usize) {
        let col_end = (col + width).min(self.columns);
        self.ensure_rows(row + height);
        for r in row..row + height {
            for c in col..col_end {
                self.cells[r * self.columns + c] = true;
            }
        }
        if height > 0 && col < col_end {
            self.used_rows = self.used_rows.max(row + height);
        }
    }

    /// First free anchor for a footprint in row-major order (smallest row,
    /// then smallest column).
    ///
    /// Returns `None` when the footprint is wider than the grid. Otherwise
    /// always succeeds: every row at or below [`used_rows`](Self::used_rows)
    /// is empty.
    pub fn find_first_fit(&self, width: usize, height: usize) -> Option<(usize, usize)> {
        if width == 0 || height == 0 || width > self.columns {
            return None;
        }
        for row in 0..=self.used_rows {
            for col in 0..=self.columns - width {
                if self.fits(row, col, width, height) {
                    return Some((row, col));
                }
            }
        }
        // Unreachable in practice, row `used_rows` is always free.
        Some((self.used_rows, 0))
    }
}
