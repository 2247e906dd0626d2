//! The bounded cell matrix and the Game-of-Life step rule.
//!
//! # Layout
//!
//! Cells are stored row-major in a flat buffer sized exactly to the active
//! `columns x rows` extent. A second buffer of the same size receives each
//! new generation and is swapped in when the pass completes, so callers
//! never observe a half-computed generation and no allocation happens on
//! the hot path.
//!
//! # Boundary
//!
//! The grid does not wrap. Any neighbor coordinate outside the active
//! extent counts as dead, so edge cells see at most 5 neighbors and corner
//! cells at most 3.

use tracing::info;

use crate::config::MIN_CELL_SIZE;
use crate::error::LifeError;
use crate::pattern::Pattern;

/// Column/row offsets of the 8 cells in the Moore neighborhood.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A fixed-size, non-wrapping Game-of-Life grid.
#[derive(Debug, Clone)]
pub struct LifeGrid {
    /// Cell edge in canvas pixels.
    cell_size: usize,

    /// Active width in cells.
    columns: usize,

    /// Active height in cells.
    rows: usize,

    /// Current generation, row-major.
    cells: Vec<bool>,

    /// Back buffer for the next generation. Contents are meaningless
    /// between steps.
    scratch: Vec<bool>,
}

impl LifeGrid {
    /// Build an all-dead grid covering a `canvas_width x canvas_height`
    /// pixel canvas with square cells of `cell_size` pixels.
    ///
    /// Uses integer division; any leftover pixels form an unused margin.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::InvalidConfiguration`] if `cell_size` is below
    /// [`MIN_CELL_SIZE`] or the canvas cannot hold a single cell.
    pub fn new(
        cell_size: usize,
        canvas_width: usize,
        canvas_height: usize,
    ) -> Result<Self, LifeError> {
        if cell_size < MIN_CELL_SIZE {
            return Err(LifeError::invalid(format!(
                "cell size must be greater than or equal to {MIN_CELL_SIZE}, got {cell_size}"
            )));
        }

        let columns = canvas_width.checked_div(cell_size).unwrap_or(0);
        let rows = canvas_height.checked_div(cell_size).unwrap_or(0);
        if columns == 0 || rows == 0 {
            return Err(LifeError::invalid(format!(
                "canvas {canvas_width}x{canvas_height} is too small for cell size {cell_size}"
            )));
        }

        let len = columns
            .checked_mul(rows)
            .ok_or_else(|| LifeError::invalid("grid dimensions overflow"))?;

        info!(cell_size, columns, rows, "Grid allocated");

        Ok(Self {
            cell_size,
            columns,
            rows,
            cells: vec![false; len],
            scratch: vec![false; len],
        })
    }

    /// Return the cell edge in canvas pixels.
    pub const fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// Return the active width in cells.
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Return the active height in cells.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Return whether the cell at `(col, row)` is alive.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::OutOfBounds`] if the coordinate is outside the grid.
    pub fn is_alive(&self, col: usize, row: usize) -> Result<bool, LifeError> {
        let idx = self.index(col, row)?;
        Ok(self.cells.get(idx).copied().unwrap_or(false))
    }

    /// Set the cell at `(col, row)` to the given state.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::OutOfBounds`] if the coordinate is outside the grid.
    pub fn set_alive(&mut self, col: usize, row: usize, alive: bool) -> Result<(), LifeError> {
        let idx = self.index(col, row)?;
        if let Some(cell) = self.cells.get_mut(idx) {
            *cell = alive;
        }
        Ok(())
    }

    /// Flip the cell at `(col, row)` and return its new state.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::OutOfBounds`] if the coordinate is outside the grid.
    pub fn toggle_cell(&mut self, col: usize, row: usize) -> Result<bool, LifeError> {
        let idx = self.index(col, row)?;
        let cell = self
            .cells
            .get_mut(idx)
            .ok_or_else(|| out_of_bounds(col, row, self.columns, self.rows))?;
        *cell = !*cell;
        Ok(*cell)
    }

    /// Count live cells in the Moore neighborhood of `(col, row)`.
    ///
    /// Neighbors beyond the grid edge count as dead. The result is always
    /// in `0..=8`.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::OutOfBounds`] if `(col, row)` itself is outside
    /// the grid.
    pub fn count_live_neighbors(&self, col: usize, row: usize) -> Result<u8, LifeError> {
        self.index(col, row)?;
        Ok(self.live_neighbors(col, row))
    }

    /// Advance every cell by one generation.
    ///
    /// A live cell survives with 2 or 3 live neighbors; a dead cell is born
    /// with exactly 3. All counts are taken against the current generation.
    pub fn step(&mut self) {
        let mut next = std::mem::take(&mut self.scratch);
        for (row, out) in next.chunks_mut(self.columns).enumerate() {
            for (col, slot) in out.iter_mut().enumerate() {
                *slot = self.next_state(col, row);
            }
        }
        self.scratch = std::mem::replace(&mut self.cells, next);
    }

    /// Kill every cell. Dimensions are unchanged.
    pub fn reset(&mut self) {
        self.cells.fill(false);
    }

    /// Return one row of cells, or `None` if `row` is outside the grid.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.rows {
            return None;
        }
        let start = row.checked_mul(self.columns)?;
        let end = start.checked_add(self.columns)?;
        self.cells.get(start..end)
    }

    /// Iterate over all rows from top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.columns)
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Return `true` if no cell is alive.
    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Bring every cell of `pattern` to life, offset by `(origin_col, origin_row)`.
    ///
    /// Cells already alive stay alive. The grid is untouched if any cell
    /// would land outside it.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::OutOfBounds`] for the first cell that does not fit.
    pub fn stamp(
        &mut self,
        pattern: &Pattern,
        origin_col: usize,
        origin_row: usize,
    ) -> Result<(), LifeError> {
        let mut targets = Vec::with_capacity(pattern.cells.len());
        for &(dc, dr) in pattern.cells {
            let col = origin_col.saturating_add(dc);
            let row = origin_row.saturating_add(dr);
            targets.push(self.index(col, row)?);
        }
        for idx in targets {
            if let Some(cell) = self.cells.get_mut(idx) {
                *cell = true;
            }
        }
        Ok(())
    }

    /// Origin that centers `pattern` on the grid, or `None` if it does not fit.
    pub fn centered_origin(&self, pattern: &Pattern) -> Option<(usize, usize)> {
        let spare_cols = self.columns.checked_sub(pattern.width())?;
        let spare_rows = self.rows.checked_sub(pattern.height())?;
        Some((spare_cols / 2, spare_rows / 2))
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Flat buffer index for `(col, row)`, or `None` outside the grid.
    fn offset(&self, col: usize, row: usize) -> Option<usize> {
        if col >= self.columns || row >= self.rows {
            return None;
        }
        row.checked_mul(self.columns)?.checked_add(col)
    }

    fn index(&self, col: usize, row: usize) -> Result<usize, LifeError> {
        self.offset(col, row)
            .ok_or_else(|| out_of_bounds(col, row, self.columns, self.rows))
    }

    /// Liveness of `(col, row)`, treating anything off-grid as dead.
    fn alive_at(&self, col: usize, row: usize) -> bool {
        self.offset(col, row)
            .and_then(|idx| self.cells.get(idx))
            .copied()
            .unwrap_or(false)
    }

    fn live_neighbors(&self, col: usize, row: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dc, dr)| {
                match (col.checked_add_signed(dc), row.checked_add_signed(dr)) {
                    (Some(c), Some(r)) => self.alive_at(c, r),
                    _ => false,
                }
            })
            .fold(0_u8, |count, _| count.saturating_add(1))
    }

    fn next_state(&self, col: usize, row: usize) -> bool {
        matches!(
            (self.alive_at(col, row), self.live_neighbors(col, row)),
            (true, 2 | 3) | (false, 3)
        )
    }
}

/// Two grids are equal when they have the same geometry and live cells.
impl PartialEq for LifeGrid {
    fn eq(&self, other: &Self) -> bool {
        self.cell_size == other.cell_size
            && self.columns == other.columns
            && self.rows == other.rows
            && self.cells == other.cells
    }
}

impl Eq for LifeGrid {}

const fn out_of_bounds(col: usize, row: usize, columns: usize, rows: usize) -> LifeError {
    LifeError::OutOfBounds {
        col,
        row,
        columns,
        rows,
    }
}
