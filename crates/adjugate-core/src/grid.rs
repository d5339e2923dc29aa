//! Fixed-size integer grid used as cell storage by maze front-ends.
//!
//! The grid is independent of the matrix engine. It only stores one `i32`
//! per cell; what a value means (wall flags, visited marks) is up to the
//! caller.

use crate::error::{CoreError, Result};

/// Smallest accepted height or width.
pub const MIN_GRID_MEASURE: usize = 1;

/// Largest accepted height or width.
pub const MAX_GRID_MEASURE: usize = 50;

/// A `height x width` grid of `i32` cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<i32>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Allocate a zero-filled grid.
    ///
    /// Both measures must lie in `MIN_GRID_MEASURE..=MAX_GRID_MEASURE`.
    ///
    /// ```
    /// # use adjugate_core::grid::Grid;
    /// let mut g = Grid::allocate(4, 6).unwrap();
    /// g.set(3, 5, 1).unwrap();
    /// assert_eq!(g.get(3, 5).unwrap(), 1);
    /// assert!(Grid::allocate(0, 6).is_err());
    /// ```
    pub fn allocate(height: usize, width: usize) -> Result<Self> {
        let measures = MIN_GRID_MEASURE..=MAX_GRID_MEASURE;
        if !measures.contains(&height) || !measures.contains(&width) {
            log::debug!("grid: rejected {height}x{width} allocation");
            return Err(CoreError::InvalidShape {
                rows: height,
                cols: width,
                reason: "grid measures must be between 1 and 50",
            });
        }
        Ok(Self {
            cells: vec![0; height * width],
            height,
            width,
        })
    }

    /// Free the cells and reset both measures to zero. Idempotent.
    pub fn release(&mut self) {
        self.cells = Vec::new();
        self.height = 0;
        self.width = 0;
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the grid has been released.
    #[inline]
    pub fn is_released(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<i32> {
        let flat = self.flat_index(row, col)?;
        Ok(self.cells[flat])
    }

    pub fn set(&mut self, row: usize, col: usize, value: i32) -> Result<()> {
        let flat = self.flat_index(row, col)?;
        self.cells[flat] = value;
        Ok(())
    }

    /// Reset every cell to zero.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    fn flat_index(&self, row: usize, col: usize) -> Result<usize> {
        if self.is_released() {
            return Err(CoreError::InvalidShape {
                rows: 0,
                cols: 0,
                reason: "grid has been released",
            });
        }
        if row >= self.height || col >= self.width {
            return Err(CoreError::IndexOutOfBounds {
                index: (row, col),
                shape: (self.height, self.width),
            });
        }
        Ok(row * self.width + col)
    }
}
