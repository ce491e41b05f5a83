// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Square cell grid shared by the LED matrix and the touch overlay.
//!
//! Cells are addressed as `(x, y)` with `x` the column and `y` the row. The linear index is
//! row-major and progressive: row 0 starts at 0, row 1 at `side`, and so on, matching the way the
//! matrix LEDs are chained.

use crate::error::Error;

/// Largest supported grid side. One `u16` row mask per row.
pub const MAX_SIDE: usize = 16;

/// Number of cells in the largest supported grid.
pub const MAX_CELLS: usize = MAX_SIDE * MAX_SIDE;

/// Square grid of `side × side` cells.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    side: u8,
}

impl Grid {
    /// Create a grid, rejecting a side of zero or above [`MAX_SIDE`].
    pub fn new(side: usize) -> Result<Self, Error> {
        if side == 0 || side > MAX_SIDE {
            return Err(Error::InvalidGridSize(side));
        }
        Ok(Self { side: side as u8 })
    }

    #[inline]
    pub fn side(&self) -> u8 {
        self.side
    }

    #[inline]
    pub fn cells(&self) -> usize {
        self.side as usize * self.side as usize
    }

    /// Signed coordinate of the last row/column.
    #[inline]
    pub(crate) fn last(&self) -> i16 {
        self.side as i16 - 1
    }

    /// True if `(x, y)` addresses a cell of this grid.
    #[inline]
    pub fn contains(&self, x: i16, y: i16) -> bool {
        x >= 0 && y >= 0 && x < self.side as i16 && y < self.side as i16
    }

    /// Reject coordinates outside the grid.
    pub fn check(&self, x: u8, y: u8) -> Result<(), Error> {
        if x < self.side && y < self.side {
            Ok(())
        } else {
            Err(Error::InvalidSeed { x, y })
        }
    }

    /// Linear index of `(x, y)`.
    #[inline]
    pub fn index(&self, x: u8, y: u8) -> u16 {
        debug_assert!(x < self.side && y < self.side);
        y as u16 * self.side as u16 + x as u16
    }

    /// Inverse of [`Grid::index`].
    #[inline]
    pub fn coords(&self, index: u16) -> (u8, u8) {
        let side = self.side as u16;
        ((index % side) as u8, (index / side) as u8)
    }
}

/// Per-phase visited markers, one bit per cell.
#[derive(Clone, Debug)]
pub struct VisitedMap {
    grid: Grid,
    rows: [u16; MAX_SIDE],
}

impl VisitedMap {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            rows: [0; MAX_SIDE],
        }
    }

    /// Forget every marker.
    pub fn reset(&mut self) {
        self.rows = [0; MAX_SIDE];
    }

    /// True if `(x, y)` was marked. Cells outside the grid never are.
    #[inline]
    pub fn is_visited(&self, x: i16, y: i16) -> bool {
        self.grid.contains(x, y) && self.rows[y as usize] & (1u16 << x) != 0
    }

    /// Mark `(x, y)`. Returns false if the cell is outside the grid or already marked.
    #[inline]
    pub fn visit(&mut self, x: i16, y: i16) -> bool {
        if !self.grid.contains(x, y) || self.is_visited(x, y) {
            return false;
        }
        self.rows[y as usize] |= 1u16 << x;
        true
    }

    /// Number of marked cells.
    pub fn count(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }
}
