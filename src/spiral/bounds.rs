// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Bounding box that steers where the spiral turns.
//!
//! The outward phase grows the box one edge at a time; the inward phase shrinks it. Coordinates
//! are signed because the outward box may overhang the grid by one cell before the phase ends.

use super::heading::Heading;
use crate::grid::Grid;

/// Inclusive rectangle `[min_x, max_x] × [min_y, max_y]`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Bounds {
    pub min_x: i16,
    pub max_x: i16,
    pub min_y: i16,
    pub max_y: i16,
}

impl Bounds {
    /// Box covering a single cell.
    pub const fn point(x: i16, y: i16) -> Self {
        Self {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        }
    }

    #[inline]
    pub fn contains(&self, (x, y): (i16, i16)) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Push out the edge the cursor just crossed.
    pub fn grow(&mut self, heading: Heading) {
        match heading {
            Heading::East => self.max_x += 1,
            Heading::South => self.max_y += 1,
            Heading::West => self.min_x -= 1,
            Heading::North => self.min_y -= 1,
        }
    }

    /// Pull in one edge after the cursor crossed the box on `heading`: East raises `min_x`,
    /// South raises `min_y`, West lowers `max_x`, North lowers `max_y`.
    pub fn shrink(&mut self, heading: Heading) {
        match heading {
            Heading::East => self.min_x += 1,
            Heading::South => self.min_y += 1,
            Heading::West => self.max_x -= 1,
            Heading::North => self.max_y -= 1,
        }
    }

    /// Clamp a position into the box.
    ///
    /// Never panics: on a collapsed box the `max` edge wins.
    #[inline]
    pub fn clamp(&self, (x, y): (i16, i16)) -> (i16, i16) {
        (
            x.max(self.min_x).min(self.max_x),
            y.max(self.min_y).min(self.max_y),
        )
    }

    /// Intersect with the grid's extent.
    pub fn clamp_to(&self, grid: &Grid) -> Self {
        let last = grid.last();
        Self {
            min_x: self.min_x.clamp(0, last),
            max_x: self.max_x.clamp(0, last),
            min_y: self.min_y.clamp(0, last),
            max_y: self.max_y.clamp(0, last),
        }
    }

    /// True if any edge lies outside the grid.
    #[inline]
    pub fn exceeds(&self, grid: &Grid) -> bool {
        let last = grid.last();
        self.min_x < 0 || self.max_x > last || self.min_y < 0 || self.max_y > last
    }

    /// True once the box has no cells left.
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_moves_the_crossed_edge() {
        let mut b = Bounds::point(5, 5);
        b.grow(Heading::East);
        b.grow(Heading::South);
        b.grow(Heading::West);
        b.grow(Heading::North);
        assert_eq!(
            b,
            Bounds {
                min_x: 4,
                max_x: 6,
                min_y: 4,
                max_y: 6
            }
        );
    }

    #[test]
    fn shrink_collapses_a_single_cell() {
        let mut b = Bounds::point(2, 2);
        b.shrink(Heading::South);
        assert!(b.is_collapsed());

        let mut b = Bounds {
            min_x: 0,
            max_x: 3,
            min_y: 0,
            max_y: 3,
        };
        b.shrink(Heading::East);
        b.shrink(Heading::West);
        assert_eq!((b.min_x, b.max_x), (1, 2));
        assert!(!b.is_collapsed());
    }

    #[test]
    fn exceeds_and_clamp_to_grid() {
        let grid = Grid::new(12).unwrap();
        let b = Bounds {
            min_x: -1,
            max_x: 11,
            min_y: 0,
            max_y: 12,
        };
        assert!(b.exceeds(&grid));
        let c = b.clamp_to(&grid);
        assert!(!c.exceeds(&grid));
        assert_eq!(
            c,
            Bounds {
                min_x: 0,
                max_x: 11,
                min_y: 0,
                max_y: 11
            }
        );
    }

    #[test]
    fn collapsed_box_clamps_without_panicking() {
        let b = Bounds {
            min_x: 3,
            max_x: 2,
            min_y: 0,
            max_y: 0,
        };
        assert!(b.is_collapsed());
        assert_eq!(b.clamp((7, 9)), (2, 0));
    }
}
