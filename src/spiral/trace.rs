// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! The two phases of spiral construction.
//!
//! [`trace_outward`] walks concentric rings out from the seed until the bounding box leaves the
//! grid. [`trace_inward`] picks up where it stopped, with fresh visited markers, and winds back in
//! until the box collapses. The phases only share the [`PhaseBoundary`].
//!
//! The outward phase stops as soon as the box overhangs the grid on any side, even if cells near
//! the opposite edge were never reached. The inward phase then starts from the clamped box, so
//! for seeds near an edge the spiral covers only part of the grid.

use heapless::Vec;
use log::debug;

use super::bounds::Bounds;
use super::heading::Heading;
use crate::error::Error;
use crate::grid::{Grid, VisitedMap, MAX_CELLS};

/// Linear cell indices produced by one phase.
pub type Trail = Vec<u16, MAX_CELLS>;

/// Cursor state handed from the outward to the inward phase.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PhaseBoundary {
    /// Box at the end of the outward phase. May overhang the grid by one cell.
    pub bounds: Bounds,
    /// Heading the inward phase continues with.
    pub heading: Heading,
    /// Last cursor position, clamped into `bounds`.
    pub position: (i16, i16),
}

/// Result of the outward phase.
#[derive(Clone, Debug)]
pub struct Outward {
    pub cells: Trail,
    pub boundary: PhaseBoundary,
}

/// Mark `pos` and append it, unless it is off-grid or already marked.
fn record(
    grid: &Grid,
    visited: &mut VisitedMap,
    trail: &mut Trail,
    (x, y): (i16, i16),
) -> Result<bool, Error> {
    if !visited.visit(x, y) {
        return Ok(false);
    }
    trail
        .push(grid.index(x as u8, y as u8))
        .map_err(|_| Error::PathOverflow)?;
    Ok(true)
}

/// Spiral outward from `(x, y)` until the bounding box leaves the grid.
pub fn trace_outward(grid: &Grid, x: u8, y: u8) -> Result<Outward, Error> {
    grid.check(x, y)?;

    let mut visited = VisitedMap::new(*grid);
    let mut cells = Trail::new();

    let mut pos = (x as i16, y as i16);
    let mut bounds = Bounds::point(pos.0, pos.1);
    let mut heading = Heading::East;

    record(grid, &mut visited, &mut cells, pos)?;

    loop {
        pos = heading.advance(pos);

        if !bounds.contains(pos) {
            bounds.grow(heading);
            // Corner cell; skipped when it lies past the grid edge.
            record(grid, &mut visited, &mut cells, pos)?;

            heading = heading.turn();
            pos = bounds.clamp(pos);

            if bounds.exceeds(grid) {
                break;
            }
            continue;
        }

        // Closed on itself.
        if visited.is_visited(pos.0, pos.1) {
            break;
        }
        record(grid, &mut visited, &mut cells, pos)?;
    }

    Ok(Outward {
        cells,
        boundary: PhaseBoundary {
            bounds,
            heading,
            position: pos,
        },
    })
}

/// Spiral inward from `boundary` until the bounding box collapses.
pub fn trace_inward(grid: &Grid, boundary: PhaseBoundary) -> Result<Trail, Error> {
    let mut visited = VisitedMap::new(*grid);
    let mut cells = Trail::new();

    let mut bounds = boundary.bounds.clamp_to(grid);
    let mut pos = bounds.clamp(boundary.position);
    let mut heading = boundary.heading;

    debug!(
        "inward spiral from ({}, {}) box x {}..={} y {}..={}",
        pos.0, pos.1, bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y
    );

    while !bounds.is_collapsed() {
        pos = heading.advance(pos);

        if !bounds.contains(pos) {
            bounds.shrink(heading);
            if bounds.contains(pos) {
                record(grid, &mut visited, &mut cells, pos)?;
            }

            heading = heading.turn();
            pos = bounds.clamp(pos);
            continue;
        }

        // Already-visited cells inside the box are stepped over.
        record(grid, &mut visited, &mut cells, pos)?;
    }

    Ok(cells)
}
