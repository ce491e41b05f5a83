// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Error type shared by the grid, spiral and playback layers.

use core::fmt;

/// Failures reported by grid construction, spiral generation and playback.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Grid side is zero or larger than [`MAX_SIDE`](crate::grid::MAX_SIDE).
    InvalidGridSize(usize),
    /// Seed cell lies outside the grid.
    InvalidSeed { x: u8, y: u8 },
    /// Step requested before a spiral was generated.
    EmptyPath,
    /// Path buffer is full. Each phase visits a cell at most once, so this only fires if the
    /// grid invariants are broken.
    PathOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidGridSize(side) => write!(f, "invalid grid side {}", side),
            Error::InvalidSeed { x, y } => write!(f, "seed ({}, {}) is outside the grid", x, y),
            Error::EmptyPath => f.write_str("no spiral path generated"),
            Error::PathOverflow => f.write_str("spiral path buffer overflow"),
        }
    }
}
