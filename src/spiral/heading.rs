// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Travel direction of the spiral cursor.

/// Compass heading on the grid. `y` grows downward, so `South` is `+y`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Heading {
    East,
    South,
    West,
    North,
}

impl Heading {
    /// Next heading in clockwise turn order (E → S → W → N → E).
    #[inline]
    pub const fn turn(self) -> Self {
        match self {
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
            Heading::North => Heading::East,
        }
    }

    /// Unit step `(dx, dy)`.
    #[inline]
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
            Heading::North => (0, -1),
        }
    }

    /// Apply one step to `(x, y)`.
    #[inline]
    pub const fn advance(self, (x, y): (i16, i16)) -> (i16, i16) {
        let (dx, dy) = self.delta();
        (x + dx, y + dy)
    }
}
