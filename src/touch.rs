// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Touch overlay decoding.
//!
//! The capacitive controllers report one bitmask for the touched columns and one for the touched
//! rows. Every touched column is paired with every touched row, so two fingers on different rows
//! and columns also report the two "ghost" crossings; callers treat the list as a set of
//! candidate cells.
//!
//! Sensing itself lives outside this crate. [`TouchScanner::scan`] is fed the raw masks and a
//! timestamp from the main loop.

use heapless::Vec;

use crate::config::{TOUCH_FALLBACK, TOUCH_POLL_INTERVAL_MS};
use crate::grid::MAX_CELLS;

/// A touched cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Touch {
    pub x: u8,
    pub y: u8,
}

impl Touch {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// True if this touch is exactly `(x, y)`.
    #[inline]
    pub fn check(&self, x: u8, y: u8) -> bool {
        self.x == x && self.y == y
    }

    /// True if this touch lies in the `w × h` area with top-left corner `(x, y)`.
    #[inline]
    pub fn check_bounds(&self, x: u8, y: u8, w: u8, h: u8) -> bool {
        let (px, py) = (self.x as u16, self.y as u16);
        px >= x as u16 && px < x as u16 + w as u16 && py >= y as u16 && py < y as u16 + h as u16
    }
}

/// Rate-limited decoder for the row/column touch masks.
pub struct TouchScanner {
    side: u8,
    touches: Vec<Touch, MAX_CELLS>,

    /// Timestamp of the last accepted scan (ms).
    last_scan_ms: u32,
    /// Minimum time until the next scan is accepted (ms).
    next_scan_delta_ms: u32,

    /// True when the current touches started on the latest scan.
    first_touch: bool,
}

impl TouchScanner {
    /// Create a scanner for a `side × side` overlay. Sides above 16 are capped by the mask width.
    pub fn new(side: u8) -> Self {
        Self {
            side: side.min(u16::BITS as u8),
            touches: Vec::new(),
            last_scan_ms: 0,
            next_scan_delta_ms: 0,
            first_touch: false,
        }
    }

    /// Hold off the next scan for `period_ms`, e.g. while a sound plays. Applies to one scan,
    /// after which the regular poll interval returns.
    pub fn delay_next_touch(&mut self, period_ms: u32) {
        self.next_scan_delta_ms = period_ms;
    }

    /// Decode a new pair of masks. Bit `i` of `columns` is column `x = i`, bit `j` of `rows` is
    /// row `y = j`.
    ///
    /// Returns the number of touched cells, or 0 if called again before the poll interval
    /// elapsed. A skipped scan leaves the previous touches in place.
    pub fn scan(&mut self, now_ms: u32, columns: u16, rows: u16) -> usize {
        if now_ms.wrapping_sub(self.last_scan_ms) < self.next_scan_delta_ms {
            return 0;
        }
        self.next_scan_delta_ms = TOUCH_POLL_INTERVAL_MS;
        self.last_scan_ms = now_ms;

        self.first_touch = self.touches.is_empty();
        self.touches.clear();

        if columns == 0 || rows == 0 {
            return 0;
        }

        for x in 0..self.side {
            if columns & (1u16 << x) == 0 {
                continue;
            }
            for y in 0..self.side {
                if rows & (1u16 << y) != 0 {
                    // Capacity covers every cell of the largest overlay.
                    let _ = self.touches.push(Touch::new(x, y));
                }
            }
        }

        self.touches.len()
    }

    /// Touches decoded on the last accepted scan.
    #[inline]
    pub fn touches(&self) -> &[Touch] {
        &self.touches
    }

    /// Touch number `index`, or the matrix centre if there is none.
    pub fn touch(&self, index: usize) -> Touch {
        self.touches
            .get(index)
            .copied()
            .unwrap_or(Touch::new(TOUCH_FALLBACK.0, TOUCH_FALLBACK.1))
    }

    /// True if `(x, y)` was pressed on the latest scan. Held touches don't count.
    pub fn pressed(&self, x: u8, y: u8) -> bool {
        self.first_touch && self.touches.iter().any(|t| t.check(x, y))
    }

    /// True if any cell of the `w × h` area at `(x, y)` was pressed on the latest scan.
    pub fn pressed_area(&self, x: u8, y: u8, w: u8, h: u8) -> bool {
        self.first_touch && self.touches.iter().any(|t| t.check_bounds(x, y, w, h))
    }
}
