// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Board constants and playback defaults for the RGB Touch Mini.

/// Side of the LED matrix and touch overlay.
pub const MATRIX_SIZE: u8 = 12;

/// Number of addressable LEDs on the matrix.
pub const NUM_LEDS: usize = MATRIX_SIZE as usize * MATRIX_SIZE as usize;

/// Steady-state delay between spiral steps (ms).
pub const DEFAULT_CYCLE_DELAY_MS: u32 = 100;

/// Pause after the last cell of a spiral before it replays (ms).
pub const END_OF_CYCLE_DELAY_MS: u32 = 250;

/// Minimum time between two touch scans (ms).
pub const TOUCH_POLL_INTERVAL_MS: u32 = 10;

/// Cell reported when a touch index is requested that was not scanned.
pub const TOUCH_FALLBACK: (u8, u8) = (5, 5);

/// Spiral playback settings.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SpiralConfig {
    /// Side of the square grid the spiral runs on.
    pub grid_side: u8,
    /// Delay between steps while a spiral plays (ms).
    pub cycle_delay_ms: u32,
    /// Delay applied once at the wrap from the last cell back to the first (ms).
    pub end_of_cycle_delay_ms: u32,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            grid_side: MATRIX_SIZE,
            cycle_delay_ms: DEFAULT_CYCLE_DELAY_MS,
            end_of_cycle_delay_ms: END_OF_CYCLE_DELAY_MS,
        }
    }
}

impl SpiralConfig {
    /// Set the steady-state step delay.
    pub fn with_cycle_delay(mut self, ms: u32) -> Self {
        self.cycle_delay_ms = ms;
        self
    }

    /// Set the end-of-cycle pause.
    pub fn with_end_of_cycle_delay(mut self, ms: u32) -> Self {
        self.end_of_cycle_delay_ms = ms;
        self
    }
}
