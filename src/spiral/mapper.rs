// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Spiral path generation and real-time playback.
//!
//! A [`SpiralMapper`] owns one generated path and a playback cursor over it. The owner polls it
//! from the main update loop:
//!
//! ```ignore
//! mapper.generate_spiral(touch.x, touch.y, 100, clock.now_ms())?;
//!
//! loop {
//!     if let Some(cell) = mapper.poll(clock.now_ms()) {
//!         display.light_cell(cell);
//!     }
//! }
//! ```
//!
//! The path replays forever. After the last cell the cursor wraps and the next step is held back
//! by the longer end-of-cycle pause, so the animation visibly rests before starting over.

use heapless::Vec;
use log::{info, warn};

use super::trace::{trace_inward, trace_outward};
use crate::config::{SpiralConfig, DEFAULT_CYCLE_DELAY_MS, END_OF_CYCLE_DELAY_MS};
use crate::error::Error;
use crate::grid::{Grid, MAX_CELLS};

/// Longest possible path: every cell once per phase.
pub const MAX_PATH: usize = 2 * MAX_CELLS;

/// Full spiral path, outward phase followed by inward phase.
pub type Path = Vec<u16, MAX_PATH>;

/// Spiral generator and playback cursor.
pub struct SpiralMapper {
    grid: Grid,

    path: Path,
    /// Number of leading path cells that belong to the outward phase.
    outward_len: usize,

    /// Index of the next cell to hand out, in `0..=path.len()`.
    current_index: usize,

    /// Delay the caller should wait before the next step (ms).
    cycle_update_delay_ms: u32,
    /// Configured steady-state delay (ms).
    cycle_delay_ms: u32,
    /// Delay applied at the wrap back to the first cell (ms).
    end_of_cycle_delay_ms: u32,
    /// Timestamp of the last step, or of generation (ms).
    last_update_ms: u32,

    initialized: bool,
}

impl SpiralMapper {
    /// Create an idle mapper for a `side × side` grid.
    pub fn new(side: usize) -> Result<Self, Error> {
        Ok(Self {
            grid: Grid::new(side)?,
            path: Path::new(),
            outward_len: 0,
            current_index: 0,
            cycle_update_delay_ms: DEFAULT_CYCLE_DELAY_MS,
            cycle_delay_ms: DEFAULT_CYCLE_DELAY_MS,
            end_of_cycle_delay_ms: END_OF_CYCLE_DELAY_MS,
            last_update_ms: 0,
            initialized: false,
        })
    }

    /// Create an idle mapper from playback settings.
    pub fn from_config(config: &SpiralConfig) -> Result<Self, Error> {
        Ok(Self::new(config.grid_side as usize)?
            .with_end_of_cycle_delay(config.end_of_cycle_delay_ms))
    }

    /// Set the pause applied at the end of each full traversal.
    pub fn with_end_of_cycle_delay(mut self, ms: u32) -> Self {
        self.end_of_cycle_delay_ms = ms;
        self
    }

    /// Build a new spiral seeded at `(start_x, start_y)` and rewind playback.
    ///
    /// `cycle_delay_ms` is the steady-state delay between steps and `now_ms` the current time,
    /// recorded as the last step. On error the mapper keeps its previous path and cursor.
    pub fn generate_spiral(
        &mut self,
        start_x: u8,
        start_y: u8,
        cycle_delay_ms: u32,
        now_ms: u32,
    ) -> Result<(), Error> {
        let outward = match trace_outward(&self.grid, start_x, start_y) {
            Ok(outward) => outward,
            Err(e) => {
                warn!("spiral rejected: {}", e);
                return Err(e);
            }
        };
        let inward = trace_inward(&self.grid, outward.boundary)?;

        let mut path = Path::new();
        path.extend_from_slice(&outward.cells)
            .map_err(|_| Error::PathOverflow)?;
        path.extend_from_slice(&inward)
            .map_err(|_| Error::PathOverflow)?;

        info!(
            "spiral @ ({}, {}): {} outward + {} inward cells",
            start_x,
            start_y,
            outward.cells.len(),
            inward.len()
        );

        self.path = path;
        self.outward_len = outward.cells.len();
        self.current_index = 0;
        self.cycle_delay_ms = cycle_delay_ms;
        self.cycle_update_delay_ms = cycle_delay_ms;
        self.last_update_ms = now_ms;
        self.initialized = true;

        Ok(())
    }

    /// Return the next cell of the path and advance the cursor.
    ///
    /// Past the last cell the cursor wraps to the first and the step delay becomes the
    /// end-of-cycle pause; every other step restores the configured delay.
    pub fn get_next_path_step(&mut self) -> Result<u16, Error> {
        if !self.has_spiral() {
            return Err(Error::EmptyPath);
        }

        if self.current_index >= self.path.len() {
            self.current_index = 0;
            self.cycle_update_delay_ms = self.end_of_cycle_delay_ms;
        } else {
            self.cycle_update_delay_ms = self.cycle_delay_ms;
        }

        let cell = self.path[self.current_index];
        self.current_index += 1;
        Ok(cell)
    }

    /// Is there a valid spiral path to follow?
    #[inline]
    pub fn has_spiral(&self) -> bool {
        self.initialized && !self.path.is_empty()
    }

    /// True if a spiral is loaded and its step delay has elapsed at `now_ms`.
    pub fn is_step_due(&self, now_ms: u32) -> bool {
        self.has_spiral() && now_ms.wrapping_sub(self.last_update_ms) >= self.cycle_update_delay_ms
    }

    /// Step the cursor if the delay has elapsed, stamping `now_ms` as the last step.
    pub fn poll(&mut self, now_ms: u32) -> Option<u16> {
        if !self.is_step_due(now_ms) {
            return None;
        }
        self.last_update_ms = now_ms;
        self.get_next_path_step().ok()
    }

    /// Drop the current spiral and return to the idle state.
    pub fn clear(&mut self) {
        self.path.clear();
        self.outward_len = 0;
        self.current_index = 0;
        self.cycle_update_delay_ms = self.cycle_delay_ms;
        self.initialized = false;
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whole path, outward then inward.
    #[inline]
    pub fn path(&self) -> &[u16] {
        &self.path
    }

    /// Cells of the outward phase.
    pub fn outward(&self) -> &[u16] {
        &self.path[..self.outward_len]
    }

    /// Cells of the inward phase.
    pub fn inward(&self) -> &[u16] {
        &self.path[self.outward_len..]
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[inline]
    pub fn cycle_update_delay_ms(&self) -> u32 {
        self.cycle_update_delay_ms
    }

    #[inline]
    pub fn last_update_ms(&self) -> u32 {
        self.last_update_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> SpiralMapper {
        SpiralMapper::new(12).unwrap()
    }

    #[test]
    fn idle_until_generated() {
        let mut m = mapper();
        assert!(!m.has_spiral());
        assert_eq!(m.get_next_path_step(), Err(Error::EmptyPath));
        assert_eq!(m.poll(1_000), None);

        m.generate_spiral(5, 5, 40, 0).unwrap();
        assert!(m.has_spiral());
    }

    #[test]
    fn rejects_zero_side() {
        assert_eq!(SpiralMapper::new(0).err(), Some(Error::InvalidGridSize(0)));
    }

    #[test]
    fn steps_in_order_then_wraps_with_pause() {
        let mut m = mapper();
        m.generate_spiral(0, 0, 40, 0).unwrap();

        let expected = [0, 1, 13, 12, 0, 1];
        assert_eq!(m.path(), &expected);

        for &cell in &expected {
            assert_eq!(m.get_next_path_step(), Ok(cell));
            assert_eq!(m.cycle_update_delay_ms(), 40);
        }
        assert_eq!(m.current_index(), expected.len());

        assert_eq!(m.get_next_path_step(), Ok(0));
        assert_eq!(m.cycle_update_delay_ms(), END_OF_CYCLE_DELAY_MS);
        assert_eq!(m.current_index(), 1);

        assert_eq!(m.get_next_path_step(), Ok(1));
        assert_eq!(m.cycle_update_delay_ms(), 40);
    }

    #[test]
    fn custom_end_of_cycle_pause() {
        let mut m = mapper().with_end_of_cycle_delay(1_000);
        m.generate_spiral(11, 11, 20, 0).unwrap();

        assert_eq!(m.get_next_path_step(), Ok(143));
        assert_eq!(m.cycle_update_delay_ms(), 20);
        assert_eq!(m.get_next_path_step(), Ok(143));
        assert_eq!(m.cycle_update_delay_ms(), 1_000);
    }

    #[test]
    fn regenerate_mid_playback_resets_cursor() {
        let mut m = mapper();
        m.generate_spiral(5, 5, 40, 0).unwrap();
        for _ in 0..30 {
            m.get_next_path_step().unwrap();
        }
        assert_eq!(m.current_index(), 30);

        m.generate_spiral(0, 0, 60, 500).unwrap();
        assert_eq!(m.current_index(), 0);
        assert_eq!(m.last_update_ms(), 500);
        assert_eq!(m.cycle_update_delay_ms(), 60);
        assert_eq!(m.path(), &[0, 1, 13, 12, 0, 1]);
        assert_eq!(m.outward(), &[0, 1, 13, 12]);
        assert_eq!(m.inward(), &[0, 1]);
        assert_eq!(m.get_next_path_step(), Ok(0));
    }

    #[test]
    fn invalid_seed_keeps_previous_spiral() {
        let mut m = mapper();
        m.generate_spiral(0, 0, 40, 0).unwrap();
        m.get_next_path_step().unwrap();

        assert_eq!(
            m.generate_spiral(12, 0, 40, 10),
            Err(Error::InvalidSeed { x: 12, y: 0 })
        );
        assert!(m.has_spiral());
        assert_eq!(m.current_index(), 1);
        assert_eq!(m.last_update_ms(), 0);
    }

    #[test]
    fn poll_waits_for_the_step_delay() {
        let mut m = mapper();
        m.generate_spiral(0, 0, 40, 100).unwrap();

        assert_eq!(m.poll(139), None);
        assert_eq!(m.poll(140), Some(0));
        assert_eq!(m.last_update_ms(), 140);
        assert_eq!(m.poll(150), None);
        assert_eq!(m.poll(180), Some(1));
    }

    #[test]
    fn poll_handles_timer_wraparound() {
        let mut m = mapper();
        m.generate_spiral(0, 0, 40, u32::MAX - 10).unwrap();

        assert_eq!(m.poll(20), None);
        assert_eq!(m.poll(29), Some(0));
    }

    #[test]
    fn clear_returns_to_idle() {
        let mut m = mapper();
        m.generate_spiral(5, 5, 40, 0).unwrap();
        m.clear();

        assert!(!m.has_spiral());
        assert!(m.path().is_empty());
        assert_eq!(m.get_next_path_step(), Err(Error::EmptyPath));
    }

    #[test]
    fn from_config_applies_grid_and_pause() {
        let config = SpiralConfig {
            grid_side: 4,
            ..SpiralConfig::default()
        }
        .with_end_of_cycle_delay(500);
        let mut m = SpiralMapper::from_config(&config).unwrap();
        assert_eq!(m.grid().side(), 4);

        m.generate_spiral(1, 1, 10, 0).unwrap();
        let len = m.path().len();
        assert_eq!(len, 28);
        for _ in 0..len {
            m.get_next_path_step().unwrap();
        }
        m.get_next_path_step().unwrap();
        assert_eq!(m.cycle_update_delay_ms(), 500);
    }
}
