// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Touch-driven spiral playback.
//!
//! [`SpiralPlayer`] connects the three collaborators of the main loop: touches seed a new spiral,
//! a [`Clock`] paces it, and each due step is handed to a [`CellSink`], which owns colours and
//! physical LED placement.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! if scanner.scan(clock.now_ms(), cols, rows) > 0 {
//!     player.on_touch(scanner.touch(0), &clock);
//! }
//! player.update(&clock, &mut display);
//! ```

use log::warn;

use crate::config::SpiralConfig;
use crate::error::Error;
use crate::spiral::SpiralMapper;
use crate::touch::Touch;

/// Monotonic millisecond time source. Wraps at `u32::MAX`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

/// Consumer of linear cell indices, e.g. the matrix renderer.
pub trait CellSink {
    fn light_cell(&mut self, index: u16);
}

/// Plays one spiral at a time, restarting it from every new touch.
pub struct SpiralPlayer {
    mapper: SpiralMapper,
    cycle_delay_ms: u32,
}

impl SpiralPlayer {
    pub fn new(config: &SpiralConfig) -> Result<Self, Error> {
        Ok(Self {
            mapper: SpiralMapper::from_config(config)?,
            cycle_delay_ms: config.cycle_delay_ms,
        })
    }

    /// Set the step delay used for spirals started after this call.
    pub fn set_cycle_delay(&mut self, ms: u32) {
        self.cycle_delay_ms = ms;
    }

    /// Start a spiral at `touch`. An invalid touch leaves the player idle.
    pub fn on_touch<C: Clock>(&mut self, touch: Touch, clock: &C) -> Result<(), Error> {
        let res = self
            .mapper
            .generate_spiral(touch.x, touch.y, self.cycle_delay_ms, clock.now_ms());
        if let Err(e) = res {
            warn!("touch ({}, {}) ignored, going idle: {}", touch.x, touch.y, e);
            self.mapper.clear();
        }
        res
    }

    /// Forward the next cell to `sink` if one is due. Returns the cell that was lit.
    pub fn update<C: Clock, S: CellSink>(&mut self, clock: &C, sink: &mut S) -> Option<u16> {
        let cell = self.mapper.poll(clock.now_ms())?;
        sink.light_cell(cell);
        Some(cell)
    }

    /// Stop playback.
    pub fn stop(&mut self) {
        self.mapper.clear();
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.mapper.has_spiral()
    }

    #[inline]
    pub fn mapper(&self) -> &SpiralMapper {
        &self.mapper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::END_OF_CYCLE_DELAY_MS;
    use core::cell::Cell;
    use std::vec::Vec;

    struct FakeClock(Cell<u32>);

    impl FakeClock {
        fn new(ms: u32) -> Self {
            Self(Cell::new(ms))
        }
        fn set(&self, ms: u32) {
            self.0.set(ms);
        }
    }

    impl Clock for FakeClock {
        fn now_ms(&self) -> u32 {
            self.0.get()
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<u16>);

    impl CellSink for Recorder {
        fn light_cell(&mut self, index: u16) {
            self.0.push(index);
        }
    }

    fn player() -> SpiralPlayer {
        SpiralPlayer::new(&SpiralConfig::default().with_cycle_delay(10)).unwrap()
    }

    #[test]
    fn idle_player_draws_nothing() {
        let mut p = player();
        let clock = FakeClock::new(1_000);
        let mut sink = Recorder::default();

        assert!(!p.is_playing());
        assert_eq!(p.update(&clock, &mut sink), None);
        assert!(sink.0.is_empty());
    }

    #[test]
    fn plays_corner_spiral_with_end_pause() {
        let mut p = player();
        let clock = FakeClock::new(0);
        let mut sink = Recorder::default();

        p.on_touch(Touch::new(0, 0), &clock).unwrap();
        assert!(p.is_playing());

        for t in 1..=6 {
            clock.set(t * 10);
            assert!(p.update(&clock, &mut sink).is_some());
        }
        assert_eq!(sink.0, [0, 1, 13, 12, 0, 1]);

        // Wrap step is due on the regular cadence, the one after it waits for the pause.
        clock.set(70);
        assert_eq!(p.update(&clock, &mut sink), Some(0));
        assert_eq!(p.mapper().cycle_update_delay_ms(), END_OF_CYCLE_DELAY_MS);

        clock.set(80);
        assert_eq!(p.update(&clock, &mut sink), None);
        clock.set(70 + END_OF_CYCLE_DELAY_MS);
        assert_eq!(p.update(&clock, &mut sink), Some(1));
    }

    #[test]
    fn new_touch_restarts_from_the_new_seed() {
        let mut p = player();
        let clock = FakeClock::new(0);
        let mut sink = Recorder::default();

        p.on_touch(Touch::new(5, 5), &clock).unwrap();
        clock.set(10);
        p.update(&clock, &mut sink);
        clock.set(20);
        p.update(&clock, &mut sink);
        assert_eq!(sink.0, [65, 66]);

        p.on_touch(Touch::new(0, 0), &clock).unwrap();
        clock.set(30);
        p.update(&clock, &mut sink);
        assert_eq!(sink.0, [65, 66, 0]);
    }

    #[test]
    fn invalid_touch_goes_idle() {
        let mut p = player();
        let clock = FakeClock::new(0);

        p.on_touch(Touch::new(5, 5), &clock).unwrap();
        assert_eq!(
            p.on_touch(Touch::new(0xFF, 0xFF), &clock),
            Err(Error::InvalidSeed { x: 0xFF, y: 0xFF })
        );
        assert!(!p.is_playing());
    }

    #[test]
    fn cycle_delay_applies_to_next_spiral() {
        let mut p = player();
        let clock = FakeClock::new(0);
        let mut sink = Recorder::default();

        p.set_cycle_delay(50);
        p.on_touch(Touch::new(3, 3), &clock).unwrap();
        clock.set(49);
        assert_eq!(p.update(&clock, &mut sink), None);
        clock.set(50);
        assert_eq!(p.update(&clock, &mut sink), Some(39));

        p.stop();
        assert!(!p.is_playing());
    }
}
