// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Switched supply rails.
//!
//! The matrix supply and the amplifier shutdown line are plain GPIO-driven switches. The wrapper
//! remembers the rail's active level and its last state so repeated requests don't touch the pin.

use embedded_hal::digital::v2::OutputPin;

/// Whether the rail is enabled by driving the pin high or low.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

/// GPIO-controlled power rail, initialized OFF.
pub struct PowerRail<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    is_on: bool,
}

impl<PIN: OutputPin> PowerRail<PIN> {
    pub fn new(mut pin: PIN, active: ActiveLevel) -> Self {
        match active {
            ActiveLevel::High => pin.set_low().ok(),
            ActiveLevel::Low => pin.set_high().ok(),
        };
        Self {
            pin,
            active,
            is_on: false,
        }
    }

    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    pub fn active_low(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    /// Switch the rail. Only drives the pin when the state changes.
    pub fn set(&mut self, on: bool) {
        if self.is_on == on {
            return;
        }
        match (self.active, on) {
            (ActiveLevel::High, true) | (ActiveLevel::Low, false) => self.pin.set_high().ok(),
            (ActiveLevel::High, false) | (ActiveLevel::Low, true) => self.pin.set_low().ok(),
        };
        self.is_on = on;
    }

    #[inline]
    pub fn enable(&mut self) {
        self.set(true);
    }

    #[inline]
    pub fn disable(&mut self) {
        self.set(false);
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    /// Pin that records every level written to it.
    #[derive(Default)]
    struct MockPin {
        writes: std::vec::Vec<bool>,
    }

    impl OutputPin for MockPin {
        type Error = Infallible;

        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.writes.push(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.writes.push(true);
            Ok(())
        }
    }

    #[test]
    fn starts_off_at_inactive_level() {
        let rail = PowerRail::active_high(MockPin::default());
        assert!(!rail.is_on());
        assert_eq!(rail.free().writes, [false]);

        let rail = PowerRail::active_low(MockPin::default());
        assert_eq!(rail.free().writes, [true]);
    }

    #[test]
    fn only_writes_on_change() {
        let mut rail = PowerRail::active_high(MockPin::default());
        rail.enable();
        rail.enable();
        assert!(rail.is_on());
        rail.disable();
        rail.disable();
        assert_eq!(rail.free().writes, [false, true, false]);
    }

    #[test]
    fn active_low_inverts() {
        let mut rail = PowerRail::active_low(MockPin::default());
        rail.enable();
        rail.disable();
        assert_eq!(rail.free().writes, [true, false, true]);
    }
}
