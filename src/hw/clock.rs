// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Millisecond time base on SysTick.
//!
//! The SysTick exception handler lives in the binary and calls [`tick`]; everything else reads
//! the counter through [`SysTickClock`].

use core::sync::atomic::{AtomicU32, Ordering};

use cortex_m::peripheral::{syst::SystClkSource, SYST};

use crate::playback::Clock;

static MILLIS: AtomicU32 = AtomicU32::new(0);

/// Advance the millisecond counter. Call once per SysTick interrupt.
#[inline]
pub fn tick() {
    MILLIS.fetch_add(1, Ordering::Relaxed);
}

/// Owns SysTick configured for a 1 kHz interrupt.
pub struct SysTickClock {
    _syst: SYST,
}

impl SysTickClock {
    /// Start SysTick from the core clock running at `sysclk_hz`.
    pub fn new(mut syst: SYST, sysclk_hz: u32) -> Self {
        syst.set_clock_source(SystClkSource::Core);
        syst.set_reload(sysclk_hz / 1_000 - 1);
        syst.clear_current();
        syst.enable_interrupt();
        syst.enable_counter();
        Self { _syst: syst }
    }
}

impl Clock for SysTickClock {
    #[inline]
    fn now_ms(&self) -> u32 {
        MILLIS.load(Ordering::Relaxed)
    }
}
