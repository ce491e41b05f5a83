// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Spiral demo firmware.
//!
//! Brings up the debug console, the millisecond time base and the matrix supply, then plays a
//! spiral from the matrix centre forever, logging every cell it lights.

#![no_main]
#![no_std]

use cortex_m_rt::{entry, exception};
use log::{info, trace, LevelFilter};
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use rgbtouch::{
    config::{SpiralConfig, TOUCH_FALLBACK},
    hw::{init_logger, PowerRail, SysTickClock, Usart},
    CellSink, SpiralPlayer, Touch,
};

/// Renderer stand-in that reports cells on the console.
struct ConsoleSink;

impl CellSink for ConsoleSink {
    fn light_cell(&mut self, index: u16) {
        trace!("cell {}", index);
    }
}

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    // GPIO
    let gpioa = dp.GPIOA.split();
    let gpiod = dp.GPIOD.split();

    // USART1 (DBG)
    let tx = gpioa.pa9.into_alternate::<7>();
    let rx = gpioa.pa10.into_alternate::<7>();
    let usart_cfg = Config {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };
    let serial = Serial::new(dp.USART1, (tx, rx), &clocks, usart_cfg);
    init_logger(Usart::new(serial), LevelFilter::Trace);

    // 1 kHz time base
    let clock = SysTickClock::new(cp.SYST, clocks.sysclk().raw());

    // Matrix supply
    let mut matrix_power = PowerRail::active_high(gpiod.pd10.into_push_pull_output());
    matrix_power.enable();

    info!("rgbtouch up, sysclk {} Hz", clocks.sysclk().raw());

    let mut player = SpiralPlayer::new(&SpiralConfig::default()).unwrap();
    let seed = Touch::new(TOUCH_FALLBACK.0, TOUCH_FALLBACK.1);
    let _ = player.on_touch(seed, &clock);

    let mut sink = ConsoleSink;
    loop {
        player.update(&clock, &mut sink);
        cortex_m::asm::wfi();
    }
}

#[exception]
fn SysTick() {
    rgbtouch::hw::clock::tick();
}
