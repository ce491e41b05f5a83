// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Board Hardware
//!
//! Thin wrappers around the MCU peripherals the firmware touches.
//!
//! - [`power`] - GPIO-switched supply rails (matrix power, amplifier shutdown).
//! - [`usart`] - Debug console and `log` backend (firmware only).
//! - [`clock`] - SysTick millisecond [`Clock`](crate::playback::Clock) (firmware only).

#[cfg(feature = "firmware")]
pub mod clock;
pub mod power;
#[cfg(feature = "firmware")]
pub mod usart;

#[cfg(feature = "firmware")]
pub use clock::SysTickClock;
pub use power::{ActiveLevel, PowerRail};
#[cfg(feature = "firmware")]
pub use usart::{init_logger, Console, Usart};
