// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # RGB Touch Mini Board Support
//!
//! This crate contains the board-support pieces for the RGB Touch Mini, a handheld 12×12 RGB LED
//! matrix with a capacitive touch overlay, written in Rust for a `no_std` microcontroller target.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`grid`] | Square cell grid, linear indexing and visited markers |
//! | [`spiral`] | Touch-seeded spiral paths and their playback cursor |
//! | [`touch`] | Row/column touch mask decoding |
//! | [`playback`] | Main-loop glue between touches, time and the renderer |
//! | [`hw`] | Power rails, plus USART console and SysTick clock with `firmware` |
//! | [`config`] | Board constants and playback defaults |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features firmware --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod grid;
pub mod hw;
pub mod playback;
pub mod spiral;
pub mod touch;

pub use error::Error;
pub use grid::Grid;
pub use playback::{CellSink, Clock, SpiralPlayer};
pub use spiral::SpiralMapper;
pub use touch::{Touch, TouchScanner};
