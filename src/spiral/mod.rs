// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Spiral Paths
//!
//! Touch-seeded spiral animation over the LED matrix.
//!
//! ## Modules
//!
//! - [`heading`] - Clockwise travel direction.
//! - [`bounds`] - Growing/shrinking bounding box that decides where the spiral turns.
//! - [`trace`] - Outward and inward path construction.
//! - [`mapper`] - Path ownership and time-gated playback cursor.

pub mod bounds;
pub mod heading;
pub mod mapper;
pub mod trace;

pub use bounds::Bounds;
pub use heading::Heading;
pub use mapper::{Path, SpiralMapper, MAX_PATH};
pub use trace::{trace_inward, trace_outward, Outward, PhaseBoundary, Trail};
