//! # Core Module
//!
//! Stateless building blocks shared by the generators and the draw adapter.
//!
//! - **Display Models** ([`models`]) - Atoms, bonds, gate placements, circuit layouts
//!   and energy readings
//! - **Model I/O** ([`io`]) - JSON hand-off of the display models
//! - **Utilities** ([`utils`]) - Distance and rotation helpers on `nalgebra` types
//!
//! Nothing in here draws random numbers or keeps state between calls; every value is
//! produced by the [`engine`](crate::engine) and only carried here.

pub mod io;
pub mod models;
pub mod utils;
