//! ADAS Driving Game Library
//!
//! A turn-based driving simulation that can run headless or through the
//! console presentation layer.

pub mod simulation;
pub mod ui;
