//! GUI input adapter for interactive fractal exploration.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for framebuffer rendering, and egui for UI controls.

pub mod app;
pub mod commands;
pub mod errors;
