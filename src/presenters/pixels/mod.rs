//! Drawing surface backed by a `pixels` framebuffer with an egui overlay.

pub mod adapter;
pub mod factory;
pub mod frame;
pub mod presenter;
