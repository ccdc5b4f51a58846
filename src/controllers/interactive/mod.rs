//! Interactive exploration of the Mandelbrot set and its Julia sets.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: typed gesture methods fed with grid pixel coordinates
//! - **Output**: `ExplorerPresenterPort` receiving frames and zoom feedback
//! - **Core**: domain actions from `core/` do the rendering and viewport maths

mod controller;
pub mod data;
pub mod events;
pub mod ports;

pub use controller::{DragState, ExplorerController, ExplorerState, GestureOutcome};
pub use events::explorer_event::ExplorerEvent;
pub use ports::presenter::ExplorerPresenterPort;
