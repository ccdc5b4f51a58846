mod config;
mod controllers;
mod core;
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use crate::config::{CliRenderStrategy, ExplorerArgs, Settings};
pub use crate::controllers::interactive::{
    DragState, ExplorerController, ExplorerEvent, ExplorerPresenterPort, ExplorerState,
    GestureOutcome,
};
pub use crate::controllers::interactive::data::frame_data::FrameData;
pub use crate::core::actions::render_fractal::render_fractal::{
    FractalRenderer, RenderError, RenderStrategy,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::fractal_mode::FractalMode;
pub use crate::core::data::iteration_limit::{IterationLimit, IterationLimitError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_grid::{PixelGrid, PixelGridError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::data::zoom_gesture::{ZoomGesture, ZoomRect};
pub use crate::core::fractals::colour_maps::palette_gradient::{PALETTE_STOPS, colour_for};
pub use crate::core::fractals::escape_time::escape_iterations;
pub use crate::core::navigation::viewport_controller::{ViewportController, ZoomOutcome};
pub use crate::core::util::pixel_to_complex_coords::pixel_to_complex;
pub use crate::input::prompt::iteration_prompt::{
    PromptError, prompt_iteration_limit, write_usage_hint, write_welcome,
};

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
