use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;
use winit::window::Window;

use crate::controllers::interactive::ports::presenter::ExplorerPresenterPort;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use crate::input::gui::errors::GuiError;

pub trait GuiPresenterPort {
    fn new(window: &'static Window, grid: PixelGrid) -> Result<Self, GuiError>
    where
        Self: Sized;

    fn share_adapter(&self) -> Arc<dyn ExplorerPresenterPort>;

    /// Applies queued controller output to the framebuffer. Returns true when it changed.
    fn sync(&mut self) -> bool;

    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError>;

    /// Converts a physical window position to a grid pixel, clamped to the grid.
    fn window_pos_to_pixel(&self, position: (f32, f32)) -> Point;

    fn last_render_duration(&self) -> Option<Duration>;

    fn last_error_message(&self) -> Option<&str>;
}
