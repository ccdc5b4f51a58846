use winit::window::Window;

use crate::core::data::pixel_grid::PixelGrid;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(&self, window: &'static Window, grid: PixelGrid) -> Result<T, GuiError>;
}
