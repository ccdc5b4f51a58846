use std::marker::PhantomData;

use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::config::Settings;
use crate::controllers::interactive::ExplorerController;
use crate::core::actions::render_fractal::render_fractal::FractalRenderer;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;

pub const WINDOW_TITLE: &str = "Fractal Explorer";

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    settings: Settings,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, settings: Settings) -> Self {
        Self {
            presenter_factory,
            settings,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and runs the event loop until it is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        let grid = self.settings.grid;
        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(grid.width() as f64, grid.height() as f64))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, grid)?;
        let controller = ExplorerController::new(
            presenter.share_adapter(),
            FractalRenderer::new(self.settings.render_strategy),
            grid,
            self.settings.iteration_limit,
        );

        let mut app = GuiApp::new(window, &event_loop, presenter, controller);
        app.start();

        let mut redraw_pending = true;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                if egui_repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let egui_output = app.update_ui(window);

                        app.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        if app.apply_ui_commands() {
                            redraw_pending = true;
                        }

                        if let Err(err) = app.render(egui_output) {
                            log::error!("render error: {err}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(err) = app.resize(size.width, size.height) {
                            log::error!("{err}");
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.scale_factor = *scale_factor;
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        if let Err(err) = app.resize(size.width, size.height) {
                            log::error!("{err}");
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    _ => {
                        if app.handle_canvas_event(event, egui_consumed) {
                            redraw_pending = true;
                        }
                    }
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
