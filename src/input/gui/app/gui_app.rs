use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{
    event::WindowEvent,
    event_loop::EventLoop,
    window::Window,
};

use crate::controllers::interactive::{ExplorerController, GestureOutcome};
use crate::core::data::fractal_mode::FractalMode;
use crate::input::gui::app::pointer_input::{PointerGesture, PointerInputState};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;

pub struct GuiApp<T: GuiPresenterPort> {
    presenter: T,
    controller: ExplorerController,
    pointer: PointerInputState,
    reset_requested: bool,
    pub scale_factor: f64,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: ExplorerController,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            presenter,
            controller,
            pointer: PointerInputState::default(),
            reset_requested: false,
            scale_factor,
            egui_ctx,
            egui_state,
        }
    }

    /// Renders the first Mandelbrot frame. Returns true when the canvas changed.
    pub fn start(&mut self) -> bool {
        self.controller.start();
        self.presenter.sync()
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.presenter.resize(width, height)
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    /// Feeds pointer events to the canvas. Returns true when the canvas changed.
    ///
    /// Button presses egui consumed never reach the canvas; a drag already in
    /// progress keeps receiving its release.
    pub fn handle_canvas_event(&mut self, event: &WindowEvent, egui_consumed: bool) -> bool {
        let gesture = match event {
            WindowEvent::CursorMoved { position, .. } => {
                let pixel = self
                    .presenter
                    .window_pos_to_pixel((position.x as f32, position.y as f32));
                self.pointer.cursor_moved(pixel)
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer.cursor_left();
                None
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if egui_consumed && !self.pointer.is_dragging() {
                    return false;
                }
                self.pointer.handle_button(*button, *state)
            }
            _ => None,
        };

        let Some(gesture) = gesture else {
            return false;
        };

        match self.dispatch(gesture) {
            GestureOutcome::Ignored => false,
            _ => self.presenter.sync(),
        }
    }

    /// Runs commands issued from the egui overlay. Returns true when the canvas changed.
    pub fn apply_ui_commands(&mut self) -> bool {
        if !std::mem::take(&mut self.reset_requested) {
            return false;
        }

        self.pointer.reset();
        self.controller.on_reset_command();
        self.presenter.sync()
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Fractal Explorer")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    if ui.button("Back to Mandelbrot").clicked() {
                        self.reset_requested = true;
                    }

                    ui.separator();
                    match self.controller.mode() {
                        FractalMode::Mandelbrot => {
                            let viewport = self.controller.viewport();
                            ui.label(format!(
                                "Mandelbrot set, view #{}",
                                self.controller.viewport_version()
                            ));
                            ui.label(format!(
                                "Real: [{:.6}, {:.6}]",
                                viewport.re_min(),
                                viewport.re_max()
                            ));
                            ui.label(format!(
                                "Imag: [{:.6}, {:.6}]",
                                viewport.im_min(),
                                viewport.im_max()
                            ));
                        }
                        FractalMode::Julia { seed } => {
                            ui.label("Julia set");
                            ui.label(format!("c = {seed}"));
                        }
                    }

                    ui.label(format!("Max iterations: {}", self.controller.max_iterations()));
                    if let Some(render_duration) = self.presenter.last_render_duration() {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                    if let Some(message) = self.presenter.last_error_message() {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        })
    }

    fn dispatch(&mut self, gesture: PointerGesture) -> GestureOutcome {
        match gesture {
            PointerGesture::PrimaryClick(pixel) => self.controller.on_primary_click(pixel),
            PointerGesture::SecondaryPress(pixel) => self.controller.on_secondary_press(pixel),
            PointerGesture::SecondaryDrag(pixel) => self.controller.on_secondary_drag(pixel),
            PointerGesture::SecondaryRelease => self.controller.on_secondary_release(),
        }
    }
}
