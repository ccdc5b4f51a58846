use std::sync::Arc;
use std::time::Instant;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::explorer_event::ExplorerEvent;
use crate::controllers::interactive::ports::presenter::ExplorerPresenterPort;
use crate::core::actions::render_fractal::render_fractal::FractalRenderer;
use crate::core::data::complex::Complex;
use crate::core::data::fractal_mode::FractalMode;
use crate::core::data::iteration_limit::IterationLimit;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::data::zoom_gesture::ZoomGesture;
use crate::core::navigation::viewport_controller::{ViewportController, ZoomOutcome};
use crate::core::util::pixel_to_complex_coords::pixel_to_complex;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging(ZoomGesture),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExplorerState {
    /// Showing the Mandelbrot set; zoom drags are accepted.
    Exploring(DragState),
    /// Showing the Julia set for `seed`; only reset is accepted.
    Viewing { seed: Complex },
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::Exploring(DragState::Idle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    Ignored,
    Tracking,
    ZoomDiscarded,
    Rendered { generation: u64 },
    RenderFailed { generation: u64 },
}

/// Owns the exploration state and turns gestures into renders.
///
/// Every render runs to completion before the gesture method returns.
pub struct ExplorerController {
    presenter: Arc<dyn ExplorerPresenterPort>,
    renderer: FractalRenderer,
    viewport: ViewportController,
    grid: PixelGrid,
    max_iterations: IterationLimit,
    state: ExplorerState,
    generation: u64,
}

impl ExplorerController {
    pub fn new(
        presenter: Arc<dyn ExplorerPresenterPort>,
        renderer: FractalRenderer,
        grid: PixelGrid,
        max_iterations: IterationLimit,
    ) -> Self {
        Self {
            presenter,
            renderer,
            viewport: ViewportController::new(),
            grid,
            max_iterations,
            state: ExplorerState::default(),
            generation: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> ExplorerState {
        self.state
    }

    #[must_use]
    pub fn mode(&self) -> FractalMode {
        match self.state {
            ExplorerState::Exploring(_) => FractalMode::Mandelbrot,
            ExplorerState::Viewing { seed } => FractalMode::Julia { seed },
        }
    }

    /// The Mandelbrot viewport, kept while a Julia set is on screen.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport.viewport()
    }

    /// Number of times the Mandelbrot viewport has been replaced by a zoom or reset.
    #[must_use]
    pub fn viewport_version(&self) -> u64 {
        self.viewport.version()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn grid(&self) -> PixelGrid {
        self.grid
    }

    #[must_use]
    pub fn max_iterations(&self) -> IterationLimit {
        self.max_iterations
    }

    /// Draws the initial Mandelbrot frame.
    pub fn start(&mut self) -> GestureOutcome {
        self.render_current()
    }

    pub fn on_primary_click(&mut self, pixel: Point) -> GestureOutcome {
        if self.state != ExplorerState::Exploring(DragState::Idle) {
            return GestureOutcome::Ignored;
        }

        let seed = pixel_to_complex(pixel, &self.viewport.viewport(), self.grid);
        log::info!("exploring Julia set for c = {seed}");

        self.state = ExplorerState::Viewing { seed };
        self.render_current()
    }

    pub fn on_secondary_press(&mut self, pixel: Point) -> GestureOutcome {
        if self.state != ExplorerState::Exploring(DragState::Idle) {
            return GestureOutcome::Ignored;
        }

        let gesture = ZoomGesture::begin(pixel);
        log::debug!("zoom drag started at ({}, {})", pixel.x, pixel.y);

        self.state = ExplorerState::Exploring(DragState::Dragging(gesture));
        self.presenter
            .present(ExplorerEvent::ZoomFeedback(Some(gesture.rect())));

        GestureOutcome::Tracking
    }

    pub fn on_secondary_drag(&mut self, pixel: Point) -> GestureOutcome {
        let ExplorerState::Exploring(DragState::Dragging(mut gesture)) = self.state else {
            return GestureOutcome::Ignored;
        };

        gesture.drag_to(pixel);
        self.state = ExplorerState::Exploring(DragState::Dragging(gesture));
        self.presenter
            .present(ExplorerEvent::ZoomFeedback(Some(gesture.rect())));

        GestureOutcome::Tracking
    }

    /// Ends the zoom drag. The square last shown as feedback is what gets zoomed.
    pub fn on_secondary_release(&mut self) -> GestureOutcome {
        let ExplorerState::Exploring(DragState::Dragging(mut gesture)) = self.state else {
            return GestureOutcome::Ignored;
        };

        let rect = gesture.finish();
        self.state = ExplorerState::Exploring(DragState::Idle);
        self.presenter.present(ExplorerEvent::ZoomFeedback(None));

        match self.viewport.apply_zoom(rect, self.grid) {
            ZoomOutcome::Applied(viewport) => {
                log::info!(
                    "zoomed to re [{}, {}], im [{}, {}]",
                    viewport.re_min(),
                    viewport.re_max(),
                    viewport.im_min(),
                    viewport.im_max()
                );
                self.render_current()
            }
            ZoomOutcome::Ignored => {
                log::debug!("zoom drag discarded");
                GestureOutcome::ZoomDiscarded
            }
        }
    }

    /// Returns to the Mandelbrot set at the initial view, from any state.
    pub fn on_reset_command(&mut self) -> GestureOutcome {
        if matches!(self.state, ExplorerState::Exploring(DragState::Dragging(_))) {
            self.presenter.present(ExplorerEvent::ZoomFeedback(None));
        }

        self.viewport.reset();
        self.state = ExplorerState::Exploring(DragState::Idle);
        log::info!("reset to initial Mandelbrot view");

        self.render_current()
    }

    fn render_current(&mut self) -> GestureOutcome {
        let mode = self.mode();
        let viewport = match mode {
            FractalMode::Mandelbrot => self.viewport.viewport(),
            FractalMode::Julia { .. } => Viewport::default(),
        };

        self.generation += 1;
        let generation = self.generation;

        let start = Instant::now();
        let result = self
            .renderer
            .render(mode, &viewport, self.grid, self.max_iterations);
        let render_duration = start.elapsed();

        match result {
            Ok(pixel_buffer) => {
                self.presenter.present(ExplorerEvent::Frame(FrameData {
                    generation,
                    mode,
                    pixel_buffer,
                    render_duration,
                }));

                GestureOutcome::Rendered { generation }
            }
            Err(error) => {
                log::error!("render {generation} failed: {error}");
                self.presenter
                    .present(ExplorerEvent::Error { generation, error });

                GestureOutcome::RenderFailed { generation }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::zoom_gesture::ZoomRect;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPresenter {
        events: Mutex<Vec<ExplorerEvent>>,
    }

    impl RecordingPresenter {
        fn take(&self) -> Vec<ExplorerEvent> {
            std::mem::take(&mut *self.events.lock().unwrap())
        }
    }

    impl ExplorerPresenterPort for RecordingPresenter {
        fn present(&self, event: ExplorerEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn grid() -> PixelGrid {
        PixelGrid::new(20, 20).unwrap()
    }

    fn limit() -> IterationLimit {
        IterationLimit::new(12).unwrap()
    }

    fn controller() -> (ExplorerController, Arc<RecordingPresenter>) {
        let presenter = Arc::new(RecordingPresenter::default());
        let controller = ExplorerController::new(
            Arc::clone(&presenter) as Arc<dyn ExplorerPresenterPort>,
            FractalRenderer::default(),
            grid(),
            limit(),
        );

        (controller, presenter)
    }

    fn frame(event: &ExplorerEvent) -> &FrameData {
        match event {
            ExplorerEvent::Frame(frame) => frame,
            other => panic!("expected a frame, got {other:?}"),
        }
    }

    fn zoom_into_unit_square(controller: &mut ExplorerController) {
        // pixels 5..15 of 20 over [-2, 2] cover [-1, 1]
        controller.on_secondary_press(Point::new(5, 5));
        controller.on_secondary_drag(Point::new(15, 18));
        controller.on_secondary_release();
    }

    #[test]
    fn test_start_renders_mandelbrot_frame() {
        let (mut controller, presenter) = controller();

        let outcome = controller.start();

        assert_eq!(outcome, GestureOutcome::Rendered { generation: 1 });
        let events = presenter.take();
        assert_eq!(events.len(), 1);
        let frame = frame(&events[0]);
        assert_eq!(frame.generation, 1);
        assert_eq!(frame.mode, FractalMode::Mandelbrot);
        assert_eq!(frame.pixel_buffer.grid(), grid());
    }

    #[test]
    fn test_primary_click_switches_to_julia() {
        let (mut controller, presenter) = controller();
        controller.start();
        presenter.take();

        let outcome = controller.on_primary_click(Point::new(15, 10));

        assert_eq!(outcome, GestureOutcome::Rendered { generation: 2 });
        let seed = Complex::new(1.0, 0.0);
        assert_eq!(controller.mode(), FractalMode::Julia { seed });
        assert_eq!(controller.state(), ExplorerState::Viewing { seed });
        let events = presenter.take();
        assert_eq!(frame(&events[0]).mode, FractalMode::Julia { seed });
    }

    #[test]
    fn test_primary_click_while_viewing_changes_nothing() {
        let (mut controller, presenter) = controller();
        controller.start();
        controller.on_primary_click(Point::new(15, 10));
        presenter.take();
        let mode = controller.mode();

        let outcome = controller.on_primary_click(Point::new(2, 3));

        assert_eq!(outcome, GestureOutcome::Ignored);
        assert_eq!(controller.mode(), mode);
        assert_eq!(controller.generation(), 2);
        assert!(presenter.take().is_empty());
    }

    #[test]
    fn test_zoom_gestures_are_disabled_while_viewing() {
        let (mut controller, presenter) = controller();
        controller.on_primary_click(Point::new(10, 10));
        presenter.take();

        assert_eq!(controller.on_secondary_press(Point::new(1, 1)), GestureOutcome::Ignored);
        assert_eq!(controller.on_secondary_drag(Point::new(9, 9)), GestureOutcome::Ignored);
        assert_eq!(controller.on_secondary_release(), GestureOutcome::Ignored);
        assert_eq!(controller.viewport(), Viewport::default());
        assert!(presenter.take().is_empty());
    }

    #[test]
    fn test_zoom_drag_reports_feedback_and_rerenders() {
        let (mut controller, presenter) = controller();
        controller.start();
        presenter.take();

        assert_eq!(controller.on_secondary_press(Point::new(5, 5)), GestureOutcome::Tracking);
        assert_eq!(controller.on_secondary_drag(Point::new(15, 18)), GestureOutcome::Tracking);
        let outcome = controller.on_secondary_release();

        assert_eq!(outcome, GestureOutcome::Rendered { generation: 2 });
        assert_eq!(controller.viewport(), Viewport::new(-1.0, 1.0, -1.0, 1.0).unwrap());
        assert_eq!(controller.state(), ExplorerState::Exploring(DragState::Idle));

        let events = presenter.take();
        assert_eq!(events.len(), 4);
        assert_eq!(
            events[0],
            ExplorerEvent::ZoomFeedback(Some(ZoomRect {
                x_min: 5,
                x_max: 5,
                y_min: 5,
                y_max: 5,
            }))
        );
        assert_eq!(
            events[1],
            ExplorerEvent::ZoomFeedback(Some(ZoomRect {
                x_min: 5,
                x_max: 15,
                y_min: 5,
                y_max: 15,
            }))
        );
        assert_eq!(events[2], ExplorerEvent::ZoomFeedback(None));
        assert_eq!(frame(&events[3]).mode, FractalMode::Mandelbrot);
    }

    #[test]
    fn test_degenerate_release_discards_without_render() {
        let (mut controller, presenter) = controller();
        controller.start();
        presenter.take();

        controller.on_secondary_press(Point::new(5, 5));
        controller.on_secondary_drag(Point::new(15, 5));
        let outcome = controller.on_secondary_release();

        assert_eq!(outcome, GestureOutcome::ZoomDiscarded);
        assert_eq!(controller.viewport(), Viewport::default());
        assert_eq!(controller.generation(), 1);
        let events = presenter.take();
        assert_eq!(events.last(), Some(&ExplorerEvent::ZoomFeedback(None)));
        assert!(!events.iter().any(|e| matches!(e, ExplorerEvent::Frame(_))));
    }

    #[test]
    fn test_primary_click_during_drag_is_ignored() {
        let (mut controller, _presenter) = controller();
        controller.on_secondary_press(Point::new(5, 5));

        assert_eq!(controller.on_primary_click(Point::new(10, 10)), GestureOutcome::Ignored);
        assert_eq!(controller.mode(), FractalMode::Mandelbrot);
    }

    #[test]
    fn test_seed_is_mapped_through_zoomed_viewport() {
        let (mut controller, _presenter) = controller();
        zoom_into_unit_square(&mut controller);

        controller.on_primary_click(Point::new(15, 10));

        assert_eq!(
            controller.mode(),
            FractalMode::Julia {
                seed: Complex::new(0.5, 0.0)
            }
        );
    }

    #[test]
    fn test_julia_is_rendered_over_default_viewport() {
        let (mut controller, presenter) = controller();
        zoom_into_unit_square(&mut controller);
        presenter.take();

        controller.on_primary_click(Point::new(15, 10));

        let events = presenter.take();
        let mode = FractalMode::Julia {
            seed: Complex::new(0.5, 0.0),
        };
        let expected = FractalRenderer::default()
            .render(mode, &Viewport::default(), grid(), limit())
            .unwrap();
        assert_eq!(frame(&events[0]).pixel_buffer, expected);
        assert_eq!(controller.viewport(), Viewport::new(-1.0, 1.0, -1.0, 1.0).unwrap());
    }

    #[test]
    fn test_reset_from_julia_returns_to_initial_mandelbrot() {
        let (mut controller, presenter) = controller();
        zoom_into_unit_square(&mut controller);
        controller.on_primary_click(Point::new(3, 3));
        presenter.take();

        let outcome = controller.on_reset_command();

        assert!(matches!(outcome, GestureOutcome::Rendered { .. }));
        assert_eq!(controller.mode(), FractalMode::Mandelbrot);
        assert_eq!(controller.viewport(), Viewport::default());
        let events = presenter.take();
        assert_eq!(frame(&events[0]).mode, FractalMode::Mandelbrot);

        assert_eq!(controller.on_secondary_press(Point::new(1, 1)), GestureOutcome::Tracking);
    }

    #[test]
    fn test_reset_while_exploring_restores_initial_view() {
        let (mut controller, _presenter) = controller();
        zoom_into_unit_square(&mut controller);

        controller.on_reset_command();

        assert_eq!(controller.viewport(), Viewport::default());
        assert_eq!(controller.state(), ExplorerState::Exploring(DragState::Idle));
    }

    #[test]
    fn test_reset_mid_drag_clears_feedback() {
        let (mut controller, presenter) = controller();
        controller.on_secondary_press(Point::new(5, 5));
        presenter.take();

        controller.on_reset_command();

        let events = presenter.take();
        assert_eq!(events[0], ExplorerEvent::ZoomFeedback(None));
        assert_eq!(controller.on_secondary_release(), GestureOutcome::Ignored);
    }

    #[test]
    fn test_viewport_version_counts_applied_zooms_and_resets() {
        let (mut controller, _presenter) = controller();
        controller.start();
        assert_eq!(controller.viewport_version(), 0);

        controller.on_secondary_press(Point::new(5, 5));
        controller.on_secondary_drag(Point::new(15, 5));
        controller.on_secondary_release();
        assert_eq!(controller.viewport_version(), 0);

        zoom_into_unit_square(&mut controller);
        assert_eq!(controller.viewport_version(), 1);

        controller.on_primary_click(Point::new(15, 10));
        assert_eq!(controller.viewport_version(), 1);

        controller.on_reset_command();
        assert_eq!(controller.viewport_version(), 2);
    }
}
