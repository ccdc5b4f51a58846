use crate::controllers::interactive::events::explorer_event::ExplorerEvent;
use crate::controllers::interactive::ports::presenter::ExplorerPresenterPort;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use crate::core::data::zoom_gesture::ZoomRect;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::presenters::pixels::adapter::PixelsAdapter;
use crate::presenters::pixels::frame::{ZOOM_OUTLINE, copy_rgb_to_rgba, draw_outline};
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::sync::Arc;
use std::time::Duration;
use winit::window::Window;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    grid: PixelGrid,
    surface_width: u32,
    surface_height: u32,
    /// Last fractal frame in RGBA, without the zoom outline.
    base_frame: Vec<u8>,
    zoom_feedback: Option<ZoomRect>,
    last_presented_generation: u64,
    last_error_message: Option<String>,
    last_render_duration: Option<Duration>,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(window: &'static Window, grid: PixelGrid) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(grid.width(), grid.height(), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        let mut base_frame = vec![0; grid.size() as usize * 4];
        for pixel in base_frame.chunks_exact_mut(4) {
            pixel[3] = 255;
        }

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new()),
            grid,
            surface_width: size.width,
            surface_height: size.height,
            base_frame,
            zoom_feedback: None,
            last_presented_generation: 0,
            last_error_message: None,
            last_render_duration: None,
        })
    }

    fn share_adapter(&self) -> Arc<dyn ExplorerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn ExplorerPresenterPort>
    }

    fn sync(&mut self) -> bool {
        let events = self.adapter.drain();

        if events.is_empty() {
            return false;
        }

        for event in events {
            self.apply_event(event);
        }

        self.compose();
        true
    }

    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.surface_width, self.surface_height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // egui on top of the fractal
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;

        Ok(())
    }

    fn window_pos_to_pixel(&self, position: (f32, f32)) -> Point {
        let (x, y) = self
            .pixels
            .window_pos_to_pixel(position)
            .unwrap_or_else(|outside| self.pixels.clamp_pixel_pos(outside));

        Point::new(x as i32, y as i32)
    }

    fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }
}

impl PixelsPresenter {
    fn apply_event(&mut self, event: ExplorerEvent) {
        match event {
            ExplorerEvent::Frame(frame) => {
                if frame.generation <= self.last_presented_generation
                    || frame.pixel_buffer.grid() != self.grid
                {
                    log::warn!("dropping stale or mis-sized frame {}", frame.generation);
                    return;
                }

                if let Err(err) = copy_rgb_to_rgba(frame.pixel_buffer.buffer(), &mut self.base_frame) {
                    log::error!("frame {} not presented: {err}", frame.generation);
                    self.last_error_message = Some(err.to_string());
                    return;
                }

                self.last_presented_generation = frame.generation;
                self.last_render_duration = Some(frame.render_duration);
                self.last_error_message = None;
            }
            ExplorerEvent::ZoomFeedback(rect) => {
                self.zoom_feedback = rect;
            }
            ExplorerEvent::Error { generation, error } => {
                if generation >= self.last_presented_generation {
                    self.last_error_message = Some(error.to_string());
                }
            }
        }
    }

    fn compose(&mut self) {
        let frame = self.pixels.frame_mut();
        frame.copy_from_slice(&self.base_frame);

        if let Some(rect) = self.zoom_feedback {
            draw_outline(frame, self.grid, rect, ZOOM_OUTLINE);
        }
    }
}
