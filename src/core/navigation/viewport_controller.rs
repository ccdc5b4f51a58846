use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::data::zoom_gesture::ZoomRect;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomOutcome {
    Applied(Viewport),
    Ignored,
}

/// Maps the corners of a pixel square through `current` to get the zoomed viewport.
pub fn zoom_viewport(
    rect: ZoomRect,
    current: &Viewport,
    grid: PixelGrid,
) -> Result<Viewport, ViewportError> {
    let min = pixel_to_complex(Point::new(rect.x_min, rect.y_min), current, grid);
    let max = pixel_to_complex(Point::new(rect.x_max, rect.y_max), current, grid);

    Viewport::new(min.real, max.real, min.imag, max.imag)
}

/// Sole owner of the Mandelbrot viewport.
///
/// The viewport is only ever replaced as a whole; `version` counts replacements.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    viewport: Viewport,
    version: u64,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            viewport: Viewport::default(),
            version: 0,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replaces the viewport with the region selected by `rect`.
    ///
    /// `None` (a zero-area gesture) and bounds that collapse at `f64`
    /// precision leave the viewport untouched.
    pub fn apply_zoom(&mut self, rect: Option<ZoomRect>, grid: PixelGrid) -> ZoomOutcome {
        let Some(rect) = rect else {
            return ZoomOutcome::Ignored;
        };

        match zoom_viewport(rect, &self.viewport, grid) {
            Ok(viewport) => {
                self.replace(viewport);
                ZoomOutcome::Applied(viewport)
            }
            Err(err) => {
                log::warn!("zoom rejected: {err}");
                ZoomOutcome::Ignored
            }
        }
    }

    pub fn reset(&mut self) -> Viewport {
        self.replace(Viewport::default());
        self.viewport
    }

    fn replace(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.version += 1;
    }
}
