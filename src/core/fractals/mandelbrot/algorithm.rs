use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::iteration_limit::IterationLimit;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::escape_iterations;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex;

#[derive(Debug, PartialEq)]
pub struct MandelbrotAlgorithm {
    grid: PixelGrid,
    viewport: Viewport,
    max_iterations: IterationLimit,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = u32;

    fn compute(&self, pixel: Point) -> Self::Output {
        let c = pixel_to_complex(pixel, &self.viewport, self.grid);

        escape_iterations(c, c, self.max_iterations.get())
    }

    fn grid(&self) -> PixelGrid {
        self.grid
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(grid: PixelGrid, viewport: Viewport, max_iterations: IterationLimit) -> Self {
        Self {
            grid,
            viewport,
            max_iterations,
        }
    }
}
