use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_limit::IterationLimit;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::escape_iterations;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex;

#[derive(Debug, PartialEq)]
pub struct JuliaAlgorithm {
    grid: PixelGrid,
    viewport: Viewport,
    c: Complex,
    max_iterations: IterationLimit,
}

impl FractalAlgorithm for JuliaAlgorithm {
    type Output = u32;

    fn compute(&self, pixel: Point) -> Self::Output {
        let z = pixel_to_complex(pixel, &self.viewport, self.grid);

        escape_iterations(self.c, z, self.max_iterations.get())
    }

    fn grid(&self) -> PixelGrid {
        self.grid
    }
}

impl JuliaAlgorithm {
    #[must_use]
    pub fn new(
        grid: PixelGrid,
        viewport: Viewport,
        c: Complex,
        max_iterations: IterationLimit,
    ) -> Self {
        Self {
            grid,
            viewport,
            c,
            max_iterations,
        }
    }
}
