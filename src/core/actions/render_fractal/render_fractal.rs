use std::time::Instant;
use thiserror::Error;

use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::fractal_mode::FractalMode;
use crate::core::data::iteration_limit::IterationLimit;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::colour_maps::palette_gradient::PaletteGradient;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// How the renderer walks the pixel grid. Both produce identical frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    #[default]
    Sequential,
    ParallelRows,
}

impl RenderStrategy {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::ParallelRows => "parallel rows",
        }
    }
}

/// Renders full frames: every pixel is mapped, iterated and coloured before returning.
#[derive(Debug, Clone, Copy, Default)]
pub struct FractalRenderer {
    strategy: RenderStrategy,
}

impl FractalRenderer {
    #[must_use]
    pub fn new(strategy: RenderStrategy) -> Self {
        Self { strategy }
    }

    pub fn render(
        &self,
        mode: FractalMode,
        viewport: &Viewport,
        grid: PixelGrid,
        max_iterations: IterationLimit,
    ) -> Result<PixelBuffer, RenderError> {
        let colour_map = PaletteGradient::new(max_iterations);

        log::info!(
            "rendering {} set: {}x{}, {} iterations, {}, {}",
            mode.display_name(),
            grid.width(),
            grid.height(),
            max_iterations,
            self.strategy.display_name(),
            colour_map.display_name()
        );

        let start = Instant::now();

        let iterations = match mode {
            FractalMode::Mandelbrot => {
                self.generate(&MandelbrotAlgorithm::new(grid, *viewport, max_iterations))
            }
            FractalMode::Julia { seed } => {
                self.generate(&JuliaAlgorithm::new(grid, *viewport, seed, max_iterations))
            }
        };

        let pixel_buffer = generate_pixel_buffer(iterations, &colour_map, grid)?;

        log::info!("rendered {} set in {:?}", mode.display_name(), start.elapsed());

        Ok(pixel_buffer)
    }

    fn generate<Alg>(&self, algorithm: &Alg) -> Vec<u32>
    where
        Alg: FractalAlgorithm<Output = u32> + Sync,
    {
        match self.strategy {
            RenderStrategy::Sequential => generate_fractal(algorithm),
            RenderStrategy::ParallelRows => generate_fractal_parallel_rayon(algorithm),
        }
    }
}
