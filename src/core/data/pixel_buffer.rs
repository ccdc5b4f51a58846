use crate::core::data::colour::Colour;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use thiserror::Error;

const BYTES_PER_PIXEL: usize = 3;

fn grid_to_buffer_size(grid: PixelGrid) -> usize {
    grid.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{}, y:{} outside of {}x{} grid", .pixel.x, .pixel.y, .grid.width(), .grid.height())]
    PixelOutsideBounds { pixel: Point, grid: PixelGrid },
    #[error("pixel grid size {grid_size} does not match buffer size {buffer_size}")]
    BoundsMismatch { grid_size: usize, buffer_size: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB bytes covering a whole pixel grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    grid: PixelGrid,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(grid: PixelGrid, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let grid_size = grid_to_buffer_size(grid);

        if grid_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                grid_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { grid, buffer })
    }

    #[must_use]
    pub fn grid(&self) -> PixelGrid {
        self.grid
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.grid.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                grid: self.grid,
            });
        }

        Ok((pixel.y as usize * self.grid.width() as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}
