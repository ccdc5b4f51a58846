use crate::core::data::point::Point;
use std::ops::Range;
use thiserror::Error;

pub const DEFAULT_GRID_WIDTH: u32 = 800;
pub const DEFAULT_GRID_HEIGHT: u32 = 800;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelGridError {
    #[error("pixel grid size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("pixel grid {width}x{height} does not fit i32 pixel coordinates")]
    TooLarge { width: u32, height: u32 },
}

/// Fixed pixel dimensions of the drawing surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
}

impl PixelGrid {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelGridError> {
        if width == 0 || height == 0 {
            return Err(PixelGridError::InvalidSize { width, height });
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(PixelGridError::TooLarge { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel x coordinates, left to right.
    #[must_use]
    pub fn columns(&self) -> Range<i32> {
        0..i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    /// Pixel y coordinates, top to bottom.
    #[must_use]
    pub fn rows(&self) -> Range<i32> {
        0..i32::try_from(self.height).unwrap_or(i32::MAX)
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as i64) < self.width as i64
            && (point.y as i64) < self.height as i64
    }
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}
