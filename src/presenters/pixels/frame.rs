use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::zoom_gesture::ZoomRect;

pub const ZOOM_OUTLINE: Colour = Colour::new(255, 255, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rgba frame of {rgba_len} bytes cannot hold {rgb_len} rgb bytes")]
pub struct FrameSizeError {
    pub rgb_len: usize,
    pub rgba_len: usize,
}

/// Expands packed RGB into an opaque RGBA frame of the same pixel count.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), FrameSizeError> {
    if src.len() % 3 != 0 || src.len() / 3 * 4 != dst.len() {
        return Err(FrameSizeError {
            rgb_len: src.len(),
            rgba_len: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}

/// Draws the one pixel wide border of `rect` into an RGBA frame, clipped to `grid`.
pub fn draw_outline(frame: &mut [u8], grid: PixelGrid, rect: ZoomRect, colour: Colour) {
    let width = i64::from(grid.width());
    let height = i64::from(grid.height());
    let rgba = [colour.r, colour.g, colour.b, 255];

    let mut plot = |x: i64, y: i64| {
        if x < 0 || y < 0 || x >= width || y >= height {
            return;
        }

        let offset = ((y * width + x) * 4) as usize;
        if let Some(pixel) = frame.get_mut(offset..offset + 4) {
            pixel.copy_from_slice(&rgba);
        }
    };

    let (x_min, x_max) = (i64::from(rect.x_min), i64::from(rect.x_max));
    let (y_min, y_max) = (i64::from(rect.y_min), i64::from(rect.y_max));

    for x in x_min.max(0)..=x_max.min(width - 1) {
        plot(x, y_min);
        plot(x, y_max);
    }

    for y in y_min.max(0)..=y_max.min(height - 1) {
        plot(x_min, y);
        plot(x_max, y);
    }
}
