use std::time::Duration;

use crate::core::data::fractal_mode::FractalMode;
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    pub generation: u64,
    pub mode: FractalMode,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
