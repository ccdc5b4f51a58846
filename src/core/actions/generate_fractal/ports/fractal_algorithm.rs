use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;

pub trait FractalAlgorithm {
    type Output;

    fn compute(&self, pixel: Point) -> Self::Output;

    fn grid(&self) -> PixelGrid;
}
