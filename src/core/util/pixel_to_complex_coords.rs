use crate::core::data::complex::Complex;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Maps a pixel onto the complex plane.
///
/// Pixel `(0, 0)` lands on `(re_min, im_min)` and `(width, height)` on
/// `(re_max, im_max)`. Pixels outside the grid extrapolate linearly.
#[must_use]
pub fn pixel_to_complex(pixel: Point, viewport: &Viewport, grid: PixelGrid) -> Complex {
    let real = viewport.re_min() + (pixel.x as f64 / grid.width() as f64) * viewport.width();
    let imag = viewport.im_min() + (pixel.y as f64 / grid.height() as f64) * viewport.height();

    Complex { real, imag }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> PixelGrid {
        PixelGrid::new(100, 100).unwrap()
    }

    #[test]
    fn test_pixel_to_complex_top_left() {
        let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap();

        let result = pixel_to_complex(Point::new(0, 0), &viewport, grid());

        assert_eq!(result, Complex::new(-2.0, -1.0));
    }

    #[test]
    fn test_pixel_to_complex_far_corner() {
        let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap();

        let result = pixel_to_complex(Point::new(100, 100), &viewport, grid());

        assert_eq!(result, Complex::new(1.0, 1.0));
    }

    #[test]
    fn test_pixel_to_complex_center() {
        let viewport = Viewport::default();

        let result = pixel_to_complex(Point::new(50, 50), &viewport, grid());

        assert_eq!(result, Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_last_pixel_is_one_step_short_of_max() {
        let viewport = Viewport::default();
        let grid = PixelGrid::default();

        let result = pixel_to_complex(Point::new(799, 799), &viewport, grid);

        assert!((result.real - 1.995).abs() < 1e-12);
        assert!((result.imag - 1.995).abs() < 1e-12);
    }

    #[test]
    fn test_pixel_outside_grid_extrapolates() {
        let viewport = Viewport::default();

        assert_eq!(
            pixel_to_complex(Point::new(150, -25), &viewport, grid()),
            Complex::new(4.0, -3.0)
        );
    }

    #[test]
    fn test_mapping_is_monotonic_per_axis() {
        let viewport = Viewport::new(-0.75, -0.5, 0.1, 0.2).unwrap();
        let grid = grid();

        for step in 0..99 {
            let a = pixel_to_complex(Point::new(step, step), &viewport, grid);
            let b = pixel_to_complex(Point::new(step + 1, step + 1), &viewport, grid);

            assert!(b.real > a.real);
            assert!(b.imag > a.imag);
        }
    }
}
