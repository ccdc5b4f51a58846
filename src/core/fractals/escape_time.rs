use crate::core::data::complex::Complex;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts iterations of `z ← z² + c`, starting from `z = seed`, until `|z| > 2`.
///
/// Returns `max_iterations` for orbits that stay bounded. Mandelbrot points
/// pass themselves as both `c` and `seed`; Julia points are the seed and the
/// clicked point is `c`.
#[must_use]
pub fn escape_iterations(c: Complex, seed: Complex, max_iterations: u32) -> u32 {
    let mut z = seed;
    let mut iteration = 0;

    while z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED && iteration < max_iterations {
        z = z * z + c;
        iteration += 1;
    }

    iteration
}
