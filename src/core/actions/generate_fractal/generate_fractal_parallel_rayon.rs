use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Generates fractal data with rows computed in parallel on rayon's work-stealing pool.
///
/// Each row is computed independently and the rows are concatenated in order,
/// so the result is identical to [`generate_fractal`] for the same algorithm.
///
/// [`generate_fractal`]: crate::core::actions::generate_fractal::generate_fractal::generate_fractal
pub fn generate_fractal_parallel_rayon<Alg>(algorithm: &Alg) -> Vec<Alg::Output>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Output: Send,
{
    let grid = algorithm.grid();

    let rows: Vec<Vec<Alg::Output>> = grid
        .rows()
        .into_par_iter()
        .map(|y| grid.columns().map(|x| algorithm.compute(Point { x, y })).collect())
        .collect();

    rows.into_iter().flatten().collect()
}
