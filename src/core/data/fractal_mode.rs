use crate::core::data::complex::Complex;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FractalMode {
    #[default]
    Mandelbrot,
    /// Julia set of the recurrence `z ← z² + seed`.
    Julia { seed: Complex },
}

impl FractalMode {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia",
        }
    }
}
