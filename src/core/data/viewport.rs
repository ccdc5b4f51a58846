use thiserror::Error;

pub const DEFAULT_RE_MIN: f64 = -2.0;
pub const DEFAULT_RE_MAX: f64 = 2.0;
pub const DEFAULT_IM_MIN: f64 = -2.0;
pub const DEFAULT_IM_MAX: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport bounds must be finite: re [{re_min}, {re_max}], im [{im_min}, {im_max}]")]
    NonFinite {
        re_min: f64,
        re_max: f64,
        im_min: f64,
        im_max: f64,
    },
    #[error("viewport size must be positive: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// The rectangle of the complex plane currently mapped onto the pixel grid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    re_min: f64,
    re_max: f64,
    im_min: f64,
    im_max: f64,
}

impl Viewport {
    pub fn new(re_min: f64, re_max: f64, im_min: f64, im_max: f64) -> Result<Self, ViewportError> {
        if ![re_min, re_max, im_min, im_max].iter().all(|v| v.is_finite()) {
            return Err(ViewportError::NonFinite {
                re_min,
                re_max,
                im_min,
                im_max,
            });
        }

        let width = re_max - re_min;
        let height = im_max - im_min;

        if re_min >= re_max || im_min >= im_max {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self {
            re_min,
            re_max,
            im_min,
            im_max,
        })
    }

    #[must_use]
    pub fn re_min(&self) -> f64 {
        self.re_min
    }

    #[must_use]
    pub fn re_max(&self) -> f64 {
        self.re_max
    }

    #[must_use]
    pub fn im_min(&self) -> f64 {
        self.im_min
    }

    #[must_use]
    pub fn im_max(&self) -> f64 {
        self.im_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.re_max - self.re_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.im_max - self.im_min
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            re_min: DEFAULT_RE_MIN,
            re_max: DEFAULT_RE_MAX,
            im_min: DEFAULT_IM_MIN,
            im_max: DEFAULT_IM_MAX,
        }
    }
}
