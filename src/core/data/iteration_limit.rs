use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IterationLimitError {
    #[error("{input:?} is not a number")]
    NotANumber { input: String },
    #[error("iteration limit {value} is outside {min}..={max}", min = IterationLimit::MIN, max = IterationLimit::MAX)]
    OutOfRange { value: i64 },
}

/// Maximum number of escape-time iterations for a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IterationLimit(u32);

impl IterationLimit {
    pub const MIN: u32 = 3;
    pub const MAX: u32 = 300;

    pub fn new(value: u32) -> Result<Self, IterationLimitError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(IterationLimitError::OutOfRange {
                value: value as i64,
            });
        }

        Ok(Self(value))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for IterationLimit {
    type Err = IterationLimitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| IterationLimitError::NotANumber {
                input: s.trim().to_owned(),
            })?;

        let value = u32::try_from(value).map_err(|_| IterationLimitError::OutOfRange { value })?;

        Self::new(value)
    }
}

impl fmt::Display for IterationLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
