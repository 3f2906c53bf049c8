//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(0..=100).contains(&value) {
            return Err(ValidationError::out_of_range(
                "percentage",
                0.0,
                100.0,
                value as f64,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Converts a closeness fraction (1.0 = identical, 0.0 = farthest) into a
    /// whole percentage.
    ///
    /// Rounds half to even (`92.5` becomes `92`), then clamps to 0-100 so
    /// floating-point noise just outside the unit interval cannot escape the
    /// scale.
    pub fn from_closeness(fraction: f64) -> Self {
        let rounded = (fraction * 100.0).round_ties_even();
        if rounded.is_nan() {
            return Self::ZERO;
        }
        Self(rounded.clamp(0.0, 100.0) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
