//! The normalized Core PAD Triad.

use serde::Serialize;

use super::normalization::NormalizationMethod;
use crate::domain::foundation::ValidationError;

/// Bounds of every normalized PAD axis.
pub const NORMALIZED_MIN: f64 = -1.0;
pub const NORMALIZED_MAX: f64 = 1.0;

/// A user's position in the `[-1, 1]^3` PAD cube.
///
/// Records the normalization that produced it and the raw range that was
/// mapped onto `[-1, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorePadTriad {
    pleasure: f64,
    arousal: f64,
    dominance: f64,
    normalization_method: NormalizationMethod,
    original_range: (f64, f64),
}

impl CorePadTriad {
    /// Creates a triad, rejecting any component outside `[-1, 1]`.
    pub fn new(
        pleasure: f64,
        arousal: f64,
        dominance: f64,
        normalization_method: NormalizationMethod,
        original_range: (f64, f64),
    ) -> Result<Self, ValidationError> {
        for (dimension, value) in [
            ("pleasure", pleasure),
            ("arousal", arousal),
            ("dominance", dominance),
        ] {
            // NaN fails the range check as well.
            if !(NORMALIZED_MIN..=NORMALIZED_MAX).contains(&value) {
                return Err(ValidationError::out_of_range(
                    format!("normalized {}", dimension),
                    NORMALIZED_MIN,
                    NORMALIZED_MAX,
                    value,
                ));
            }
        }

        Ok(Self {
            pleasure,
            arousal,
            dominance,
            normalization_method,
            original_range,
        })
    }

    pub fn pleasure(&self) -> f64 {
        self.pleasure
    }

    pub fn arousal(&self) -> f64 {
        self.arousal
    }

    pub fn dominance(&self) -> f64 {
        self.dominance
    }

    pub fn normalization_method(&self) -> NormalizationMethod {
        self.normalization_method
    }

    pub fn original_range(&self) -> (f64, f64) {
        self.original_range
    }

    /// Returns the components as a `(pleasure, arousal, dominance)` tuple.
    pub fn to_tuple(&self) -> (f64, f64, f64) {
        (self.pleasure, self.arousal, self.dominance)
    }

    /// Euclidean norm of the triad.
    pub fn magnitude(&self) -> f64 {
        (self.pleasure.powi(2) + self.arousal.powi(2) + self.dominance.powi(2)).sqrt()
    }
}
