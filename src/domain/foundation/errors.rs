//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors raised while validating inputs to, or values produced by, the
/// PAD scoring pipeline.
///
/// This is the only rejectable error kind of the core. Anomalies that are
/// merely suspicious (large deltas, raw scores beyond the soft bound) are
/// logged instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyInput { field: String },

    #[error("Invalid delta at index {index}: {reason}")]
    InvalidDelta { index: usize, reason: String },

    #[error("Field '{field}' must be a finite number, got {value}")]
    NonFinite { field: String, value: f64 },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Unsupported normalization method: {method}")]
    UnsupportedNormalization { method: String },
}

impl ValidationError {
    /// Creates an empty input validation error.
    pub fn empty_input(field: impl Into<String>) -> Self {
        ValidationError::EmptyInput { field: field.into() }
    }

    /// Creates an invalid delta error naming the offending position.
    pub fn invalid_delta(index: usize, reason: impl Into<String>) -> Self {
        ValidationError::InvalidDelta {
            index,
            reason: reason.into(),
        }
    }

    /// Creates a non-finite value error.
    pub fn non_finite(field: impl Into<String>, value: f64) -> Self {
        ValidationError::NonFinite {
            field: field.into(),
            value,
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an unsupported normalization method error.
    pub fn unsupported_normalization(method: impl Into<String>) -> Self {
        ValidationError::UnsupportedNormalization {
            method: method.into(),
        }
    }

    /// Returns the error code for this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyInput { .. } => ErrorCode::ValidationFailed,
            ValidationError::InvalidDelta { .. } => ErrorCode::InvalidDelta,
            ValidationError::NonFinite { .. } => ErrorCode::InvalidDelta,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::UnsupportedNormalization { .. } => {
                ErrorCode::UnsupportedNormalization
            }
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidDelta,
    OutOfRange,
    UnsupportedNormalization,

    // Questionnaire errors
    NoQuestionsAvailable,
    QuestionSourceError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidDelta => "INVALID_DELTA",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::UnsupportedNormalization => "UNSUPPORTED_NORMALIZATION",
            ErrorCode::NoQuestionsAvailable => "NO_QUESTIONS_AVAILABLE",
            ErrorCode::QuestionSourceError => "QUESTION_SOURCE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let domain_error = DomainError::new(err.code(), err.to_string());
        match &err {
            ValidationError::InvalidDelta { index, .. } => {
                domain_error.with_detail("index", index.to_string())
            }
            ValidationError::EmptyInput { field }
            | ValidationError::NonFinite { field, .. }
            | ValidationError::OutOfRange { field, .. } => {
                domain_error.with_detail("field", field.clone())
            }
            ValidationError::UnsupportedNormalization { method } => {
                domain_error.with_detail("method", method.clone())
            }
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_input_displays_correctly() {
        let err = ValidationError::empty_input("deltas");
        assert_eq!(format!("{}", err), "Field 'deltas' cannot be empty");
    }

    #[test]
    fn validation_error_invalid_delta_names_index() {
        let err = ValidationError::invalid_delta(3, "expected 3 components, got 2");
        assert_eq!(
            format!("{}", err),
            "Invalid delta at index 3: expected 3 components, got 2"
        );
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("pleasure", -1.0, 1.0, 1.5);
        assert_eq!(
            format!("{}", err),
            "Field 'pleasure' must be between -1 and 1, got 1.5"
        );
    }

    #[test]
    fn validation_error_unsupported_normalization_displays_correctly() {
        let err = ValidationError::unsupported_normalization("percentile");
        assert_eq!(
            format!("{}", err),
            "Unsupported normalization method: percentile"
        );
    }

    #[test]
    fn validation_error_maps_to_codes() {
        assert_eq!(
            ValidationError::empty_input("deltas").code(),
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            ValidationError::non_finite("arousal", f64::NAN).code(),
            ErrorCode::InvalidDelta
        );
        assert_eq!(
            ValidationError::unsupported_normalization("x").code(),
            ErrorCode::UnsupportedNormalization
        );
    }

    #[test]
    fn domain_error_from_validation_carries_index_detail() {
        let err: DomainError = ValidationError::invalid_delta(1, "not a sequence").into();
        assert_eq!(err.code, ErrorCode::InvalidDelta);
        assert_eq!(err.details.get("index"), Some(&"1".to_string()));
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::NoQuestionsAvailable, "No questions available");
        assert_eq!(
            format!("{}", err),
            "[NO_QUESTIONS_AVAILABLE] No questions available"
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::OutOfRange), "OUT_OF_RANGE");
        assert_eq!(
            format!("{}", ErrorCode::QuestionSourceError),
            "QUESTION_SOURCE_ERROR"
        );
    }
}
