//! Errors returned by the PAD command and query handlers.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Failure of a PAD handler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PadAnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No questions available")]
    NoQuestionsAvailable,
}

impl From<PadAnalysisError> for DomainError {
    fn from(err: PadAnalysisError) -> Self {
        match err {
            PadAnalysisError::Validation(e) => e.into(),
            PadAnalysisError::NoQuestionsAvailable => {
                DomainError::new(ErrorCode::NoQuestionsAvailable, "No questions available")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_keep_their_message() {
        let err = PadAnalysisError::from(ValidationError::empty_input("deltas"));
        assert_eq!(err.to_string(), "Field 'deltas' cannot be empty");
    }

    #[test]
    fn converts_to_domain_error_codes() {
        let domain: DomainError = PadAnalysisError::NoQuestionsAvailable.into();
        assert_eq!(domain.code, ErrorCode::NoQuestionsAvailable);

        let domain: DomainError =
            PadAnalysisError::from(ValidationError::unsupported_normalization("x")).into();
        assert_eq!(domain.code, ErrorCode::UnsupportedNormalization);
    }
}
