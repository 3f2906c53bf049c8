//! QuestionSource port for loading question tables

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::questionnaire::QuestionBank;

/// Errors that can occur while loading question tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSourceError {
    /// Question file not found
    NotFound(String),
    /// IO error
    IoError(String),
    /// File contents could not be parsed
    ParseError { path: String, reason: String },
}

impl std::fmt::Display for QuestionSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Question file not found: {}", path),
            Self::IoError(msg) => write!(f, "IO error: {}", msg),
            Self::ParseError { path, reason } => {
                write!(f, "Failed to parse {}: {}", path, reason)
            }
        }
    }
}

impl std::error::Error for QuestionSourceError {}

impl From<QuestionSourceError> for DomainError {
    fn from(err: QuestionSourceError) -> Self {
        DomainError::new(ErrorCode::QuestionSourceError, err.to_string())
    }
}

/// Provides the Likert and scene question tables
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Load both tables into a question bank
    async fn load(&self) -> Result<QuestionBank, QuestionSourceError>;
}
