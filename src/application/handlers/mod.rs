//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod pad;

pub use pad::{
    AnalyzeAnswersCommand, AnalyzeAnswersHandler, AnalyzeDeltasCommand, AnalyzeDeltasHandler,
    GetQuestionsHandler, GetQuestionsQuery, PadAnalysisError,
};
