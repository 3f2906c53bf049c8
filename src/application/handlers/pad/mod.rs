//! PAD handlers - Questionnaire sampling and emotion analysis.
//!
//! # Queries
//!
//! - `GetQuestionsHandler` - Random subset of the question bank
//!
//! # Commands
//!
//! - `AnalyzeAnswersHandler` - Resolve answers, then run the PAD pipeline
//! - `AnalyzeDeltasHandler` - Run the PAD pipeline on precomputed deltas

mod analyze_answers;
mod analyze_deltas;
mod errors;
mod get_questions;

pub use analyze_answers::{AnalyzeAnswersCommand, AnalyzeAnswersHandler};
pub use analyze_deltas::{AnalyzeDeltasCommand, AnalyzeDeltasHandler};
pub use errors::PadAnalysisError;
pub use get_questions::{GetQuestionsHandler, GetQuestionsQuery};
