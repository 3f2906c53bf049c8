//! AnalyzeAnswersHandler - Command handler for scoring questionnaire answers.
//!
//! Resolves each answer against the question bank and runs the resulting
//! deltas through the PAD engine.

use std::sync::Arc;

use tracing::info;

use super::errors::PadAnalysisError;
use crate::domain::pad::{PadAnalysisResult, PadCoreEngine};
use crate::domain::questionnaire::{Answer, AnswerResolver, QuestionBank};

/// Command carrying a respondent's answers.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeAnswersCommand {
    pub answers: Vec<Answer>,
}

/// Handler for analyzing a completed questionnaire.
pub struct AnalyzeAnswersHandler {
    engine: Arc<PadCoreEngine>,
    bank: Arc<QuestionBank>,
}

impl AnalyzeAnswersHandler {
    pub fn new(engine: Arc<PadCoreEngine>, bank: Arc<QuestionBank>) -> Self {
        Self { engine, bank }
    }

    pub fn handle(&self, cmd: AnalyzeAnswersCommand) -> Result<PadAnalysisResult, PadAnalysisError> {
        info!(answers = cmd.answers.len(), "Analyzing questionnaire answers");

        let deltas = AnswerResolver::new(&self.bank).resolve(&cmd.answers)?;
        let result = self.engine.analyze(deltas)?;

        Ok(result)
    }
}
