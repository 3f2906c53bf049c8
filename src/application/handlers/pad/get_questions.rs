//! GetQuestionsHandler - Query handler for sampling questions to present.

use std::sync::Arc;

use rand::Rng;
use tracing::debug;

use super::errors::PadAnalysisError;
use crate::domain::questionnaire::{QuestionBank, StandardQuestion, DEFAULT_SAMPLE_SIZE};

/// Query for a random subset of questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetQuestionsQuery {
    /// Maximum number of questions to return.
    pub limit: usize,
}

impl Default for GetQuestionsQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SAMPLE_SIZE,
        }
    }
}

/// Handler for sampling questions from the shared bank.
pub struct GetQuestionsHandler {
    bank: Arc<QuestionBank>,
}

impl GetQuestionsHandler {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self { bank }
    }

    pub fn handle(&self, query: GetQuestionsQuery) -> Result<Vec<StandardQuestion>, PadAnalysisError> {
        self.handle_with_rng(query, &mut rand::thread_rng())
    }

    /// Same as [`handle`](Self::handle) with a caller-supplied random source.
    pub fn handle_with_rng<R: Rng + ?Sized>(
        &self,
        query: GetQuestionsQuery,
        rng: &mut R,
    ) -> Result<Vec<StandardQuestion>, PadAnalysisError> {
        if self.bank.is_empty() {
            return Err(PadAnalysisError::NoQuestionsAvailable);
        }

        let questions = self.bank.sample(query.limit, rng);
        debug!(requested = query.limit, returned = questions.len(), "Sampled questions");
        Ok(questions)
    }
}
