//! HTTP handlers for questionnaire and analysis endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    AnalyzeAnswersCommand, AnalyzeAnswersHandler, AnalyzeDeltasCommand, AnalyzeDeltasHandler,
    GetQuestionsHandler, GetQuestionsQuery, PadAnalysisError,
};
use crate::domain::foundation::DomainError;
use crate::domain::pad::PadCoreEngine;
use crate::domain::questionnaire::{QuestionBank, DEFAULT_SAMPLE_SIZE};

use super::dto::{
    AnalyzeDeltasRequest, AnalyzeRequest, AnalyzeResponse, ErrorResponse, HealthResponse,
    QuestionsParams, StandardQuestion,
};

/// Number of ranked emotions returned when not configured otherwise.
pub const DEFAULT_TOP_EMOTIONS: usize = 6;

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// PAD API error that implements IntoResponse.
#[derive(Debug)]
pub enum PadApiError {
    BadRequest(DomainError),
    Internal(DomainError),
}

impl IntoResponse for PadApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            PadApiError::BadRequest(err) => (StatusCode::BAD_REQUEST, ErrorResponse::from(err)),
            PadApiError::Internal(err) => {
                tracing::error!("Request failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::from(err))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<PadAnalysisError> for PadApiError {
    fn from(error: PadAnalysisError) -> Self {
        match error {
            PadAnalysisError::Validation(_) => PadApiError::BadRequest(error.into()),
            PadAnalysisError::NoQuestionsAvailable => PadApiError::Internal(error.into()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing the engine and question bank.
#[derive(Clone)]
pub struct PadAppState {
    pub engine: Arc<PadCoreEngine>,
    pub bank: Arc<QuestionBank>,
    pub sample_size: usize,
    pub top_emotions: usize,
}

impl PadAppState {
    pub fn new(engine: PadCoreEngine, bank: QuestionBank) -> Self {
        Self {
            engine: Arc::new(engine),
            bank: Arc::new(bank),
            sample_size: DEFAULT_SAMPLE_SIZE,
            top_emotions: DEFAULT_TOP_EMOTIONS,
        }
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_top_emotions(mut self, top_emotions: usize) -> Self {
        self.top_emotions = top_emotions;
        self
    }

    pub fn get_questions_handler(&self) -> GetQuestionsHandler {
        GetQuestionsHandler::new(self.bank.clone())
    }

    pub fn analyze_answers_handler(&self) -> AnalyzeAnswersHandler {
        AnalyzeAnswersHandler::new(self.engine.clone(), self.bank.clone())
    }

    pub fn analyze_deltas_handler(&self) -> AnalyzeDeltasHandler {
        AnalyzeDeltasHandler::new(self.engine.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// GET /api/questions
///
/// Returns a random sample of standardized questions.
pub async fn get_questions(
    State(state): State<PadAppState>,
    Query(params): Query<QuestionsParams>,
) -> Result<Json<Vec<StandardQuestion>>, PadApiError> {
    let query = GetQuestionsQuery {
        limit: params.limit.unwrap_or(state.sample_size),
    };

    let questions = state.get_questions_handler().handle(query)?;
    Ok(Json(questions))
}

/// POST /api/analyze
///
/// Scores a set of questionnaire answers.
pub async fn analyze_answers(
    State(state): State<PadAppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, PadApiError> {
    let cmd = AnalyzeAnswersCommand {
        answers: request.answers,
    };

    let result = state.analyze_answers_handler().handle(cmd)?;
    Ok(Json(AnalyzeResponse::from_result(result, state.top_emotions)))
}

/// POST /api/analyze/deltas
///
/// Scores precomputed PAD deltas.
pub async fn analyze_deltas(
    State(state): State<PadAppState>,
    Json(request): Json<AnalyzeDeltasRequest>,
) -> Result<Json<AnalyzeResponse>, PadApiError> {
    let cmd = AnalyzeDeltasCommand {
        deltas: request.deltas,
    };

    let result = state.analyze_deltas_handler().handle(cmd)?;
    Ok(Json(AnalyzeResponse::from_result(result, state.top_emotions)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, ValidationError};

    #[test]
    fn validation_errors_map_to_bad_request() {
        let err = PadApiError::from(PadAnalysisError::from(ValidationError::empty_input("deltas")));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_questions_map_to_internal_error() {
        let err = PadApiError::from(PadAnalysisError::NoQuestionsAvailable);
        match &err {
            PadApiError::Internal(domain) => assert_eq!(domain.code, ErrorCode::NoQuestionsAvailable),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn state_builders_override_defaults() {
        let state = PadAppState::new(PadCoreEngine::default(), QuestionBank::default())
            .with_sample_size(4)
            .with_top_emotions(3);
        assert_eq!(state.sample_size, 4);
        assert_eq!(state.top_emotions, 3);
    }
}
