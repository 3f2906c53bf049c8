//! HTTP DTOs for questionnaire and analysis endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;
use crate::domain::pad::{AnalysisMetadata, DeltaInput, PadAnalysisResult};
use crate::domain::questionnaire::Answer;

pub use crate::domain::questionnaire::StandardQuestion;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters for the question sampling endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsParams {
    pub limit: Option<usize>,
}

/// Request to analyze a completed questionnaire.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub answers: Vec<Answer>,
}

/// Request to analyze precomputed deltas.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeDeltasRequest {
    pub deltas: Vec<DeltaInput>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Normalized triad as returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreTriadResponse {
    pub pleasure: f64,
    pub arousal: f64,
    pub dominance: f64,
}

/// One ranked emotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScoreResponse {
    pub name: String,
    pub score: u8,
}

/// Analysis response.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub primary_emotion: String,
    pub secondary_emotion: String,
    pub core_triad: CoreTriadResponse,
    pub top_emotions: Vec<EmotionScoreResponse>,
    pub metadata: AnalysisMetadata,
}

impl AnalyzeResponse {
    /// Builds the response, keeping the `top_n` best-ranked emotions.
    pub fn from_result(result: PadAnalysisResult, top_n: usize) -> Self {
        let top_emotions = result
            .top_emotions(top_n)
            .iter()
            .map(|s| EmotionScoreResponse {
                name: s.emotion_name.clone(),
                score: s.prevalence_score.value(),
            })
            .collect();

        Self {
            core_triad: CoreTriadResponse {
                pleasure: result.core_triad.pleasure(),
                arousal: result.core_triad.arousal(),
                dominance: result.core_triad.dominance(),
            },
            top_emotions,
            primary_emotion: result.primary_emotion,
            secondary_emotion: result.secondary_emotion,
            metadata: result.metadata,
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };
        Self {
            code: err.code.to_string(),
            message: err.message,
            details,
        }
    }
}
