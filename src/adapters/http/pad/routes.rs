//! HTTP routes for questionnaire and analysis endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{analyze_answers, analyze_deltas, get_questions, health, PadAppState};

/// Creates the PAD router with all routes.
pub fn pad_routes(state: PadAppState) -> Router {
    Router::new()
        // GET /health
        .route("/health", get(health))
        // GET /api/questions?limit=N
        .route("/api/questions", get(get_questions))
        // POST /api/analyze
        .route("/api/analyze", post(analyze_answers))
        // POST /api/analyze/deltas
        .route("/api/analyze/deltas", post(analyze_deltas))
        .with_state(state)
}
