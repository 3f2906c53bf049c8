//! AnalyzeDeltasHandler - Command handler for scoring precomputed deltas.

use std::sync::Arc;

use super::errors::PadAnalysisError;
use crate::domain::pad::{DeltaInput, PadAnalysisResult, PadCoreEngine};

/// Command carrying raw delta inputs, one per answered question.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeDeltasCommand {
    pub deltas: Vec<DeltaInput>,
}

/// Handler that feeds deltas straight into the engine.
pub struct AnalyzeDeltasHandler {
    engine: Arc<PadCoreEngine>,
}

impl AnalyzeDeltasHandler {
    pub fn new(engine: Arc<PadCoreEngine>) -> Self {
        Self { engine }
    }

    pub fn handle(&self, cmd: AnalyzeDeltasCommand) -> Result<PadAnalysisResult, PadAnalysisError> {
        Ok(self.engine.analyze(cmd.deltas)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;
    use crate::domain::pad::NormalizationMethod;
    use serde_json::json;

    #[test]
    fn positive_deltas_rank_happy_first() {
        let handler = AnalyzeDeltasHandler::new(Arc::new(PadCoreEngine::default()));
        let deltas = vec![
            DeltaInput::from([0.5, 0.4, 0.3]),
            DeltaInput::from([0.4, 0.3, 0.4]),
            DeltaInput::from([0.3, 0.2, 0.3]),
        ];

        let result = handler.handle(AnalyzeDeltasCommand { deltas }).unwrap();

        assert_eq!(result.metadata.total_questions, 3);
        assert!(result.core_triad.pleasure() > 0.5);
        assert_eq!(result.primary_emotion, "Happy");
    }

    #[test]
    fn honors_engine_normalization() {
        let handler = AnalyzeDeltasHandler::new(Arc::new(PadCoreEngine::new(
            NormalizationMethod::TheoreticalRange,
        )));
        let deltas = vec![DeltaInput::from([10.0, -20.0, 40.0])];

        let result = handler.handle(AnalyzeDeltasCommand { deltas }).unwrap();

        assert_eq!(result.core_triad.to_tuple(), (0.5, -1.0, 1.0));
    }

    #[test]
    fn malformed_delta_reports_its_index() {
        let handler = AnalyzeDeltasHandler::new(Arc::new(PadCoreEngine::default()));
        let deltas: Vec<DeltaInput> =
            serde_json::from_value(json!([[0.1, 0.2, 0.3], [0.1, 0.2]])).unwrap();

        let err = handler.handle(AnalyzeDeltasCommand { deltas }).unwrap_err();

        assert!(matches!(
            err,
            PadAnalysisError::Validation(ValidationError::InvalidDelta { index: 1, .. })
        ));
    }
}
