//! PAD Core Engine - validation, aggregation, normalization and ranking.

use tracing::{debug, info};

use super::delta::{DeltaInput, PadDelta};
use super::normalization::NormalizationMethod;
use super::prototype::EMOTION_PROTOTYPES;
use super::proximity::{rank_emotions, EmotionScore, MAX_EUCLIDEAN_DISTANCE};
use super::raw_score::RawPadScore;
use super::result::{AnalysisMetadata, PadAnalysisResult, METADATA_TOP_EMOTIONS, NO_EMOTION};
use super::triad::CorePadTriad;
use crate::domain::foundation::ValidationError;

/// Stateless scoring pipeline configured with a normalization strategy.
///
/// Configuration is fixed at construction, so one engine can be shared
/// behind an `Arc` and called concurrently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PadCoreEngine {
    normalization: NormalizationMethod,
}

impl PadCoreEngine {
    /// Creates an engine using the given normalization strategy.
    pub fn new(normalization: NormalizationMethod) -> Self {
        debug!(
            method = normalization.as_str(),
            emotions = EMOTION_PROTOTYPES.len(),
            "PAD core engine initialized"
        );
        Self { normalization }
    }

    /// Creates an engine from a strategy name such as `"theoretical_range"`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedNormalization` for unknown names.
    pub fn with_method_name(name: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(name.parse()?))
    }

    pub fn normalization(&self) -> NormalizationMethod {
        self.normalization
    }

    /// Converts heterogeneous inputs into validated deltas.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if `inputs` is empty
    /// - `InvalidDelta` naming the first malformed element's index
    pub fn validate_input_deltas<I>(&self, inputs: I) -> Result<Vec<PadDelta>, ValidationError>
    where
        I: IntoIterator,
        I::Item: Into<DeltaInput>,
    {
        let deltas = inputs
            .into_iter()
            .enumerate()
            .map(|(index, input)| input.into().into_delta(index))
            .collect::<Result<Vec<_>, _>>()?;

        if deltas.is_empty() {
            return Err(ValidationError::empty_input("deltas"));
        }

        info!("Validated {} input deltas", deltas.len());
        Ok(deltas)
    }

    /// Sums validated deltas into raw scores.
    pub fn calculate_raw_scores(&self, deltas: &[PadDelta]) -> RawPadScore {
        RawPadScore::from_deltas(deltas)
    }

    /// Applies the configured normalization strategy.
    pub fn normalize(&self, raw: &RawPadScore) -> Result<CorePadTriad, ValidationError> {
        self.normalization.normalize(raw)
    }

    /// Ranks all prototypes by proximity to the triad.
    pub fn calculate_emotion_proximity(&self, triad: &CorePadTriad) -> Vec<EmotionScore> {
        rank_emotions(triad)
    }

    /// Runs the full pipeline: validate, aggregate, normalize, rank, assemble.
    ///
    /// Either a complete result is returned or the first `ValidationError`
    /// encountered; there is no partial result.
    pub fn analyze<I>(&self, inputs: I) -> Result<PadAnalysisResult, ValidationError>
    where
        I: IntoIterator,
        I::Item: Into<DeltaInput>,
    {
        info!("Starting PAD analysis pipeline");

        let deltas = self.validate_input_deltas(inputs)?;
        let raw_scores = self.calculate_raw_scores(&deltas);
        let core_triad = self.normalize(&raw_scores)?;
        let emotion_scores = self.calculate_emotion_proximity(&core_triad);

        let primary_emotion = emotion_scores
            .first()
            .map(|s| s.emotion_name.clone())
            .unwrap_or_else(|| NO_EMOTION.to_string());
        let secondary_emotion = emotion_scores
            .get(1)
            .map(|s| s.emotion_name.clone())
            .unwrap_or_else(|| NO_EMOTION.to_string());

        let metadata = AnalysisMetadata {
            total_questions: deltas.len(),
            normalization_method: self.normalization,
            max_distance: MAX_EUCLIDEAN_DISTANCE,
            triad_magnitude: core_triad.magnitude(),
            top_3_emotions: emotion_scores
                .iter()
                .take(METADATA_TOP_EMOTIONS)
                .map(|s| (s.emotion_name.clone(), s.prevalence_score.value()))
                .collect(),
        };

        info!("PAD analysis complete. Primary emotion: {}", primary_emotion);

        Ok(PadAnalysisResult {
            raw_scores,
            core_triad,
            emotion_scores,
            primary_emotion,
            secondary_emotion,
            metadata,
        })
    }
}
