//! The analysis result handed back to callers, plus presentation helpers.

use serde::Serialize;

use super::normalization::NormalizationMethod;
use super::proximity::EmotionScore;
use super::raw_score::RawPadScore;
use super::triad::CorePadTriad;

/// Placeholder name reported when a rank has no prototype to fill it.
pub const NO_EMOTION: &str = "None";

/// Number of `(name, score)` pairs recorded in [`AnalysisMetadata::top_3_emotions`].
pub const METADATA_TOP_EMOTIONS: usize = 3;

/// Summary values recorded alongside every analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisMetadata {
    pub total_questions: usize,
    pub normalization_method: NormalizationMethod,
    pub max_distance: f64,
    pub triad_magnitude: f64,
    pub top_3_emotions: Vec<(String, u8)>,
}

/// Complete output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PadAnalysisResult {
    pub raw_scores: RawPadScore,
    pub core_triad: CorePadTriad,
    /// All prototypes, highest prevalence first.
    pub emotion_scores: Vec<EmotionScore>,
    pub primary_emotion: String,
    pub secondary_emotion: String,
    pub metadata: AnalysisMetadata,
}

/// One row of an [`EmotionBreakdown`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownEntry {
    pub name: String,
    pub prevalence: u8,
    pub distance: f64,
}

/// Triad rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TriadSummary {
    pub pleasure: f64,
    pub arousal: f64,
    pub dominance: f64,
}

/// Condensed, display-oriented view of a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionBreakdown {
    pub primary_emotion: String,
    pub primary_score: u8,
    pub secondary_emotion: String,
    pub secondary_score: u8,
    pub top_emotions: Vec<BreakdownEntry>,
    pub core_pad_triad: TriadSummary,
}

impl PadAnalysisResult {
    /// Returns up to `n` of the highest-ranked emotion scores.
    pub fn top_emotions(&self, n: usize) -> &[EmotionScore] {
        &self.emotion_scores[..n.min(self.emotion_scores.len())]
    }

    /// Builds a display breakdown with the `top_n` best matches.
    ///
    /// Distances and triad components are rounded to three decimals.
    pub fn breakdown(&self, top_n: usize) -> EmotionBreakdown {
        let score_at = |rank: usize| {
            self.emotion_scores
                .get(rank)
                .map(|s| s.prevalence_score.value())
                .unwrap_or(0)
        };

        EmotionBreakdown {
            primary_emotion: self.primary_emotion.clone(),
            primary_score: score_at(0),
            secondary_emotion: self.secondary_emotion.clone(),
            secondary_score: score_at(1),
            top_emotions: self
                .top_emotions(top_n)
                .iter()
                .map(|s| BreakdownEntry {
                    name: s.emotion_name.clone(),
                    prevalence: s.prevalence_score.value(),
                    distance: round3(s.euclidean_distance),
                })
                .collect(),
            core_pad_triad: TriadSummary {
                pleasure: round3(self.core_triad.pleasure()),
                arousal: round3(self.core_triad.arousal()),
                dominance: round3(self.core_triad.dominance()),
            },
        }
    }

    /// Exports the full result as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
