//! Raw (unnormalized) PAD totals.

use serde::Serialize;
use tracing::{info, warn};

use super::delta::PadDelta;

/// Soft bound for summed raw scores; values beyond it are logged only.
pub const RAW_SCORE_SOFT_BOUND: f64 = 100.0;

/// Per-dimension sums of every delta in one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawPadScore {
    pub pleasure: f64,
    pub arousal: f64,
    pub dominance: f64,
    /// Number of deltas folded in, including zero deltas for skipped questions.
    pub num_questions: usize,
}

impl RawPadScore {
    /// Sums the deltas dimension by dimension.
    ///
    /// Zero deltas still count toward `num_questions`, which feeds the
    /// question-based normalization divisor.
    pub fn from_deltas(deltas: &[PadDelta]) -> Self {
        let (pleasure, arousal, dominance) = deltas.iter().fold(
            (0.0, 0.0, 0.0),
            |(p, a, d), delta| (p + delta.pleasure(), a + delta.arousal(), d + delta.dominance()),
        );

        let raw = Self {
            pleasure,
            arousal,
            dominance,
            num_questions: deltas.len(),
        };

        for (dimension, value) in raw.dimensions() {
            if !(-RAW_SCORE_SOFT_BOUND..=RAW_SCORE_SOFT_BOUND).contains(&value) {
                warn!(
                    dimension,
                    value,
                    "Raw {} score {} outside expected range [{}, {}]",
                    dimension,
                    value,
                    -RAW_SCORE_SOFT_BOUND,
                    RAW_SCORE_SOFT_BOUND
                );
            }
        }

        info!(
            num_questions = raw.num_questions,
            "Calculated raw PAD scores: P={:.2}, A={:.2}, D={:.2}",
            pleasure,
            arousal,
            dominance
        );
        raw
    }

    /// Returns the components as a `(pleasure, arousal, dominance)` tuple.
    pub fn to_tuple(&self) -> (f64, f64, f64) {
        (self.pleasure, self.arousal, self.dominance)
    }

    fn dimensions(&self) -> [(&'static str, f64); 3] {
        [
            ("pleasure", self.pleasure),
            ("arousal", self.arousal),
            ("dominance", self.dominance),
        ]
    }
}
