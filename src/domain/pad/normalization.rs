//! Normalization strategies mapping raw PAD totals onto `[-1, 1]`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

use super::raw_score::RawPadScore;
use super::triad::CorePadTriad;
use crate::domain::foundation::ValidationError;

/// Largest contribution a single question is assumed to make to one dimension.
pub const MAX_CONTRIBUTION_PER_QUESTION: f64 = 0.5;

/// Fixed symmetric raw range used by [`NormalizationMethod::TheoreticalRange`].
pub const THEORETICAL_RANGE: f64 = 20.0;

/// How raw totals are scaled into the Core PAD Triad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMethod {
    /// Range of `±(num_questions × 0.5)`, so the scale follows questionnaire length.
    #[default]
    QuestionBased,
    /// Fixed range of `±20` regardless of question count.
    TheoreticalRange,
}

impl NormalizationMethod {
    /// Returns the wire name of this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizationMethod::QuestionBased => "question_based",
            NormalizationMethod::TheoreticalRange => "theoretical_range",
        }
    }

    /// Half-width of the raw range this method maps onto `[-1, 1]`.
    pub fn raw_bound(&self, raw: &RawPadScore) -> f64 {
        match self {
            NormalizationMethod::QuestionBased => {
                raw.num_questions as f64 * MAX_CONTRIBUTION_PER_QUESTION
            }
            NormalizationMethod::TheoreticalRange => THEORETICAL_RANGE,
        }
    }

    /// Normalizes raw totals into a Core PAD Triad.
    ///
    /// Each dimension is clamped to `[-bound, bound]` and rescaled linearly
    /// onto `[-1, 1]`. A zero bound (no questions) yields the origin.
    pub fn normalize(&self, raw: &RawPadScore) -> Result<CorePadTriad, ValidationError> {
        let bound = self.raw_bound(raw);
        let scale = |value: f64| -> f64 {
            if bound <= 0.0 {
                return 0.0;
            }
            // Symmetric range, so the linear map reduces to a division.
            value.clamp(-bound, bound) / bound
        };

        let triad = CorePadTriad::new(
            scale(raw.pleasure),
            scale(raw.arousal),
            scale(raw.dominance),
            *self,
            (-bound, bound),
        )?;

        info!(
            method = self.as_str(),
            "Normalized PAD scores: P={:.3}, A={:.3}, D={:.3}",
            triad.pleasure(),
            triad.arousal(),
            triad.dominance()
        );
        Ok(triad)
    }
}

impl fmt::Display for NormalizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NormalizationMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "question_based" => Ok(NormalizationMethod::QuestionBased),
            "theoretical_range" => Ok(NormalizationMethod::TheoreticalRange),
            _ => Err(ValidationError::unsupported_normalization(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(p: f64, a: f64, d: f64, n: usize) -> RawPadScore {
        RawPadScore {
            pleasure: p,
            arousal: a,
            dominance: d,
            num_questions: n,
        }
    }

    #[test]
    fn default_is_question_based() {
        assert_eq!(NormalizationMethod::default(), NormalizationMethod::QuestionBased);
    }

    #[test]
    fn question_based_rescales_by_question_count() {
        let triad = NormalizationMethod::QuestionBased
            .normalize(&raw(0.9, 0.6, 0.7, 2))
            .unwrap();
        assert!((triad.pleasure() - 0.9).abs() < 1e-12);
        assert!((triad.arousal() - 0.6).abs() < 1e-12);
        assert!((triad.dominance() - 0.7).abs() < 1e-12);
        assert_eq!(triad.original_range(), (-1.0, 1.0));
        assert_eq!(triad.normalization_method(), NormalizationMethod::QuestionBased);
    }

    #[test]
    fn question_based_clamps_to_theoretical_range() {
        let triad = NormalizationMethod::QuestionBased
            .normalize(&raw(5.0, -5.0, 0.25, 2))
            .unwrap();
        assert_eq!(triad.to_tuple(), (1.0, -1.0, 0.25));
    }

    #[test]
    fn question_based_with_no_questions_is_origin() {
        let triad = NormalizationMethod::QuestionBased
            .normalize(&raw(0.0, 0.0, 0.0, 0))
            .unwrap();
        assert_eq!(triad.to_tuple(), (0.0, 0.0, 0.0));
        assert_eq!(triad.original_range().1, 0.0);
    }

    #[test]
    fn question_based_with_no_questions_ignores_stray_raw_values() {
        let triad = NormalizationMethod::QuestionBased
            .normalize(&raw(3.0, -1.0, 0.5, 0))
            .unwrap();
        assert_eq!(triad.to_tuple(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn theoretical_range_divides_by_twenty() {
        let triad = NormalizationMethod::TheoreticalRange
            .normalize(&raw(0.9, 0.6, 0.7, 1))
            .unwrap();
        assert!((triad.pleasure() - 0.045).abs() < 1e-12);
        assert!((triad.arousal() - 0.03).abs() < 1e-12);
        assert!((triad.dominance() - 0.035).abs() < 1e-12);
        assert_eq!(triad.original_range(), (-20.0, 20.0));
    }

    #[test]
    fn theoretical_range_clamps() {
        let triad = NormalizationMethod::TheoreticalRange
            .normalize(&raw(45.0, -30.0, 10.0, 50))
            .unwrap();
        assert_eq!(triad.to_tuple(), (1.0, -1.0, 0.5));
    }

    #[test]
    fn parses_known_method_names() {
        assert_eq!(
            "question_based".parse::<NormalizationMethod>().unwrap(),
            NormalizationMethod::QuestionBased
        );
        assert_eq!(
            "THEORETICAL_RANGE".parse::<NormalizationMethod>().unwrap(),
            NormalizationMethod::TheoreticalRange
        );
    }

    #[test]
    fn rejects_unknown_method_names() {
        let err = "percentile".parse::<NormalizationMethod>().unwrap_err();
        assert_eq!(err, ValidationError::unsupported_normalization("percentile"));
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(NormalizationMethod::QuestionBased.to_string(), "question_based");
        let json = serde_json::to_string(&NormalizationMethod::TheoreticalRange).unwrap();
        assert_eq!(json, "\"theoretical_range\"");
    }
}
