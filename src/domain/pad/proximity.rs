//! Distance-based ranking of emotion prototypes.

use serde::Serialize;
use std::f64::consts::SQRT_2;
use tracing::info;

use super::prototype::{EmotionPrototype, EMOTION_PROTOTYPES};
use super::triad::CorePadTriad;
use crate::domain::foundation::{Percentage, ValidationError};

/// Fixed distance normalizer, `sqrt(8)`.
///
/// This is shorter than the cube's body diagonal (`sqrt(12)`), so distances
/// above it clamp to a prevalence of 0.
pub const MAX_EUCLIDEAN_DISTANCE: f64 = 2.0 * SQRT_2;

/// How close a user's triad is to one prototype.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionScore {
    pub emotion_name: String,
    pub prevalence_score: Percentage,
    pub euclidean_distance: f64,
    pub emotion_coordinates: (f64, f64, f64),
}

impl EmotionScore {
    /// Creates a score, rejecting a prevalence outside 0-100.
    pub fn new(
        emotion_name: impl Into<String>,
        prevalence_score: i64,
        euclidean_distance: f64,
        emotion_coordinates: (f64, f64, f64),
    ) -> Result<Self, ValidationError> {
        let prevalence_score = Percentage::try_new(prevalence_score).map_err(|_| {
            ValidationError::out_of_range("prevalence_score", 0.0, 100.0, prevalence_score as f64)
        })?;
        Ok(Self {
            emotion_name: emotion_name.into(),
            prevalence_score,
            euclidean_distance,
            emotion_coordinates,
        })
    }

    fn for_prototype(triad: &CorePadTriad, prototype: &EmotionPrototype) -> Self {
        let distance = euclidean_distance(triad.to_tuple(), prototype.coordinates);
        Self {
            emotion_name: prototype.name.to_string(),
            prevalence_score: prevalence_from_distance(distance),
            euclidean_distance: distance,
            emotion_coordinates: prototype.coordinates,
        }
    }
}

/// Euclidean distance between two PAD points.
pub fn euclidean_distance(a: (f64, f64, f64), b: (f64, f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2) + (a.2 - b.2).powi(2)).sqrt()
}

/// Converts a distance into a 0-100 prevalence: 0 → 100, `sqrt(8)` or more → 0.
pub fn prevalence_from_distance(distance: f64) -> Percentage {
    Percentage::from_closeness(1.0 - distance / MAX_EUCLIDEAN_DISTANCE)
}

/// Scores every prototype against the triad, highest prevalence first.
///
/// The sort is stable, so equal prevalences keep prototype declaration order
/// and identical input always yields identical ordering.
pub fn rank_emotions(triad: &CorePadTriad) -> Vec<EmotionScore> {
    let mut scores: Vec<EmotionScore> = EMOTION_PROTOTYPES
        .iter()
        .map(|prototype| EmotionScore::for_prototype(triad, prototype))
        .collect();

    scores.sort_by(|a, b| b.prevalence_score.cmp(&a.prevalence_score));

    if let Some(primary) = scores.first() {
        info!(
            "Calculated emotion proximity scores. Primary: {} ({})",
            primary.emotion_name, primary.prevalence_score
        );
    }
    scores
}
