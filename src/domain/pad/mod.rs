//! PAD Module - Scoring pipeline for Pleasure-Arousal-Dominance profiles.
//!
//! Turns per-question deltas into a normalized position in the `[-1, 1]^3`
//! PAD cube and ranks a fixed table of emotion prototypes by proximity.
//!
//! # Pipeline
//!
//! 1. `DeltaInput` → `PadDelta` (validation)
//! 2. `PadDelta`s → `RawPadScore` (summation)
//! 3. `RawPadScore` → `CorePadTriad` (`NormalizationMethod`)
//! 4. `CorePadTriad` → ranked `EmotionScore`s
//! 5. Everything → `PadAnalysisResult`
//!
//! All of it is pure and synchronous; `PadCoreEngine::analyze` chains the steps.

mod delta;
mod engine;
mod normalization;
mod prototype;
mod proximity;
mod raw_score;
mod result;
mod triad;

pub use delta::{DeltaInput, PadDelta, DELTA_WARNING_MAGNITUDE};
pub use engine::PadCoreEngine;
pub use normalization::{NormalizationMethod, MAX_CONTRIBUTION_PER_QUESTION, THEORETICAL_RANGE};
pub use prototype::{find_prototype, EmotionPrototype, EMOTION_PROTOTYPES};
pub use proximity::{
    euclidean_distance, prevalence_from_distance, rank_emotions, EmotionScore,
    MAX_EUCLIDEAN_DISTANCE,
};
pub use raw_score::{RawPadScore, RAW_SCORE_SOFT_BOUND};
pub use result::{
    AnalysisMetadata, BreakdownEntry, EmotionBreakdown, PadAnalysisResult, TriadSummary,
    METADATA_TOP_EMOTIONS, NO_EMOTION,
};
pub use triad::{CorePadTriad, NORMALIZED_MAX, NORMALIZED_MIN};
