//! PAD analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::pad::{NormalizationMethod, PadCoreEngine};

/// Engine settings
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// `question_based` or `theoretical_range`
    #[serde(default = "default_normalization_method")]
    pub normalization_method: String,

    /// Ranked emotions included in API responses
    #[serde(default = "default_top_emotions")]
    pub top_emotions: usize,
}

impl AnalysisConfig {
    /// Parse the configured normalization method
    pub fn normalization(&self) -> Result<NormalizationMethod, ValidationError> {
        self.normalization_method
            .parse()
            .map_err(|_| ValidationError::UnsupportedNormalization(self.normalization_method.clone()))
    }

    /// Build an engine with the configured normalization
    pub fn engine(&self) -> Result<PadCoreEngine, ValidationError> {
        Ok(PadCoreEngine::new(self.normalization()?))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.normalization()?;
        if self.top_emotions == 0 {
            return Err(ValidationError::InvalidTopEmotions);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            normalization_method: default_normalization_method(),
            top_emotions: default_top_emotions(),
        }
    }
}

fn default_normalization_method() -> String {
    NormalizationMethod::default().as_str().to_string()
}

fn default_top_emotions() -> usize {
    6
}
