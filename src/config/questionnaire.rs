//! Question bank configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where question tables live and how many questions to serve
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionnaireConfig {
    /// Likert question table (JSON or YAML)
    #[serde(default = "default_likert_path")]
    pub likert_path: PathBuf,

    /// Scene question table (JSON or YAML)
    #[serde(default = "default_scene_path")]
    pub scene_path: PathBuf,

    /// Questions returned per request when no limit is given
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    /// Start with an empty table when a file cannot be read
    #[serde(default = "default_lenient")]
    pub lenient: bool,
}

impl QuestionnaireConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sample_size == 0 {
            return Err(ValidationError::InvalidSampleSize);
        }
        Ok(())
    }
}

impl Default for QuestionnaireConfig {
    fn default() -> Self {
        Self {
            likert_path: default_likert_path(),
            scene_path: default_scene_path(),
            sample_size: default_sample_size(),
            lenient: default_lenient(),
        }
    }
}

fn default_likert_path() -> PathBuf {
    PathBuf::from("data/question_likert.json")
}

fn default_scene_path() -> PathBuf {
    PathBuf::from("data/question_scene.json")
}

fn default_sample_size() -> usize {
    crate::domain::questionnaire::DEFAULT_SAMPLE_SIZE
}

fn default_lenient() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QuestionnaireConfig::default();
        assert_eq!(config.likert_path, PathBuf::from("data/question_likert.json"));
        assert_eq!(config.sample_size, 10);
        assert!(config.lenient);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_sample_size_is_invalid() {
        let config = QuestionnaireConfig {
            sample_size: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSampleSize));
    }
}
