//! Filesystem adapter for the Likert and scene question files

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::questionnaire::{
    LikertQuestion, QuestionBank, QuestionnaireFile, SceneQuestion,
};
use crate::ports::{QuestionSource, QuestionSourceError};

/// File-backed question source
///
/// Reads `{"questionnaire": [...]}` documents. Files ending in `.yaml` or
/// `.yml` are parsed as YAML, everything else as JSON.
pub struct FileQuestionSource {
    likert_path: PathBuf,
    scene_path: PathBuf,
    lenient: bool,
}

impl FileQuestionSource {
    /// Create a strict source: any unreadable file fails the load
    pub fn new(likert_path: impl AsRef<Path>, scene_path: impl AsRef<Path>) -> Self {
        Self {
            likert_path: likert_path.as_ref().to_path_buf(),
            scene_path: scene_path.as_ref().to_path_buf(),
            lenient: false,
        }
    }

    /// Treat an unreadable file as an empty table instead of failing
    pub fn lenient(mut self) -> Self {
        self.lenient = true;
        self
    }

    async fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, QuestionSourceError> {
        let display = path.display().to_string();

        let content = fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QuestionSourceError::NotFound(display.clone())
            } else {
                QuestionSourceError::IoError(format!("Failed to read {}: {}", display, e))
            }
        })?;

        let parse_error = |reason: String| QuestionSourceError::ParseError {
            path: display.clone(),
            reason,
        };

        let file: QuestionnaireFile<T> = if is_yaml(path) {
            serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))?
        } else {
            serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?
        };

        Ok(file.questionnaire)
    }

    async fn load_table<T: DeserializeOwned>(
        &self,
        path: &Path,
    ) -> Result<Vec<T>, QuestionSourceError> {
        match Self::read_table(path).await {
            Ok(table) => {
                tracing::debug!("Loaded {} questions from {}", table.len(), path.display());
                Ok(table)
            }
            Err(e) if self.lenient => {
                tracing::error!("Failed to load {}: {}", path.display(), e);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[async_trait]
impl QuestionSource for FileQuestionSource {
    async fn load(&self) -> Result<QuestionBank, QuestionSourceError> {
        let likert: Vec<LikertQuestion> = self.load_table(&self.likert_path).await?;
        let scene: Vec<SceneQuestion> = self.load_table(&self.scene_path).await?;

        tracing::info!(
            likert = likert.len(),
            scene = scene.len(),
            "Question bank loaded"
        );
        Ok(QuestionBank::new(likert, scene))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const LIKERT_JSON: &str = r#"{
        "questionnaire": [
            {"id": 21, "text": "I stay calm under pressure.", "mapping": [
                {"score": 1, "emotion": "Anxious", "dP": -0.3, "dA": 0.4, "dD": -0.2},
                {"score": 5, "emotion": "Calm", "dP": 0.3, "dA": -0.3, "dD": 0.2}
            ]}
        ]
    }"#;

    const SCENE_YAML: &str = r#"
questionnaire:
  - id: 3
    text: A friend cancels last minute.
    options:
      - id: 3a
        text: Feel relieved
        dP: 0.1
        dA: -0.2
        dD: 0.0
      - id: 3b
        text: Feel hurt
        dP: -0.3
        dA: 0.2
        dD: -0.2
"#;

    async fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_loads_json_and_yaml_tables() {
        let dir = TempDir::new().unwrap();
        let likert = write(&dir, "question_likert.json", LIKERT_JSON).await;
        let scene = write(&dir, "question_scene.yaml", SCENE_YAML).await;

        let bank = FileQuestionSource::new(&likert, &scene).load().await.unwrap();

        assert_eq!(bank.likert().len(), 1);
        assert_eq!(bank.likert()[0].mapping[1].d_pleasure, 0.3);
        assert_eq!(bank.scene().len(), 1);
        assert_eq!(bank.scene()[0].options[1].text, "Feel hurt");
    }

    #[tokio::test]
    async fn test_strict_source_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let likert = write(&dir, "question_likert.json", LIKERT_JSON).await;

        let result = FileQuestionSource::new(&likert, dir.path().join("missing.json"))
            .load()
            .await;

        assert!(matches!(result, Err(QuestionSourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_strict_source_reports_parse_error() {
        let dir = TempDir::new().unwrap();
        let likert = write(&dir, "question_likert.json", "{ not json").await;
        let scene = write(&dir, "question_scene.yaml", SCENE_YAML).await;

        let result = FileQuestionSource::new(&likert, &scene).load().await;

        assert!(matches!(result, Err(QuestionSourceError::ParseError { .. })));
    }

    #[tokio::test]
    async fn test_lenient_source_substitutes_empty_tables() {
        let dir = TempDir::new().unwrap();
        let likert = write(&dir, "question_likert.json", LIKERT_JSON).await;

        let bank = FileQuestionSource::new(&likert, dir.path().join("missing.yml"))
            .lenient()
            .load()
            .await
            .unwrap();

        assert_eq!(bank.likert().len(), 1);
        assert!(bank.scene().is_empty());
    }

    #[test]
    fn test_yaml_detection() {
        assert!(is_yaml(Path::new("q.yaml")));
        assert!(is_yaml(Path::new("q.yml")));
        assert!(!is_yaml(Path::new("q.json")));
        assert!(!is_yaml(Path::new("questions")));
    }
}
