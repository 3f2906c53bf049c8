//! Question definitions and the combined question bank.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Default number of questions presented to a respondent.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Identifier of a selectable option: a Likert score or a scene label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionKey {
    Number(i64),
    Text(String),
}

impl OptionKey {
    /// True when a raw answer value equals this key without conversion.
    ///
    /// Numeric keys also equal numerically identical floats (`3` and `3.0`).
    pub fn matches_value(&self, answer: &Value) -> bool {
        match (self, answer) {
            (OptionKey::Number(key), Value::Number(n)) => {
                n.as_i64() == Some(*key) || n.as_f64() == Some(*key as f64)
            }
            (OptionKey::Text(key), Value::String(s)) => key == s,
            _ => false,
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKey::Number(n) => write!(f, "{}", n),
            OptionKey::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One scored choice of a Likert question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikertOption {
    pub score: i64,
    #[serde(default)]
    pub emotion: String,
    #[serde(rename = "dP", default)]
    pub d_pleasure: f64,
    #[serde(rename = "dA", default)]
    pub d_arousal: f64,
    #[serde(rename = "dD", default)]
    pub d_dominance: f64,
}

/// A statement rated on a numeric scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikertQuestion {
    pub id: i64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub mapping: Vec<LikertOption>,
}

/// One labeled choice of a scenario question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneOption {
    pub id: OptionKey,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "dP", default)]
    pub d_pleasure: f64,
    #[serde(rename = "dA", default)]
    pub d_arousal: f64,
    #[serde(rename = "dD", default)]
    pub d_dominance: f64,
}

/// A short scenario with a discrete set of reactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneQuestion {
    pub id: i64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub options: Vec<SceneOption>,
}

/// On-disk envelope shared by both question files.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionnaireFile<T> {
    #[serde(default = "Vec::new")]
    pub questionnaire: Vec<T>,
}

/// Which table a standardized question came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Likert,
    Scene,
}

/// Option as presented to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardOption {
    pub id: OptionKey,
    pub text: String,
}

/// A question in the uniform shape presented to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardQuestion {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub text: String,
    pub options: Vec<StandardOption>,
}

/// Both question tables, loaded once and shared read-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionBank {
    likert: Vec<LikertQuestion>,
    scene: Vec<SceneQuestion>,
}

impl QuestionBank {
    pub fn new(likert: Vec<LikertQuestion>, scene: Vec<SceneQuestion>) -> Self {
        Self { likert, scene }
    }

    pub fn likert(&self) -> &[LikertQuestion] {
        &self.likert
    }

    pub fn scene(&self) -> &[SceneQuestion] {
        &self.scene
    }

    pub fn len(&self) -> usize {
        self.likert.len() + self.scene.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All questions in client shape: Likert first, then scene.
    pub fn standardized(&self) -> Vec<StandardQuestion> {
        let likert = self.likert.iter().map(|q| StandardQuestion {
            id: q.id,
            kind: QuestionKind::Likert,
            text: q.text.clone(),
            options: q
                .mapping
                .iter()
                .map(|m| StandardOption {
                    id: OptionKey::Number(m.score),
                    text: format!("{} — {}", m.score, m.emotion),
                })
                .collect(),
        });

        let scene = self.scene.iter().map(|q| StandardQuestion {
            id: q.id,
            kind: QuestionKind::Scene,
            text: q.text.clone(),
            options: q
                .options
                .iter()
                .map(|o| StandardOption {
                    id: o.id.clone(),
                    text: o.text.clone(),
                })
                .collect(),
        });

        likert.chain(scene).collect()
    }

    /// Picks up to `count` distinct questions at random.
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<StandardQuestion> {
        let all = self.standardized();
        all.choose_multiple(rng, count.min(all.len()))
            .cloned()
            .collect()
    }
}
