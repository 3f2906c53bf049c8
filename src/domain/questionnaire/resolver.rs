//! Maps client answers onto PAD deltas using the question bank.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::question::{LikertQuestion, OptionKey, QuestionBank, SceneQuestion};
use crate::domain::foundation::ValidationError;
use crate::domain::pad::PadDelta;

/// A client's answer to one question.
///
/// Likert answers carry the chosen score; scene answers carry the option id
/// (or its display text). `None` means the question was skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: i64,
    #[serde(default)]
    pub answer: Option<Value>,
}

impl Answer {
    pub fn new(question_id: i64, answer: impl Into<Value>) -> Self {
        Self {
            question_id,
            answer: Some(answer.into()),
        }
    }

    pub fn skipped(question_id: i64) -> Self {
        Self {
            question_id,
            answer: None,
        }
    }
}

/// Resolves answers against the Likert and scene tables.
///
/// Every answer yields exactly one delta. Skipped or unmappable answers
/// yield a zero delta so they still count toward the question total.
pub struct AnswerResolver<'a> {
    likert: HashMap<i64, &'a LikertQuestion>,
    scene: HashMap<i64, &'a SceneQuestion>,
}

impl<'a> AnswerResolver<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self {
            likert: bank.likert().iter().map(|q| (q.id, q)).collect(),
            scene: bank.scene().iter().map(|q| (q.id, q)).collect(),
        }
    }

    /// Resolves every answer into a delta, preserving order.
    pub fn resolve(&self, answers: &[Answer]) -> Result<Vec<PadDelta>, ValidationError> {
        answers.iter().map(|answer| self.resolve_one(answer)).collect()
    }

    /// Resolves one answer.
    ///
    /// Likert lookup is tried first; when it finds no matching score the scene
    /// table is consulted for the same id.
    pub fn resolve_one(&self, answer: &Answer) -> Result<PadDelta, ValidationError> {
        let question_id = answer.question_id.to_string();

        let Some(value) = answer.answer.as_ref() else {
            warn!(question_id = answer.question_id, "Skipping unanswered question");
            return Ok(PadDelta::zero(question_id));
        };

        if let Some((dp, da, dd)) = self.likert_deltas(answer.question_id, value) {
            debug!(question_id = answer.question_id, "Resolved Likert answer");
            return PadDelta::new(dp, da, dd, Some(question_id));
        }

        if let Some((dp, da, dd)) = self.scene_deltas(answer.question_id, value) {
            debug!(question_id = answer.question_id, "Resolved scene answer");
            return PadDelta::new(dp, da, dd, Some(question_id));
        }

        warn!(
            question_id = answer.question_id,
            "No mapping found for question {} answer {}; using zero delta",
            answer.question_id,
            value
        );
        Ok(PadDelta::zero(question_id))
    }

    fn likert_deltas(&self, question_id: i64, value: &Value) -> Option<(f64, f64, f64)> {
        let question = self.likert.get(&question_id)?;
        let score = answer_as_score(value)?;
        question
            .mapping
            .iter()
            .find(|m| m.score == score)
            .map(|m| (m.d_pleasure, m.d_arousal, m.d_dominance))
    }

    fn scene_deltas(&self, question_id: i64, value: &Value) -> Option<(f64, f64, f64)> {
        let question = self.scene.get(&question_id)?;
        let answer_text = answer_as_text(value);
        question
            .options
            .iter()
            .find(|option| {
                // Id and display text are interchangeable keys. Only text ids
                // match the string form of an answer.
                option.id.matches_value(value)
                    || matches!(
                        &option.id,
                        OptionKey::Text(id) if answer_text.as_deref() == Some(id.as_str())
                    )
                    || matches!(value, Value::String(s) if *s == option.text)
            })
            .map(|o| (o.d_pleasure, o.d_arousal, o.d_dominance))
    }
}

/// Integer form of a Likert answer: integers as-is, floats truncated,
/// integer strings parsed.
fn answer_as_score(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// String form of an answer, used to compare against string option ids.
fn answer_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
