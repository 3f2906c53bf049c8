//! Per-question PAD contributions and the heterogeneous input accepted by the engine.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::domain::foundation::ValidationError;

/// Magnitude above which a single delta component is considered anomalous.
///
/// Anomalous components are logged, never rejected.
pub const DELTA_WARNING_MAGNITUDE: f64 = 2.0;

/// One answered question's contribution to Pleasure, Arousal and Dominance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PadDeltaRecord")]
pub struct PadDelta {
    pleasure: f64,
    arousal: f64,
    dominance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    question_id: Option<String>,
}

impl PadDelta {
    /// Creates a delta, rejecting NaN and infinite components.
    pub fn new(
        pleasure: f64,
        arousal: f64,
        dominance: f64,
        question_id: Option<String>,
    ) -> Result<Self, ValidationError> {
        for (dimension, value) in [
            ("pleasure", pleasure),
            ("arousal", arousal),
            ("dominance", dominance),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::non_finite(dimension, value));
            }
            if value.abs() > DELTA_WARNING_MAGNITUDE {
                warn!(
                    dimension,
                    value,
                    question_id = question_id.as_deref().unwrap_or("-"),
                    "Large {} delta detected: {}",
                    dimension,
                    value
                );
            }
        }

        Ok(Self {
            pleasure,
            arousal,
            dominance,
            question_id,
        })
    }

    /// A zero contribution for a question that was skipped or could not be mapped.
    pub fn zero(question_id: impl Into<String>) -> Self {
        Self {
            pleasure: 0.0,
            arousal: 0.0,
            dominance: 0.0,
            question_id: Some(question_id.into()),
        }
    }

    pub fn pleasure(&self) -> f64 {
        self.pleasure
    }

    pub fn arousal(&self) -> f64 {
        self.arousal
    }

    pub fn dominance(&self) -> f64 {
        self.dominance
    }

    pub fn question_id(&self) -> Option<&str> {
        self.question_id.as_deref()
    }

    /// Returns the components as a `(pleasure, arousal, dominance)` tuple.
    pub fn to_tuple(&self) -> (f64, f64, f64) {
        (self.pleasure, self.arousal, self.dominance)
    }
}

#[derive(Deserialize)]
struct PadDeltaRecord {
    pleasure: f64,
    arousal: f64,
    dominance: f64,
    question_id: Option<String>,
}

impl TryFrom<PadDeltaRecord> for PadDelta {
    type Error = ValidationError;

    fn try_from(record: PadDeltaRecord) -> Result<Self, Self::Error> {
        PadDelta::new(
            record.pleasure,
            record.arousal,
            record.dominance,
            record.question_id,
        )
    }
}

/// A single element of the engine's input sequence.
///
/// Callers may hand over fully built deltas, plain numeric triples, or
/// loosely typed values decoded from a wire format. Only the first two are
/// guaranteed to be well formed; raw values are checked during validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DeltaInput {
    Delta(PadDelta),
    Triple([f64; 3]),
    Raw(Value),
}

impl<'de> Deserialize<'de> for DeltaInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Anything that is not an exact delta object or numeric triple is kept
        // raw so validation can reject it with its position.
        let input = match Value::deserialize(deserializer)? {
            Value::Object(map) => {
                let value = Value::Object(map);
                match PadDelta::deserialize(&value) {
                    Ok(delta) => DeltaInput::Delta(delta),
                    Err(_) => DeltaInput::Raw(value),
                }
            }
            Value::Array(items) => match numeric_triple(&items) {
                Some(components) => DeltaInput::Triple(components),
                None => DeltaInput::Raw(Value::Array(items)),
            },
            other => DeltaInput::Raw(other),
        };
        Ok(input)
    }
}

impl DeltaInput {
    /// Converts this element into a validated delta.
    ///
    /// `index` is the 0-based position in the input sequence. It is used in
    /// error messages and to synthesize `q_<index + 1>` identifiers for
    /// triple-sourced deltas.
    pub fn into_delta(self, index: usize) -> Result<PadDelta, ValidationError> {
        match self {
            DeltaInput::Delta(delta) => Ok(delta),
            DeltaInput::Triple([p, a, d]) => from_components(index, p, a, d),
            DeltaInput::Raw(Value::Array(items)) if items.len() == 3 => {
                let p = component_to_f64(index, &items[0])?;
                let a = component_to_f64(index, &items[1])?;
                let d = component_to_f64(index, &items[2])?;
                from_components(index, p, a, d)
            }
            DeltaInput::Raw(Value::Array(items)) => Err(ValidationError::invalid_delta(
                index,
                format!("expected 3 components, got {}", items.len()),
            )),
            DeltaInput::Raw(other) => Err(ValidationError::invalid_delta(
                index,
                format!("expected a delta or a 3-element sequence, got {}", other),
            )),
        }
    }
}

fn numeric_triple(items: &[Value]) -> Option<[f64; 3]> {
    match items {
        [p, a, d] => Some([p.as_f64()?, a.as_f64()?, d.as_f64()?]),
        _ => None,
    }
}

fn from_components(index: usize, p: f64, a: f64, d: f64) -> Result<PadDelta, ValidationError> {
    PadDelta::new(p, a, d, Some(format!("q_{}", index + 1)))
        .map_err(|e| ValidationError::invalid_delta(index, e.to_string()))
}

fn component_to_f64(index: usize, value: &Value) -> Result<f64, ValidationError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| {
            ValidationError::invalid_delta(index, format!("{} is not representable as f64", n))
        }),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| {
            ValidationError::invalid_delta(index, format!("could not convert {:?} to float", s))
        }),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        other => Err(ValidationError::invalid_delta(
            index,
            format!("could not convert {} to float", other),
        )),
    }
}

impl From<PadDelta> for DeltaInput {
    fn from(delta: PadDelta) -> Self {
        DeltaInput::Delta(delta)
    }
}

impl From<(f64, f64, f64)> for DeltaInput {
    fn from((p, a, d): (f64, f64, f64)) -> Self {
        DeltaInput::Triple([p, a, d])
    }
}

impl From<[f64; 3]> for DeltaInput {
    fn from(components: [f64; 3]) -> Self {
        DeltaInput::Triple(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_accepts_finite_values() {
        let delta = PadDelta::new(0.5, -0.25, 1.0, Some("q1".to_string())).unwrap();
        assert_eq!(delta.to_tuple(), (0.5, -0.25, 1.0));
        assert_eq!(delta.question_id(), Some("q1"));
    }

    #[test]
    fn new_permits_large_magnitudes() {
        let delta = PadDelta::new(3.5, -2.5, 0.0, None).unwrap();
        assert_eq!(delta.pleasure(), 3.5);
        assert_eq!(delta.arousal(), -2.5);
    }

    #[test]
    fn new_rejects_nan_and_infinity() {
        assert!(matches!(
            PadDelta::new(f64::NAN, 0.0, 0.0, None),
            Err(ValidationError::NonFinite { ref field, .. }) if field == "pleasure"
        ));
        assert!(matches!(
            PadDelta::new(0.0, 0.0, f64::INFINITY, None),
            Err(ValidationError::NonFinite { ref field, .. }) if field == "dominance"
        ));
    }

    #[test]
    fn zero_delta_keeps_question_id() {
        let delta = PadDelta::zero("21");
        assert_eq!(delta.to_tuple(), (0.0, 0.0, 0.0));
        assert_eq!(delta.question_id(), Some("21"));
    }

    #[test]
    fn delta_input_passes_through_existing_delta() {
        let delta = PadDelta::new(0.1, 0.2, 0.3, Some("custom".to_string())).unwrap();
        let validated = DeltaInput::from(delta.clone()).into_delta(7).unwrap();
        assert_eq!(validated, delta);
    }

    #[test]
    fn triple_gets_synthesized_question_id() {
        let validated = DeltaInput::from((0.1, 0.2, 0.3)).into_delta(0).unwrap();
        assert_eq!(validated.question_id(), Some("q_1"));

        let validated = DeltaInput::from([0.1, 0.2, 0.3]).into_delta(4).unwrap();
        assert_eq!(validated.question_id(), Some("q_5"));
    }

    #[test]
    fn raw_array_accepts_numeric_strings() {
        let validated = DeltaInput::Raw(json!([1, "0.5", " -0.25 "]))
            .into_delta(2)
            .unwrap();
        assert_eq!(validated.to_tuple(), (1.0, 0.5, -0.25));
        assert_eq!(validated.question_id(), Some("q_3"));
    }

    #[test]
    fn raw_array_converts_booleans_to_unit_values() {
        let validated = DeltaInput::Raw(json!([true, false, 0.5]))
            .into_delta(0)
            .unwrap();
        assert_eq!(validated.to_tuple(), (1.0, 0.0, 0.5));
    }

    #[test]
    fn raw_two_element_array_is_rejected_with_index() {
        let err = DeltaInput::Raw(json!([0.1, 0.2])).into_delta(1).unwrap_err();
        assert_eq!(
            err,
            ValidationError::invalid_delta(1, "expected 3 components, got 2")
        );
    }

    #[test]
    fn raw_string_is_rejected_with_index() {
        let err = DeltaInput::Raw(json!("happy")).into_delta(5).unwrap_err();
        match err {
            ValidationError::InvalidDelta { index, .. } => assert_eq!(index, 5),
            other => panic!("Expected InvalidDelta, got {:?}", other),
        }
    }

    #[test]
    fn raw_non_numeric_component_is_rejected() {
        let err = DeltaInput::Raw(json!([0.1, "abc", 0.3])).into_delta(0).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDelta { index: 0, .. }));

        let err = DeltaInput::Raw(json!([0.1, null, 0.3])).into_delta(0).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDelta { index: 0, .. }));
    }

    #[test]
    fn non_finite_triple_reports_index() {
        let err = DeltaInput::from((0.0, f64::NAN, 0.0)).into_delta(3).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDelta { index: 3, .. }));
    }

    #[test]
    fn delta_input_deserializes_objects_and_arrays() {
        let inputs: Vec<DeltaInput> = serde_json::from_value(json!([
            {"pleasure": 0.5, "arousal": 0.5, "dominance": 0.5, "question_id": "7"},
            [0.4, 0.1, 0.2],
            [0.4, "0.1", 0.2],
            "nonsense",
            [0.1, 0.2, 0.3, "extra"],
            {"pleasure": 0.1}
        ]))
        .unwrap();

        assert!(matches!(inputs[0], DeltaInput::Delta(_)));
        assert!(matches!(inputs[1], DeltaInput::Triple(_)));
        assert!(matches!(inputs[2], DeltaInput::Raw(_)));
        assert!(matches!(inputs[3], DeltaInput::Raw(_)));
        assert!(matches!(inputs[4], DeltaInput::Raw(_)));
        assert!(matches!(inputs[5], DeltaInput::Raw(_)));
    }

    #[test]
    fn incomplete_delta_object_is_rejected_with_index() {
        let input: DeltaInput = serde_json::from_value(json!({"pleasure": 0.1})).unwrap();
        let err = input.into_delta(2).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDelta { index: 2, .. }));
    }

    #[test]
    fn pad_delta_serializes_without_missing_question_id() {
        let delta = PadDelta::new(0.5, 0.0, -0.5, None).unwrap();
        let json = serde_json::to_value(&delta).unwrap();
        assert_eq!(json, json!({"pleasure": 0.5, "arousal": 0.0, "dominance": -0.5}));
    }
}
