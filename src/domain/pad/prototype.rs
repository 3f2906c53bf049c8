//! Reference emotions located in the normalized PAD cube.

use serde::Serialize;

/// A named emotion and its fixed `(pleasure, arousal, dominance)` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmotionPrototype {
    pub name: &'static str,
    pub coordinates: (f64, f64, f64),
}

impl EmotionPrototype {
    const fn new(name: &'static str, pleasure: f64, arousal: f64, dominance: f64) -> Self {
        Self {
            name,
            coordinates: (pleasure, arousal, dominance),
        }
    }
}

/// The sixteen reference emotions, in declaration order.
///
/// Ranking ties are resolved by this order.
pub const EMOTION_PROTOTYPES: [EmotionPrototype; 16] = [
    EmotionPrototype::new("Anger", -0.7, 0.8, 0.6),
    EmotionPrototype::new("Happy", 0.9, 0.6, 0.7),
    EmotionPrototype::new("Joy", 0.9, 0.8, 0.9),
    EmotionPrototype::new("Empathy", 0.7, 0.4, 0.3),
    EmotionPrototype::new("Trust", 0.8, 0.3, 0.5),
    EmotionPrototype::new("Grief_Loss", -0.8, -0.6, -0.7),
    EmotionPrototype::new("Sadness", -0.6, -0.4, -0.5),
    EmotionPrototype::new("Regret_Guilt", -0.6, -0.2, -0.5),
    EmotionPrototype::new("Anxiety", -0.4, 0.7, -0.6),
    EmotionPrototype::new("Fear", -0.5, 0.8, -0.7),
    EmotionPrototype::new("Greed", -0.3, 0.6, 0.8),
    EmotionPrototype::new("Patience_Calm", 0.6, -0.4, 0.4),
    EmotionPrototype::new("Serenity", 0.7, -0.7, 0.2),
    EmotionPrototype::new("Excitement", 0.8, 0.9, 0.6),
    EmotionPrototype::new("Contempt", -0.2, 0.3, 0.9),
    EmotionPrototype::new("Disgust", -0.8, 0.2, 0.4),
];

/// Looks up a prototype by its exact name.
pub fn find_prototype(name: &str) -> Option<&'static EmotionPrototype> {
    EMOTION_PROTOTYPES.iter().find(|p| p.name == name)
}
