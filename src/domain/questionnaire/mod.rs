//! Questionnaire Module - Question tables and answer resolution.
//!
//! Owns the two question tables (Likert and scene), presents them in a
//! uniform client shape, samples random subsets, and turns client answers
//! into the `PadDelta`s consumed by the PAD engine.

mod question;
mod resolver;

pub use question::{
    LikertOption, LikertQuestion, OptionKey, QuestionBank, QuestionKind, QuestionnaireFile,
    SceneOption, SceneQuestion, StandardOption, StandardQuestion, DEFAULT_SAMPLE_SIZE,
};
pub use resolver::{Answer, AnswerResolver};
