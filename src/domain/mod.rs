//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `pad` - Pure PAD scoring pipeline (deltas, normalization, emotion ranking)
//! - `questionnaire` - Question tables and answer-to-delta resolution

pub mod foundation;
pub mod pad;
pub mod questionnaire;
