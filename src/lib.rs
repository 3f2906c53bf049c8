//! PAD Profiler - Questionnaire-driven emotional profiling
//!
//! This crate scores questionnaire answers on the Pleasure-Arousal-Dominance
//! model and ranks sixteen emotion prototypes by their proximity to the
//! respondent's normalized PAD position.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
