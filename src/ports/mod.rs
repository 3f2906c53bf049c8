//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuestionSource` - Loads the Likert and scene question tables

mod question_source;

pub use question_source::{QuestionSource, QuestionSourceError};
