//! Question table adapters

mod file_source;

pub use file_source::FileQuestionSource;
