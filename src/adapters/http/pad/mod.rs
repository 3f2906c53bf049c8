//! PAD HTTP adapter module.
//!
//! Provides REST API endpoints for sampling questions and scoring answers.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{PadAppState, DEFAULT_TOP_EMOTIONS};
pub use routes::pad_routes;
