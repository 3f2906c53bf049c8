//! Adapters - Implementations of ports and inbound transports.
//!
//! - `http` - axum REST endpoints
//! - `questions` - File-backed question source

pub mod http;
pub mod questions;
