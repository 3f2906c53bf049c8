//! HTTP adapters - REST API implementations.

pub mod pad;

// Re-export key types for convenience
pub use pad::pad_routes;
pub use pad::PadAppState;
