pub mod base85;
pub mod errors;
pub mod padding;

// Re-export error types for public API
pub use errors::{DecodeError, Rendered};
