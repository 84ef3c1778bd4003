// Core error types for safe-merge
pub mod error;

// Re-exports for convenience
pub use error::{Error, Result};
