// DataFrame implementations module
pub mod base;
pub mod join;

// Re-exports for convenience
pub use base::DataFrame;
pub use join::{JoinExt, JoinType, DEFAULT_SUFFIXES};
