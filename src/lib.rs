//! Safe merging for column-oriented DataFrames.
//!
//! A merge is "safe" when every value in the left merge column has exactly
//! one matching row in the right merge column. The checks in [`merge`] detect
//! the two ways this can fail (unmatched left values and left values hitting
//! duplicated right values) and [`safe_inner_merge`] joins only when neither
//! occurs.
//!
//! ```
//! use safe_merge::{safe_inner_merge, DataFrame};
//!
//! let left = DataFrame::from_columns(vec![("A", vec![1i64, 2, 3]), ("C", vec![5, 6, 7])])?;
//! let right = DataFrame::from_columns(vec![("A", vec![1i64, 2, 3]), ("B", vec![7, 8, 9])])?;
//!
//! let merged = safe_inner_merge(&left, &right, "A", "A")?;
//! assert_eq!(merged.column_names(), &["A", "C", "B"]);
//! # Ok::<(), safe_merge::Error>(())
//! ```

// Core module with the error types
pub mod core;

pub mod column;
pub mod config;
pub mod dataframe;
pub mod merge;

// Re-export core types
pub use crate::core::error::{Error, Result};

pub use column::{BooleanColumn, Column, ColumnType, Float64Column, Int64Column, JoinKey, StringColumn};
pub use config::{LoggingConfig, SafeMergeConfig};
pub use dataframe::{DataFrame, JoinExt, JoinType};
pub use merge::{
    check_left_all_matched, check_left_duplicate_matches, check_perfect_match, safe_inner_merge,
    ImperfectMergeError, MergeOptions, MergeViolation, SafeMergeExt,
};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
