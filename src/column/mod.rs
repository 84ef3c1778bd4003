mod boolean_column;
mod common;
mod float64_column;
mod int64_column;
mod key;
mod string_column;

pub use boolean_column::BooleanColumn;
pub use common::{Column, ColumnType};
pub use float64_column::Float64Column;
pub use int64_column::Int64Column;
pub use key::JoinKey;
pub use string_column::StringColumn;

// Re-export column utility functions
pub use common::utils;
