use std::fmt;
use std::sync::Arc;

use crate::column::{BooleanColumn, Float64Column, Int64Column, JoinKey, StringColumn};
use crate::core::error::{Error, Result};

/// Enum to identify column types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Int64,
    Float64,
    String,
    Boolean,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Int64 => "int64",
            ColumnType::Float64 => "float64",
            ColumnType::String => "string",
            ColumnType::Boolean => "bool",
        };
        f.write_str(name)
    }
}

/// Enum representing a column
#[derive(Debug, Clone)]
pub enum Column {
    Int64(Int64Column),
    Float64(Float64Column),
    String(StringColumn),
    Boolean(BooleanColumn),
}

/// Utility functions for column operations
pub mod utils {
    use std::sync::Arc;

    /// Creates a bitmask from a vector of boolean values
    pub fn create_bitmask(nulls: &[bool]) -> Arc<[u8]> {
        let length = nulls.len();
        let bytes_needed = (length + 7) / 8;
        let mut data = vec![0u8; bytes_needed];

        for (i, &is_null) in nulls.iter().enumerate() {
            if is_null {
                let byte_idx = i / 8;
                let bit_idx = i % 8;
                data[byte_idx] |= 1 << bit_idx;
            }
        }

        data.into()
    }

    /// Builds an optional mask, dropping it entirely when nothing is null
    pub fn optional_bitmask(nulls: &[bool]) -> Option<Arc<[u8]>> {
        if nulls.iter().any(|&is_null| is_null) {
            Some(create_bitmask(nulls))
        } else {
            None
        }
    }

    /// Checks whether the bit for `index` is set
    pub fn is_null_at(mask: Option<&Arc<[u8]>>, index: usize) -> bool {
        match mask {
            Some(mask) => {
                let byte_idx = index / 8;
                let bit_idx = index % 8;
                byte_idx < mask.len() && (mask[byte_idx] & (1 << bit_idx)) != 0
            }
            None => false,
        }
    }
}

impl Column {
    /// Returns the length of the column
    pub fn len(&self) -> usize {
        match self {
            Column::Int64(col) => col.len(),
            Column::Float64(col) => col.len(),
            Column::String(col) => col.len(),
            Column::Boolean(col) => col.len(),
        }
    }

    /// Returns whether the column is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the type of the column
    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::Int64(_) => ColumnType::Int64,
            Column::Float64(_) => ColumnType::Float64,
            Column::String(_) => ColumnType::String,
            Column::Boolean(_) => ColumnType::Boolean,
        }
    }

    /// Returns whether the cell at `index` is NULL
    pub fn is_null(&self, index: usize) -> Result<bool> {
        Ok(self.key_at(index)? == JoinKey::Null)
    }

    /// Projects the cell at `index` to a hashable join key
    pub fn key_at(&self, index: usize) -> Result<JoinKey> {
        let key = match self {
            Column::Int64(col) => col.get(index)?.map(JoinKey::Int64),
            Column::Float64(col) => col.get(index)?.map(JoinKey::from_f64),
            Column::String(col) => col.get(index)?.map(|s| JoinKey::String(s.to_string())),
            Column::Boolean(col) => col.get(index)?.map(JoinKey::Boolean),
        };
        Ok(key.unwrap_or(JoinKey::Null))
    }

    /// Projects every cell of the column to a join key
    pub fn keys(&self) -> Result<Vec<JoinKey>> {
        (0..self.len()).map(|i| self.key_at(i)).collect()
    }

    /// Gathers rows by position; `None` produces a NULL cell
    pub fn take(&self, indices: &[Option<usize>]) -> Result<Self> {
        self.check_indices(indices)?;
        Ok(match self {
            Column::Int64(col) => Column::Int64(col.take(indices)),
            Column::Float64(col) => Column::Float64(col.take(indices)),
            Column::String(col) => Column::String(col.take(indices)),
            Column::Boolean(col) => Column::Boolean(col.take(indices)),
        })
    }

    fn check_indices(&self, indices: &[Option<usize>]) -> Result<()> {
        let size = self.len();
        match indices.iter().flatten().find(|&&index| index >= size) {
            Some(&index) => Err(Error::IndexOutOfBounds { index, size }),
            None => Ok(()),
        }
    }

    /// Casts to Int64Column
    pub fn as_int64(&self) -> Option<&Int64Column> {
        match self {
            Column::Int64(col) => Some(col),
            _ => None,
        }
    }

    /// Casts to Float64Column
    pub fn as_float64(&self) -> Option<&Float64Column> {
        match self {
            Column::Float64(col) => Some(col),
            _ => None,
        }
    }

    /// Casts to StringColumn
    pub fn as_string(&self) -> Option<&StringColumn> {
        match self {
            Column::String(col) => Some(col),
            _ => None,
        }
    }

    /// Casts to BooleanColumn
    pub fn as_boolean(&self) -> Option<&BooleanColumn> {
        match self {
            Column::Boolean(col) => Some(col),
            _ => None,
        }
    }

    /// Renders the cell at `index` for display
    pub(crate) fn display_at(&self, index: usize) -> String {
        match self {
            Column::Int64(col) => match col.get(index) {
                Ok(Some(val)) => format!("{}", val),
                _ => "NULL".to_string(),
            },
            Column::Float64(col) => match col.get(index) {
                Ok(Some(val)) => format!("{:.3}", val),
                _ => "NULL".to_string(),
            },
            Column::String(col) => match col.get(index) {
                Ok(Some(val)) => format!("\"{}\"", val),
                _ => "NULL".to_string(),
            },
            Column::Boolean(col) => match col.get(index) {
                Ok(Some(val)) => format!("{}", val),
                _ => "NULL".to_string(),
            },
        }
    }
}

impl PartialEq for Column {
    /// Cell-wise equality; NULL equals NULL and columns of different types never match
    fn eq(&self, other: &Self) -> bool {
        if self.column_type() != other.column_type() || self.len() != other.len() {
            return false;
        }
        match (self.keys(), other.keys()) {
            (Ok(left), Ok(right)) => left == right,
            _ => false,
        }
    }
}

// From implementations for type conversion
impl From<Int64Column> for Column {
    fn from(col: Int64Column) -> Self {
        Column::Int64(col)
    }
}

impl From<Float64Column> for Column {
    fn from(col: Float64Column) -> Self {
        Column::Float64(col)
    }
}

impl From<StringColumn> for Column {
    fn from(col: StringColumn) -> Self {
        Column::String(col)
    }
}

impl From<BooleanColumn> for Column {
    fn from(col: BooleanColumn) -> Self {
        Column::Boolean(col)
    }
}

impl From<Vec<i64>> for Column {
    fn from(data: Vec<i64>) -> Self {
        Column::Int64(Int64Column::new(data))
    }
}

impl From<Vec<f64>> for Column {
    fn from(data: Vec<f64>) -> Self {
        Column::Float64(Float64Column::new(data))
    }
}

impl From<Vec<String>> for Column {
    fn from(data: Vec<String>) -> Self {
        Column::String(StringColumn::new(data))
    }
}

impl From<Vec<&str>> for Column {
    fn from(data: Vec<&str>) -> Self {
        Column::String(StringColumn::new(
            data.into_iter().map(|s| s.to_string()).collect(),
        ))
    }
}

impl From<Vec<bool>> for Column {
    fn from(data: Vec<bool>) -> Self {
        Column::Boolean(BooleanColumn::new(data))
    }
}

/// Helper shared by the typed columns to rebuild a mask after a gather
pub(crate) fn gather_nulls(
    mask: Option<&Arc<[u8]>>,
    indices: &[Option<usize>],
) -> Option<Arc<[u8]>> {
    let nulls: Vec<bool> = indices
        .iter()
        .map(|idx| match idx {
            Some(i) => utils::is_null_at(mask, *i),
            None => true,
        })
        .collect();
    utils::optional_bitmask(&nulls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmask_roundtrip() {
        let mask = utils::create_bitmask(&[false, true, false, false, false, false, false, false, true]);
        assert_eq!(mask.len(), 2);
        assert!(!utils::is_null_at(Some(&mask), 0));
        assert!(utils::is_null_at(Some(&mask), 1));
        assert!(utils::is_null_at(Some(&mask), 8));
        assert!(!utils::is_null_at(None, 1));
    }

    #[test]
    fn test_take_inserts_nulls() {
        let col = Column::from(vec![10i64, 20, 30]);
        let taken = col.take(&[Some(2), None, Some(0)]).unwrap();

        assert_eq!(taken.len(), 3);
        assert_eq!(taken.key_at(0).unwrap(), JoinKey::Int64(30));
        assert!(taken.is_null(1).unwrap());
        assert_eq!(taken.key_at(2).unwrap(), JoinKey::Int64(10));
    }

    #[test]
    fn test_take_out_of_bounds() {
        let col = Column::from(vec!["a", "b"]);
        let result = col.take(&[Some(0), Some(5)]);
        assert!(matches!(
            result,
            Err(Error::IndexOutOfBounds { index: 5, size: 2 })
        ));
    }

    #[test]
    fn test_equality_respects_type() {
        let ints = Column::from(vec![1i64, 2]);
        let floats = Column::from(vec![1.0, 2.0]);
        assert_ne!(ints, floats);
        assert_eq!(ints, Column::from(vec![1i64, 2]));
    }
}
