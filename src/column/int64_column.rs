use std::sync::Arc;

use crate::column::common::{gather_nulls, utils};
use crate::core::error::{Error, Result};

/// Structure representing an Int64 column
#[derive(Debug, Clone)]
pub struct Int64Column {
    pub(crate) data: Arc<[i64]>,
    pub(crate) null_mask: Option<Arc<[u8]>>,
}

impl Int64Column {
    /// Create a new Int64Column
    pub fn new(data: Vec<i64>) -> Self {
        Self {
            data: data.into(),
            null_mask: None,
        }
    }

    /// Create an Int64Column with NULL values
    pub fn with_nulls(data: Vec<i64>, nulls: Vec<bool>) -> Self {
        Self {
            data: data.into(),
            null_mask: utils::optional_bitmask(&nulls),
        }
    }

    /// Returns the number of values
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the column holds no values
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get data at the specified index
    pub fn get(&self, index: usize) -> Result<Option<i64>> {
        if index >= self.data.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.data.len(),
            });
        }

        if utils::is_null_at(self.null_mask.as_ref(), index) {
            return Ok(None);
        }

        Ok(Some(self.data[index]))
    }

    /// Gather rows by position. Callers validate bounds.
    pub(crate) fn take(&self, indices: &[Option<usize>]) -> Self {
        let data: Vec<i64> = indices
            .iter()
            .map(|idx| idx.map(|i| self.data[i]).unwrap_or_default())
            .collect();

        Self {
            data: data.into(),
            null_mask: gather_nulls(self.null_mask.as_ref(), indices),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_with_nulls() {
        let col = Int64Column::with_nulls(vec![1, 0, 3], vec![false, true, false]);
        assert_eq!(col.get(0).unwrap(), Some(1));
        assert_eq!(col.get(1).unwrap(), None);
        assert_eq!(col.get(2).unwrap(), Some(3));
        assert!(col.get(3).is_err());
    }

    #[test]
    fn test_without_nulls_has_no_mask() {
        let col = Int64Column::with_nulls(vec![1, 2], vec![false, false]);
        assert!(col.null_mask.is_none());
    }
}
