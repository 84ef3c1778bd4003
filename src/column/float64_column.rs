use std::sync::Arc;

use crate::column::common::{gather_nulls, utils};
use crate::core::error::{Error, Result};

/// Structure representing a Float64 column
#[derive(Debug, Clone)]
pub struct Float64Column {
    pub(crate) data: Arc<[f64]>,
    pub(crate) null_mask: Option<Arc<[u8]>>,
}

impl Float64Column {
    /// Create a new Float64Column
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data: data.into(),
            null_mask: None,
        }
    }

    /// Create a Float64Column with NULL values
    pub fn with_nulls(data: Vec<f64>, nulls: Vec<bool>) -> Self {
        Self {
            data: data.into(),
            null_mask: utils::optional_bitmask(&nulls),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get data at the specified index. NaN is stored as a value and reported as such.
    pub fn get(&self, index: usize) -> Result<Option<f64>> {
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

    pub(crate) fn take(&self, indices: &[Option<usize>]) -> Self {
        let data: Vec<f64> = indices
            .iter()
            .map(|idx| idx.map(|i| self.data[i]).unwrap_or(f64::NAN))
            .collect();

        Self {
            data: data.into(),
            null_mask: gather_nulls(self.null_mask.as_ref(), indices),
        }
    }
}
