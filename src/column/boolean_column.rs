use std::sync::Arc;

use crate::column::common::{gather_nulls, utils};
use crate::core::error::{Error, Result};

/// Structure representing a Boolean column
#[derive(Debug, Clone)]
pub struct BooleanColumn {
    pub(crate) data: Arc<[bool]>,
    pub(crate) null_mask: Option<Arc<[u8]>>,
}

impl BooleanColumn {
    /// Create a new BooleanColumn
    pub fn new(data: Vec<bool>) -> Self {
        Self {
            data: data.into(),
            null_mask: None,
        }
    }

    /// Create a BooleanColumn with NULL values
    pub fn with_nulls(data: Vec<bool>, nulls: Vec<bool>) -> Self {
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

    /// Get data at the specified index
    pub fn get(&self, index: usize) -> Result<Option<bool>> {
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
        let data: Vec<bool> = indices
            .iter()
            .map(|idx| idx.map(|i| self.data[i]).unwrap_or(false))
            .collect();

        Self {
            data: data.into(),
            null_mask: gather_nulls(self.null_mask.as_ref(), indices),
        }
    }
}
