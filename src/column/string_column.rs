use std::sync::Arc;

use crate::column::common::{gather_nulls, utils};
use crate::core::error::{Error, Result};

/// Structure representing a string column
#[derive(Debug, Clone)]
pub struct StringColumn {
    pub(crate) data: Arc<[Arc<str>]>,
    pub(crate) null_mask: Option<Arc<[u8]>>,
}

impl StringColumn {
    /// Create a new StringColumn from a vector of strings
    pub fn new(data: Vec<String>) -> Self {
        Self {
            data: data.into_iter().map(Arc::from).collect(),
            null_mask: None,
        }
    }

    /// Create a StringColumn with NULL values
    pub fn with_nulls(data: Vec<String>, nulls: Vec<bool>) -> Self {
        Self {
            data: data.into_iter().map(Arc::from).collect(),
            null_mask: utils::optional_bitmask(&nulls),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get string at the specified index
    pub fn get(&self, index: usize) -> Result<Option<&str>> {
        if index >= self.data.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.data.len(),
            });
        }

        if utils::is_null_at(self.null_mask.as_ref(), index) {
            return Ok(None);
        }

        Ok(Some(&*self.data[index]))
    }

    // Strings are shared with the source column, not copied
    pub(crate) fn take(&self, indices: &[Option<usize>]) -> Self {
        let empty: Arc<str> = Arc::from("");
        let data: Arc<[Arc<str>]> = indices
            .iter()
            .map(|idx| match idx {
                Some(i) => Arc::clone(&self.data[*i]),
                None => Arc::clone(&empty),
            })
            .collect();

        Self {
            data,
            null_mask: gather_nulls(self.null_mask.as_ref(), indices),
        }
    }
}
