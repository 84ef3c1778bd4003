use serde::{Deserialize, Serialize};

use crate::dataframe::DEFAULT_SUFFIXES;

/// Tunables for validation reports and the joined output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    /// Suffix for overlapping left column names in the joined output
    pub left_suffix: String,
    /// Suffix for overlapping right column names in the joined output
    pub right_suffix: String,
    /// Upper bound on offending keys kept in each violation's sample
    pub max_reported_keys: usize,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            left_suffix: DEFAULT_SUFFIXES.0.to_string(),
            right_suffix: DEFAULT_SUFFIXES.1.to_string(),
            max_reported_keys: 10,
        }
    }
}

impl MergeOptions {
    pub fn suffixes(&self) -> (&str, &str) {
        (&self.left_suffix, &self.right_suffix)
    }
}
