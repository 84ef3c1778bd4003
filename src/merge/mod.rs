//! Merge validation: guards a single-column equi-join so that every left key
//! maps to exactly one right row.
//!
//! The checks never mutate their inputs. [`safe_inner_merge`] either returns a
//! complete joined DataFrame or an [`ImperfectMergeError`] listing every
//! violation found.

mod checks;
mod error;
mod options;
mod relation;

pub use checks::{
    check_left_all_matched, check_left_all_matched_with, check_left_duplicate_matches,
    check_left_duplicate_matches_with, check_perfect_match, check_perfect_match_with,
    safe_inner_merge, safe_inner_merge_with,
};
pub use error::{ImperfectMergeError, MergeViolation, DUPLICATE_MESSAGE, UNMATCHED_MESSAGE};
pub use options::MergeOptions;

use crate::core::error::Result;
use crate::dataframe::DataFrame;

/// Merge validation as methods on the left DataFrame
pub trait SafeMergeExt {
    /// See [`check_left_all_matched`]
    fn check_left_all_matched(&self, right: &Self, left_on: &str, right_on: &str) -> Result<()>;

    /// See [`check_left_duplicate_matches`]
    fn check_left_duplicate_matches(
        &self,
        right: &Self,
        left_on: &str,
        right_on: &str,
    ) -> Result<()>;

    /// See [`check_perfect_match`]
    fn check_perfect_match(&self, right: &Self, left_on: &str, right_on: &str) -> Result<()>;

    /// See [`safe_inner_merge`]
    fn safe_inner_merge(&self, right: &Self, left_on: &str, right_on: &str) -> Result<DataFrame>;
}

impl SafeMergeExt for DataFrame {
    fn check_left_all_matched(&self, right: &Self, left_on: &str, right_on: &str) -> Result<()> {
        checks::check_left_all_matched(self, right, left_on, right_on)
    }

    fn check_left_duplicate_matches(
        &self,
        right: &Self,
        left_on: &str,
        right_on: &str,
    ) -> Result<()> {
        checks::check_left_duplicate_matches(self, right, left_on, right_on)
    }

    fn check_perfect_match(&self, right: &Self, left_on: &str, right_on: &str) -> Result<()> {
        checks::check_perfect_match(self, right, left_on, right_on)
    }

    fn safe_inner_merge(&self, right: &Self, left_on: &str, right_on: &str) -> Result<DataFrame> {
        checks::safe_inner_merge(self, right, left_on, right_on)
    }
}
