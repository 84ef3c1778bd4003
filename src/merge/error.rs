//! Merge validation failures

use thiserror::Error;

/// Message reported when some left key has no counterpart on the right
pub const UNMATCHED_MESSAGE: &str =
    "left table's merge column has values that are not in right table's merge column";

/// Message reported when some left key hits a duplicated right key
pub const DUPLICATE_MESSAGE: &str =
    "right table's merge column contains duplicate matches to the values in left table's merge column";

/// A single reason why a merge is not one-to-one from the left side
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeViolation {
    /// Left keys with zero matching right rows
    UnmatchedLeftKeys {
        /// Number of distinct offending keys
        count: usize,
        /// Rendered offending keys, in left-table order, possibly truncated
        sample: Vec<String>,
    },
    /// Left keys matching a right key that occurs more than once
    DuplicateRightMatches { count: usize, sample: Vec<String> },
}

impl MergeViolation {
    /// Fixed human-readable description of the violation
    pub fn message(&self) -> &'static str {
        match self {
            MergeViolation::UnmatchedLeftKeys { .. } => UNMATCHED_MESSAGE,
            MergeViolation::DuplicateRightMatches { .. } => DUPLICATE_MESSAGE,
        }
    }

    pub fn count(&self) -> usize {
        match self {
            MergeViolation::UnmatchedLeftKeys { count, .. }
            | MergeViolation::DuplicateRightMatches { count, .. } => *count,
        }
    }

    pub fn sample(&self) -> &[String] {
        match self {
            MergeViolation::UnmatchedLeftKeys { sample, .. }
            | MergeViolation::DuplicateRightMatches { sample, .. } => sample,
        }
    }
}

/// Raised when the left merge column does not map one-to-one onto the right merge column.
///
/// Holds at least one [`MergeViolation`]. The message is each violation's
/// message joined by `"; "`, in the order the checks ran.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", join_messages(.violations))]
pub struct ImperfectMergeError {
    violations: Vec<MergeViolation>,
}

fn join_messages(violations: &[MergeViolation]) -> String {
    violations
        .iter()
        .map(MergeViolation::message)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ImperfectMergeError {
    /// Wraps a non-empty list of violations; `None` when there is nothing to report
    pub fn from_violations(violations: Vec<MergeViolation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    /// Aggregates several errors into one, preserving order
    pub fn combine<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = ImperfectMergeError>,
    {
        let violations = errors.into_iter().flat_map(|e| e.violations).collect();
        Self::from_violations(violations)
    }

    pub fn violations(&self) -> &[MergeViolation] {
        &self.violations
    }

    /// True if some left key had no match
    pub fn is_unmatched(&self) -> bool {
        self.violations
            .iter()
            .any(|v| matches!(v, MergeViolation::UnmatchedLeftKeys { .. }))
    }

    /// True if some left key matched a duplicated right key
    pub fn has_duplicate_matches(&self) -> bool {
        self.violations
            .iter()
            .any(|v| matches!(v, MergeViolation::DuplicateRightMatches { .. }))
    }
}
