//! Transient left-to-right match relation over the two key columns

use std::collections::{HashMap, HashSet};

use crate::column::JoinKey;
use crate::core::error::Result;
use crate::dataframe::join::{assemble, build_key_index, key_columns, match_rows, JoinType};
use crate::dataframe::DataFrame;

use super::error::MergeViolation;
use super::options::MergeOptions;

/// For every left row, the right rows sharing its key.
///
/// Built per call from borrowed tables and dropped afterwards.
pub(crate) struct MatchRelation<'a> {
    left: &'a DataFrame,
    right: &'a DataFrame,
    left_on: &'a str,
    right_on: &'a str,
    left_keys: Vec<JoinKey>,
    right_index: HashMap<JoinKey, Vec<usize>>,
}

impl<'a> MatchRelation<'a> {
    pub(crate) fn build(
        left: &'a DataFrame,
        right: &'a DataFrame,
        left_on: &'a str,
        right_on: &'a str,
    ) -> Result<Self> {
        let (left_col, right_col) = key_columns(left, right, left_on, right_on)?;
        let left_keys = left_col.keys()?;
        let right_index = build_key_index(right_col)?;

        log::debug!(
            "match relation {} -> {}: {} left rows, {} right rows, {} distinct right keys",
            left_on,
            right_on,
            left_keys.len(),
            right_col.len(),
            right_index.len()
        );

        Ok(Self {
            left,
            right,
            left_on,
            right_on,
            left_keys,
            right_index,
        })
    }

    /// Distinct left keys with no right match, in left-table order
    pub(crate) fn unmatched_keys(&self) -> Vec<&JoinKey> {
        self.distinct_left_keys(|key| !self.right_index.contains_key(key))
    }

    /// Distinct left keys matching more than one right row, in left-table order
    pub(crate) fn duplicate_match_keys(&self) -> Vec<&JoinKey> {
        self.distinct_left_keys(|key| {
            self.right_index
                .get(key)
                .map_or(false, |rows| rows.len() > 1)
        })
    }

    fn distinct_left_keys<F>(&self, predicate: F) -> Vec<&JoinKey>
    where
        F: Fn(&JoinKey) -> bool,
    {
        let mut seen = HashSet::new();
        self.left_keys
            .iter()
            .filter(|key| predicate(*key) && seen.insert(*key))
            .collect()
    }

    pub(crate) fn unmatched_violation(&self, options: &MergeOptions) -> Option<MergeViolation> {
        let keys = self.unmatched_keys();
        if keys.is_empty() {
            return None;
        }

        let sample = render_sample(&keys, options.max_reported_keys);
        log::warn!(
            "{} distinct values of '{}' have no match in '{}': {:?}",
            keys.len(),
            self.left_on,
            self.right_on,
            sample
        );

        Some(MergeViolation::UnmatchedLeftKeys {
            count: keys.len(),
            sample,
        })
    }

    pub(crate) fn duplicate_violation(&self, options: &MergeOptions) -> Option<MergeViolation> {
        let keys = self.duplicate_match_keys();
        if keys.is_empty() {
            return None;
        }

        let sample = render_sample(&keys, options.max_reported_keys);
        log::warn!(
            "{} distinct values of '{}' match duplicated values of '{}': {:?}",
            keys.len(),
            self.left_on,
            self.right_on,
            sample
        );

        Some(MergeViolation::DuplicateRightMatches {
            count: keys.len(),
            sample,
        })
    }

    /// Inner join of the two tables along this relation
    pub(crate) fn inner_join(&self, options: &MergeOptions) -> Result<DataFrame> {
        let pairs = match_rows(&self.left_keys, &self.right_index, JoinType::Inner);
        assemble(
            self.left,
            self.right,
            self.left_on,
            self.right_on,
            &pairs,
            options.suffixes(),
        )
    }
}

fn render_sample(keys: &[&JoinKey], limit: usize) -> Vec<String> {
    keys.iter().take(limit).map(|key| key.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;

    fn frame(columns: Vec<(&str, Column)>) -> DataFrame {
        DataFrame::from_columns(columns).unwrap()
    }

    #[test]
    fn test_keys_are_distinct_and_ordered() {
        let left = frame(vec![("A", Column::from(vec![5i64, 3, 5, 2, 3, 1]))]);
        let right = frame(vec![("A", Column::from(vec![1i64, 2, 2]))]);
        let relation = MatchRelation::build(&left, &right, "A", "A").unwrap();

        assert_eq!(
            relation.unmatched_keys(),
            vec![&JoinKey::Int64(5), &JoinKey::Int64(3)]
        );
        assert_eq!(relation.duplicate_match_keys(), vec![&JoinKey::Int64(2)]);
    }

    #[test]
    fn test_sample_is_truncated() {
        let left = frame(vec![("A", Column::from(vec![10i64, 11, 12, 13]))]);
        let right = frame(vec![("A", Column::from(vec![1i64]))]);
        let relation = MatchRelation::build(&left, &right, "A", "A").unwrap();
        let options = MergeOptions {
            max_reported_keys: 2,
            ..MergeOptions::default()
        };

        let violation = relation.unmatched_violation(&options).unwrap();
        assert_eq!(violation.count(), 4);
        assert_eq!(violation.sample(), &["10".to_string(), "11".to_string()]);
    }

    #[test]
    fn test_null_keys_match_each_other() {
        let left = frame(vec![(
            "A",
            Column::from(crate::column::Int64Column::with_nulls(
                vec![1, 0],
                vec![false, true],
            )),
        )]);
        let right = frame(vec![(
            "K",
            Column::from(crate::column::Int64Column::with_nulls(
                vec![0, 1],
                vec![true, false],
            )),
        )]);
        let relation = MatchRelation::build(&left, &right, "A", "K").unwrap();
        assert!(relation.unmatched_keys().is_empty());
        assert!(relation.duplicate_match_keys().is_empty());
    }
}
