//! Pre-merge checks and the guarded inner merge

use crate::core::error::Result;
use crate::dataframe::DataFrame;

use super::error::{ImperfectMergeError, MergeViolation};
use super::options::MergeOptions;
use super::relation::MatchRelation;

/// Check that every value in `left[left_on]` has at least one match in `right[right_on]`.
///
/// # Arguments
/// * `left` - Left DataFrame
/// * `right` - Right DataFrame
/// * `left_on` - Merge column of the left DataFrame
/// * `right_on` - Merge column of the right DataFrame
///
/// # Returns
/// * `Result<()>` - `Error::ImperfectMerge` if some left value is unmatched.
///   A missing key column yields `Error::ColumnNotFound`.
pub fn check_left_all_matched(
    left: &DataFrame,
    right: &DataFrame,
    left_on: &str,
    right_on: &str,
) -> Result<()> {
    check_left_all_matched_with(left, right, left_on, right_on, &MergeOptions::default())
}

/// [`check_left_all_matched`] with explicit options
pub fn check_left_all_matched_with(
    left: &DataFrame,
    right: &DataFrame,
    left_on: &str,
    right_on: &str,
    options: &MergeOptions,
) -> Result<()> {
    let relation = MatchRelation::build(left, right, left_on, right_on)?;
    reject(relation.unmatched_violation(options))
}

/// Check that no value in `left[left_on]` matches a value duplicated within `right[right_on]`.
///
/// Duplicated right values that no left row references are not reported.
///
/// # Returns
/// * `Result<()>` - `Error::ImperfectMerge` if some left value hits a duplicated right value
pub fn check_left_duplicate_matches(
    left: &DataFrame,
    right: &DataFrame,
    left_on: &str,
    right_on: &str,
) -> Result<()> {
    check_left_duplicate_matches_with(left, right, left_on, right_on, &MergeOptions::default())
}

/// [`check_left_duplicate_matches`] with explicit options
pub fn check_left_duplicate_matches_with(
    left: &DataFrame,
    right: &DataFrame,
    left_on: &str,
    right_on: &str,
    options: &MergeOptions,
) -> Result<()> {
    let relation = MatchRelation::build(left, right, left_on, right_on)?;
    reject(relation.duplicate_violation(options))
}

/// Check that every left value has exactly one match on the right.
///
/// Both conditions are always evaluated. When both fail, the error carries
/// both violations, unmatched first.
pub fn check_perfect_match(
    left: &DataFrame,
    right: &DataFrame,
    left_on: &str,
    right_on: &str,
) -> Result<()> {
    check_perfect_match_with(left, right, left_on, right_on, &MergeOptions::default())
}

/// [`check_perfect_match`] with explicit options
pub fn check_perfect_match_with(
    left: &DataFrame,
    right: &DataFrame,
    left_on: &str,
    right_on: &str,
    options: &MergeOptions,
) -> Result<()> {
    let relation = MatchRelation::build(left, right, left_on, right_on)?;
    reject(perfect_match_violations(&relation, options))
}

/// Inner-merge `left` and `right` on `left_on == right_on` after [`check_perfect_match`] passes.
///
/// # Returns
/// * `Result<DataFrame>` - The merged DataFrame, with exactly one row per left row.
///   On failure the error from the check is returned unchanged and nothing is merged.
pub fn safe_inner_merge(
    left: &DataFrame,
    right: &DataFrame,
    left_on: &str,
    right_on: &str,
) -> Result<DataFrame> {
    safe_inner_merge_with(left, right, left_on, right_on, &MergeOptions::default())
}

/// [`safe_inner_merge`] with explicit options
pub fn safe_inner_merge_with(
    left: &DataFrame,
    right: &DataFrame,
    left_on: &str,
    right_on: &str,
    options: &MergeOptions,
) -> Result<DataFrame> {
    let relation = MatchRelation::build(left, right, left_on, right_on)?;
    reject(perfect_match_violations(&relation, options))?;

    let merged = relation.inner_join(options)?;
    log::debug!(
        "safe inner merge on {} = {}: {} rows x {} columns",
        left_on,
        right_on,
        merged.row_count(),
        merged.column_count()
    );

    Ok(merged)
}

fn perfect_match_violations(
    relation: &MatchRelation<'_>,
    options: &MergeOptions,
) -> Vec<MergeViolation> {
    let unmatched = relation.unmatched_violation(options);
    let duplicates = relation.duplicate_violation(options);
    unmatched.into_iter().chain(duplicates).collect()
}

fn reject<I>(violations: I) -> Result<()>
where
    I: IntoIterator<Item = MergeViolation>,
{
    match ImperfectMergeError::from_violations(violations.into_iter().collect()) {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;
    use crate::merge::error::{DUPLICATE_MESSAGE, UNMATCHED_MESSAGE};

    fn frame(a: Vec<i64>, other: &str, values: Vec<i64>) -> DataFrame {
        DataFrame::from_columns(vec![("A", a), (other, values)]).unwrap()
    }

    #[test]
    fn test_unreferenced_duplicate_passes() {
        let left = frame(vec![1, 2], "C", vec![5, 6]);
        let right = frame(vec![1, 2, 3, 3], "B", vec![7, 8, 9, 10]);

        check_left_duplicate_matches(&left, &right, "A", "A").unwrap();
        check_perfect_match(&left, &right, "A", "A").unwrap();
    }

    #[test]
    fn test_both_violations_reported_in_order() {
        let left = frame(vec![1, 2, 3], "C", vec![5, 6, 7]);
        let right = frame(vec![1, 2, 2], "B", vec![7, 8, 9]);

        let err = check_perfect_match(&left, &right, "A", "A").unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("{}; {}", UNMATCHED_MESSAGE, DUPLICATE_MESSAGE)
        );
    }

    #[test]
    fn test_missing_column_is_not_imperfect_merge() {
        let left = frame(vec![1], "C", vec![5]);
        let right = frame(vec![1], "B", vec![7]);

        let err = check_perfect_match(&left, &right, "A", "Z").unwrap_err();
        assert!(matches!(err, Error::ColumnNotFound(name) if name == "Z"));
        assert!(safe_inner_merge(&left, &right, "missing", "A").is_err());
    }
}
