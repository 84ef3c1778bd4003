//! Single-column equi-join for DataFrame

use std::collections::{HashMap, HashSet};

use crate::column::{Column, JoinKey};
use crate::core::error::{Error, Result};
use crate::dataframe::base::DataFrame;

/// Suffixes applied to overlapping non-key column names, left then right
pub const DEFAULT_SUFFIXES: (&str, &str) = ("_x", "_y");

/// Enum for join types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    /// Inner join (only rows that match in both tables)
    Inner,
    /// Left join (all rows from the left table and matching rows from the right table)
    Left,
}

/// Pairing of a left row with an optional right row
pub(crate) type RowPair = (usize, Option<usize>);

/// Join functionality for DataFrames
pub trait JoinExt {
    /// Join two DataFrames with explicit join type and column suffixes
    fn join_with(
        &self,
        other: &Self,
        left_on: &str,
        right_on: &str,
        join_type: JoinType,
        suffixes: (&str, &str),
    ) -> Result<DataFrame>;

    /// Perform inner join
    fn inner_join(&self, other: &Self, left_on: &str, right_on: &str) -> Result<DataFrame> {
        self.join_with(other, left_on, right_on, JoinType::Inner, DEFAULT_SUFFIXES)
    }

    /// Perform left join; unmatched right cells are NULL
    fn left_join(&self, other: &Self, left_on: &str, right_on: &str) -> Result<DataFrame> {
        self.join_with(other, left_on, right_on, JoinType::Left, DEFAULT_SUFFIXES)
    }
}

impl JoinExt for DataFrame {
    fn join_with(
        &self,
        other: &Self,
        left_on: &str,
        right_on: &str,
        join_type: JoinType,
        suffixes: (&str, &str),
    ) -> Result<DataFrame> {
        let (left_col, right_col) = key_columns(self, other, left_on, right_on)?;
        let right_index = build_key_index(right_col)?;
        let pairs = match_rows(&left_col.keys()?, &right_index, join_type);

        assemble(self, other, left_on, right_on, &pairs, suffixes)
    }
}

/// Look up both key columns and verify they can be compared.
///
/// An empty key column carries no values to compare, so it is accepted
/// against a key column of any type.
pub(crate) fn key_columns<'a>(
    left: &'a DataFrame,
    right: &'a DataFrame,
    left_on: &str,
    right_on: &str,
) -> Result<(&'a Column, &'a Column)> {
    let left_col = left.column(left_on)?;
    let right_col = right.column(right_on)?;

    if !left_col.is_empty()
        && !right_col.is_empty()
        && left_col.column_type() != right_col.column_type()
    {
        return Err(Error::ColumnTypeMismatch {
            name: format!("{} and {}", left_on, right_on),
            expected: left_col.column_type(),
            found: right_col.column_type(),
        });
    }

    Ok((left_col, right_col))
}

/// Map each key value to the row positions holding it, in row order
pub(crate) fn build_key_index(column: &Column) -> Result<HashMap<JoinKey, Vec<usize>>> {
    let mut index: HashMap<JoinKey, Vec<usize>> = HashMap::with_capacity(column.len());
    for i in 0..column.len() {
        index.entry(column.key_at(i)?).or_default().push(i);
    }
    Ok(index)
}

/// Left-driven row pairing: left rows in order, each followed by its right matches
pub(crate) fn match_rows(
    left_keys: &[JoinKey],
    right_index: &HashMap<JoinKey, Vec<usize>>,
    join_type: JoinType,
) -> Vec<RowPair> {
    let mut pairs = Vec::with_capacity(left_keys.len());
    for (i, key) in left_keys.iter().enumerate() {
        match right_index.get(key) {
            Some(right_rows) => pairs.extend(right_rows.iter().map(|&j| (i, Some(j)))),
            None if join_type == JoinType::Left => pairs.push((i, None)),
            None => {}
        }
    }
    pairs
}

/// Build the joined table from row pairs.
///
/// Left columns come first, then right columns. A right key column sharing
/// its name with the left key is coalesced into it; any other name present on
/// both sides receives the corresponding suffix.
pub(crate) fn assemble(
    left: &DataFrame,
    right: &DataFrame,
    left_on: &str,
    right_on: &str,
    pairs: &[RowPair],
    suffixes: (&str, &str),
) -> Result<DataFrame> {
    let coalesce_key = left_on == right_on;

    let right_names: HashSet<&str> = right.column_names.iter().map(String::as_str).collect();
    let overlapping: HashSet<&str> = left
        .column_names
        .iter()
        .map(String::as_str)
        .filter(|name| right_names.contains(name))
        .filter(|name| !(coalesce_key && *name == left_on))
        .collect();

    let left_rows: Vec<Option<usize>> = pairs.iter().map(|(l, _)| Some(*l)).collect();
    let right_rows: Vec<Option<usize>> = pairs.iter().map(|(_, r)| *r).collect();

    let mut result = DataFrame::new();

    for (name, col) in left.iter_columns() {
        let out_name = if overlapping.contains(name) {
            format!("{}{}", name, suffixes.0)
        } else {
            name.to_string()
        };
        result.add_column(out_name, col.take(&left_rows)?)?;
    }

    for (name, col) in right.iter_columns() {
        if coalesce_key && name == right_on {
            continue;
        }
        let out_name = if overlapping.contains(name) {
            format!("{}{}", name, suffixes.1)
        } else {
            name.to_string()
        };
        result.add_column(out_name, col.take(&right_rows)?)?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(columns: Vec<(&str, Column)>) -> DataFrame {
        DataFrame::from_columns(columns).unwrap()
    }

    #[test]
    fn test_match_rows_left_keeps_unmatched() {
        let left_keys = vec![JoinKey::Int64(1), JoinKey::Int64(9)];
        let right = Column::from(vec![1i64, 1]);
        let index = build_key_index(&right).unwrap();

        assert_eq!(
            match_rows(&left_keys, &index, JoinType::Inner),
            vec![(0, Some(0)), (0, Some(1))]
        );
        assert_eq!(
            match_rows(&left_keys, &index, JoinType::Left),
            vec![(0, Some(0)), (0, Some(1)), (1, None)]
        );
    }

    #[test]
    fn test_key_type_mismatch() {
        let left = frame(vec![("A", Column::from(vec![1i64]))]);
        let right = frame(vec![("A", Column::from(vec!["1"]))]);
        let err = left.inner_join(&right, "A", "A").unwrap_err();
        assert!(matches!(err, Error::ColumnTypeMismatch { .. }));
    }

    #[test]
    fn test_empty_key_column_accepts_any_type() {
        let left = frame(vec![("A", Column::from(vec![1i64]))]);
        let right = frame(vec![("A", Column::from(Vec::<String>::new()))]);
        let joined = left.inner_join(&right, "A", "A").unwrap();
        assert_eq!(joined.row_count(), 0);
        assert_eq!(joined.column_names(), &["A".to_string()]);
    }

    #[test]
    fn test_overlapping_names_get_suffixes() {
        let left = frame(vec![
            ("A", Column::from(vec![1i64])),
            ("V", Column::from(vec![10i64])),
        ]);
        let right = frame(vec![
            ("A", Column::from(vec![1i64])),
            ("V", Column::from(vec![20i64])),
        ]);
        let joined = left
            .join_with(&right, "A", "A", JoinType::Inner, ("_l", "_r"))
            .unwrap();
        assert_eq!(
            joined.column_names(),
            &["A".to_string(), "V_l".to_string(), "V_r".to_string()]
        );
    }
}
