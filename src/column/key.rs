//! Hashable projection of a single cell, used to match rows across tables

use std::fmt;

/// A cell value usable as a hash-map key.
///
/// Floats are stored by bit pattern after normalising `-0.0` to `0.0`, and
/// `NaN` collapses into [`JoinKey::Null`] so that missing values on both sides
/// of a merge meet each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JoinKey {
    Null,
    Int64(i64),
    Float64(u64),
    String(String),
    Boolean(bool),
}

impl JoinKey {
    /// Builds a key from a float value
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            JoinKey::Null
        } else if value == 0.0 {
            JoinKey::Float64(0.0f64.to_bits())
        } else {
            JoinKey::Float64(value.to_bits())
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JoinKey::Null)
    }
}

impl fmt::Display for JoinKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinKey::Null => f.write_str("NULL"),
            JoinKey::Int64(v) => write!(f, "{}", v),
            JoinKey::Float64(bits) => write!(f, "{}", f64::from_bits(*bits)),
            JoinKey::String(s) => write!(f, "{}", s),
            JoinKey::Boolean(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_zero_is_one_key() {
        assert_eq!(JoinKey::from_f64(-0.0), JoinKey::from_f64(0.0));
    }

    #[test]
    fn test_nan_is_null() {
        assert!(JoinKey::from_f64(f64::NAN).is_null());
        assert_eq!(JoinKey::from_f64(1.5).to_string(), "1.5");
    }
}
