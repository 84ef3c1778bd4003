use safe_merge::merge::safe_inner_merge_with;
use safe_merge::{DataFrame, Error, Result, SafeMergeConfig};
use tempfile::tempdir;

#[test]
fn test_config_drives_merge_options() -> Result<()> {
    let config = SafeMergeConfig::from_yaml(
        r#"
merge:
  left_suffix: "_left"
  right_suffix: "_right"
"#,
    )?;
    config.validate()?;

    let left = DataFrame::from_columns(vec![("id", vec![1i64, 2]), ("x", vec![3i64, 4])])?;
    let right = DataFrame::from_columns(vec![("id", vec![2i64, 1]), ("x", vec![5i64, 6])])?;

    let merged = safe_inner_merge_with(&left, &right, "id", "id", &config.merge)?;
    assert_eq!(merged.column_names(), &["id", "x_left", "x_right"]);

    Ok(())
}

#[test]
fn test_max_reported_keys_limits_sample() -> Result<()> {
    let config = SafeMergeConfig::from_toml("[merge]\nmax_reported_keys = 1\n")?;

    let left = DataFrame::from_columns(vec![("id", vec![7i64, 8, 9])])?;
    let right = DataFrame::from_columns(vec![("id", vec![1i64])])?;

    let err = safe_inner_merge_with(&left, &right, "id", "id", &config.merge).unwrap_err();
    let violation = &err.as_imperfect_merge().expect("imperfect merge").violations()[0];
    assert_eq!(violation.count(), 3);
    assert_eq!(violation.sample(), &["7".to_string()]);

    Ok(())
}

#[test]
fn test_invalid_file_config_is_rejected() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("safe-merge.yaml");
    std::fs::write(&path, "merge:\n  left_suffix: \"_s\"\n  right_suffix: \"_s\"\n")?;

    let err = SafeMergeConfig::from_file(&path)?.validate().unwrap_err();
    assert!(matches!(err, Error::ConfigurationError(_)));

    Ok(())
}

#[test]
fn test_unsupported_extension() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("safe-merge.ini");
    std::fs::write(&path, "level=info")?;

    assert!(matches!(
        SafeMergeConfig::from_file(&path),
        Err(Error::ConfigurationError(_))
    ));

    Ok(())
}
