//! Configuration loading utilities
//!
//! This module handles loading configuration from various sources with proper
//! precedence and validation.

use super::*;
use crate::core::error::{Error, Result};
use std::env;
use std::fs;
use std::path::Path;

/// Load configuration from environment variables on top of the defaults
pub fn load_from_env() -> Result<SafeMergeConfig> {
    let mut config = SafeMergeConfig::default();
    apply_env(&mut config)?;
    Ok(config)
}

/// Override fields of `config` from environment variables that are set
pub fn apply_env(config: &mut SafeMergeConfig) -> Result<()> {
    if let Ok(suffix) = env::var("SAFE_MERGE_LEFT_SUFFIX") {
        config.merge.left_suffix = suffix;
    }

    if let Ok(suffix) = env::var("SAFE_MERGE_RIGHT_SUFFIX") {
        config.merge.right_suffix = suffix;
    }

    if let Ok(max_keys) = env::var("SAFE_MERGE_MAX_REPORTED_KEYS") {
        config.merge.max_reported_keys = max_keys.parse().map_err(|e| {
            Error::ConfigurationError(format!("Invalid SAFE_MERGE_MAX_REPORTED_KEYS: {}", e))
        })?;
    }

    if let Ok(log_level) = env::var("SAFE_MERGE_LOG_LEVEL").or_else(|_| env::var("RUST_LOG")) {
        config.logging.level = log_level;
    }

    Ok(())
}

/// Load configuration from a file (YAML or TOML based on extension)
pub fn load_from_file(path: &Path) -> Result<SafeMergeConfig> {
    if !path.exists() {
        return Err(Error::ConfigurationError(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path)?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => load_from_yaml(&contents),
        Some("toml") => load_from_toml(&contents),
        Some(ext) => Err(Error::ConfigurationError(format!(
            "Unsupported config file format: {}",
            ext
        ))),
        None => {
            // Try to parse as YAML first, then TOML
            load_from_yaml(&contents).or_else(|_| load_from_toml(&contents))
        }
    }
}

/// Load configuration from YAML string
pub fn load_from_yaml(yaml: &str) -> Result<SafeMergeConfig> {
    serde_yaml::from_str(yaml)
        .map_err(|e| Error::ConfigurationError(format!("Failed to parse YAML config: {}", e)))
}

/// Load configuration from TOML string
pub fn load_from_toml(toml: &str) -> Result<SafeMergeConfig> {
    toml::from_str(toml)
        .map_err(|e| Error::ConfigurationError(format!("Failed to parse TOML config: {}", e)))
}

/// Load configuration with precedence: defaults -> file -> environment
pub fn load_with_precedence<P: AsRef<Path>>(config_file: Option<P>) -> Result<SafeMergeConfig> {
    let mut config = match config_file {
        Some(file_path) => load_from_file(file_path.as_ref())?,
        None => SafeMergeConfig::default(),
    };

    // Environment has the highest precedence
    apply_env(&mut config)?;

    config.validate()?;

    Ok(config)
}

/// Save configuration to a file
pub fn save_to_file(config: &SafeMergeConfig, path: &Path) -> Result<()> {
    let contents = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => config.to_yaml()?,
        Some("toml") => config.to_toml()?,
        _ => {
            return Err(Error::ConfigurationError(format!(
                "Unsupported config file format: {}",
                path.display()
            )))
        }
    };

    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::tempdir;

    // Serializes tests that modify environment variables
    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_VARS: [&str; 5] = [
        "SAFE_MERGE_LEFT_SUFFIX",
        "SAFE_MERGE_RIGHT_SUFFIX",
        "SAFE_MERGE_MAX_REPORTED_KEYS",
        "SAFE_MERGE_LOG_LEVEL",
        "RUST_LOG",
    ];

    fn with_clean_env<F: FnOnce()>(f: F) {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();
        let saved: Vec<(&str, Option<String>)> =
            ENV_VARS.iter().map(|&k| (k, env::var(k).ok())).collect();
        for key in ENV_VARS {
            env::remove_var(key);
        }

        f();

        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }

    #[test]
    fn test_load_from_env() {
        with_clean_env(|| {
            env::set_var("SAFE_MERGE_LEFT_SUFFIX", "_left");
            env::set_var("SAFE_MERGE_MAX_REPORTED_KEYS", "3");
            env::set_var("RUST_LOG", "debug");

            let config = load_from_env().unwrap();
            assert_eq!(config.merge.left_suffix, "_left");
            assert_eq!(config.merge.right_suffix, "_y");
            assert_eq!(config.merge.max_reported_keys, 3);
            assert_eq!(config.logging.level, "debug");
        });
    }

    #[test]
    fn test_invalid_env_number() {
        with_clean_env(|| {
            env::set_var("SAFE_MERGE_MAX_REPORTED_KEYS", "many");
            let err = load_from_env().unwrap_err();
            assert!(matches!(err, Error::ConfigurationError(_)));
        });
    }

    #[test]
    fn test_load_from_yaml_partial() {
        let yaml = r#"
merge:
  right_suffix: "_other"
"#;
        let config = load_from_yaml(yaml).unwrap();
        assert_eq!(config.merge.left_suffix, "_x");
        assert_eq!(config.merge.right_suffix, "_other");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_toml() {
        let toml = r#"
[merge]
left_suffix = "_a"
right_suffix = "_b"
max_reported_keys = 1

[logging]
level = "warn"
"#;
        let config = load_from_toml(toml).unwrap();
        assert_eq!(config.merge.suffixes(), ("_a", "_b"));
        assert_eq!(config.merge.max_reported_keys, 1);
        assert_eq!(config.logging.level_filter(), Some(log::LevelFilter::Warn));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let mut config = SafeMergeConfig::default();
        config.merge.max_reported_keys = 25;

        for name in ["config.yaml", "config.toml"] {
            let path = dir.path().join(name);
            save_to_file(&config, &path).unwrap();
            assert_eq!(load_from_file(&path).unwrap(), config);
        }
    }

    #[test]
    fn test_precedence_env_over_file() {
        with_clean_env(|| {
            let dir = tempdir().unwrap();
            let path = dir.path().join("config.toml");
            fs::write(&path, "[merge]\nleft_suffix = \"_file\"\nright_suffix = \"_r\"\n").unwrap();
            env::set_var("SAFE_MERGE_LEFT_SUFFIX", "_env");

            let config = load_with_precedence(Some(&path)).unwrap();
            assert_eq!(config.merge.suffixes(), ("_env", "_r"));
        });
    }

    #[test]
    fn test_missing_file() {
        let err = load_from_file(Path::new("/nonexistent/safe-merge.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigurationError(_)));
    }
}
