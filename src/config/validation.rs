//! Configuration validation utilities

use super::*;
use crate::core::error::{Error, Result};

/// Validate the entire configuration
pub fn validate_config(config: &SafeMergeConfig) -> Result<()> {
    validate_merge_options(&config.merge)?;
    validate_logging_config(&config.logging)?;

    Ok(())
}

/// Validate merge options
pub fn validate_merge_options(options: &MergeOptions) -> Result<()> {
    if options.left_suffix.is_empty() || options.right_suffix.is_empty() {
        return Err(Error::ConfigurationError(
            "Column suffixes must not be empty".to_string(),
        ));
    }

    // Identical suffixes would produce duplicate column names on overlap
    if options.left_suffix == options.right_suffix {
        return Err(Error::ConfigurationError(format!(
            "Left and right suffixes must differ, both are '{}'",
            options.left_suffix
        )));
    }

    Ok(())
}

/// Validate logging configuration
pub fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];

    if !valid_levels.contains(&config.level.to_lowercase().as_str()) {
        return Err(Error::ConfigurationError(format!(
            "Invalid log level '{}'. Valid levels: {}",
            config.level,
            valid_levels.join(", ")
        )));
    }

    Ok(())
}
