// ABOUTME: Importer configuration loaded from environment variables
// ABOUTME: Detection window, field separators, and strict header handling with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Importer configuration
//!
//! Configuration is environment-only. Every value has a default matching the
//! reference exports, so an empty environment always yields a working config.

use std::env;
use thiserror::Error;

use crate::constants::formats::{DEFAULT_DETECT_LINES, DEFAULT_MULTI_SECTION_SEPARATOR};
use crate::errors::{AppError, ErrorCode};

/// Number of leading lines the format detector inspects
pub const ENV_DETECT_LINES: &str = "PIERRE_IMPORT_DETECT_LINES";
/// Field separator of the multi-section format
pub const ENV_MULTI_SECTION_SEPARATOR: &str = "PIERRE_IMPORT_MULTI_SECTION_SEPARATOR";
/// Forced field separator of the single-table format (unset = sniff from header)
pub const ENV_SINGLE_TABLE_SEPARATOR: &str = "PIERRE_IMPORT_SINGLE_TABLE_SEPARATOR";
/// Skip leading section lines that do not look like a header
pub const ENV_STRICT_HEADERS: &str = "PIERRE_IMPORT_STRICT_HEADERS";

/// Configuration-related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Separator is not a single usable character
    #[error("Invalid separator in {variable}: {value:?} (expected one non-alphanumeric, non-quote character)")]
    InvalidSeparator {
        /// Environment variable name
        variable: &'static str,
        /// Rejected value
        value: String,
    },

    /// Failed to parse configuration value
    #[error("Parse error in {variable}: {value:?}")]
    Parse {
        /// Environment variable name
        variable: &'static str,
        /// Rejected value
        value: String,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}

/// Importer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    /// Leading non-blank lines inspected by format detection
    pub detect_lines: usize,
    /// Separator of the multi-section format
    pub multi_section_separator: char,
    /// Forced single-table separator; `None` sniffs it from the header
    pub single_table_separator: Option<char>,
    /// Skip leading section lines until one looks like a header
    pub strict_headers: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            detect_lines: DEFAULT_DETECT_LINES,
            multi_section_separator: DEFAULT_MULTI_SECTION_SEPARATOR,
            single_table_separator: None,
            strict_headers: false,
        }
    }
}

impl ImportConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable or invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(value) = env::var(ENV_DETECT_LINES) {
            config.detect_lines = value.trim().parse().map_err(|_| ConfigError::Parse {
                variable: ENV_DETECT_LINES,
                value: value.clone(),
            })?;
        }
        if let Ok(value) = env::var(ENV_MULTI_SECTION_SEPARATOR) {
            config.multi_section_separator = parse_separator(ENV_MULTI_SECTION_SEPARATOR, &value)?;
        }
        if let Ok(value) = env::var(ENV_SINGLE_TABLE_SEPARATOR) {
            if !value.is_empty() && !value.eq_ignore_ascii_case("auto") {
                config.single_table_separator =
                    Some(parse_separator(ENV_SINGLE_TABLE_SEPARATOR, &value)?);
            }
        }
        if let Ok(value) = env::var(ENV_STRICT_HEADERS) {
            config.strict_headers = parse_flag(ENV_STRICT_HEADERS, &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the detection window is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.detect_lines == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "detect_lines must be at least 1",
            ));
        }
        Ok(())
    }
}

fn parse_separator(variable: &'static str, value: &str) -> Result<char, ConfigError> {
    let value = match value {
        "\\t" | "tab" => "\t",
        other => other,
    };
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '"' && !c.is_alphanumeric() => Ok(c),
        _ => Err(ConfigError::InvalidSeparator {
            variable,
            value: value.to_owned(),
        }),
    }
}

fn parse_flag(variable: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Parse {
            variable,
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            ENV_DETECT_LINES,
            ENV_MULTI_SECTION_SEPARATOR,
            ENV_SINGLE_TABLE_SEPARATOR,
            ENV_STRICT_HEADERS,
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_empty_environment_yields_defaults() {
        clear_env();
        assert_eq!(ImportConfig::from_env(), Ok(ImportConfig::default()));
    }

    #[test]
    #[serial]
    fn test_environment_overrides() {
        clear_env();
        env::set_var(ENV_DETECT_LINES, "10");
        env::set_var(ENV_MULTI_SECTION_SEPARATOR, "tab");
        env::set_var(ENV_SINGLE_TABLE_SEPARATOR, ",");
        env::set_var(ENV_STRICT_HEADERS, "true");

        let config = ImportConfig::from_env();
        clear_env();

        assert_eq!(
            config,
            Ok(ImportConfig {
                detect_lines: 10,
                multi_section_separator: '\t',
                single_table_separator: Some(','),
                strict_headers: true,
            })
        );
    }

    #[test]
    #[serial]
    fn test_invalid_values_are_rejected() {
        clear_env();
        env::set_var(ENV_MULTI_SECTION_SEPARATOR, "ab");
        assert!(matches!(
            ImportConfig::from_env(),
            Err(ConfigError::InvalidSeparator { .. })
        ));

        clear_env();
        env::set_var(ENV_DETECT_LINES, "0");
        assert_eq!(
            ImportConfig::from_env(),
            Err(ConfigError::ValueOutOfRange("detect_lines must be at least 1"))
        );
        clear_env();
    }
}
