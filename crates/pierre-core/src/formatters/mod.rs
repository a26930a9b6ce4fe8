// ABOUTME: Renders reports and normalized data as JSON or TOON text
// ABOUTME: TOON (token-efficient notation) is available behind the `toon` feature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Report rendering
//!
//! Every report (summary, personal records, progress series, consistency,
//! weekly volume, full normalized data) is a plain serializable value. This
//! module turns one into text for whichever collaborator prints or forwards it.
//!
//! ```rust
//! use pierre_core::formatters::{render, OutputFormat};
//!
//! let rendered = render(&vec![100.0, 105.0], OutputFormat::Json, false)?;
//! assert_eq!(rendered.text, "[100.0,105.0]");
//! # Ok::<(), pierre_core::formatters::FormatError>(())
//! ```

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::errors::AppError;

/// Text encoding of a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON
    #[default]
    Json,
    /// Token-Oriented Object Notation
    Toon,
}

impl OutputFormat {
    /// Every supported format, in help-text order
    pub const ALL: [Self; 2] = [Self::Json, Self::Toon];

    /// Lowercase format name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toon => "toon",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FormatError::UnknownFormat(s.to_owned()))
    }
}

/// Rendering failures
#[derive(Debug, Error)]
pub enum FormatError {
    /// Name given for the output format is not recognized
    #[error("unknown output format {0:?} (expected json or toon)")]
    UnknownFormat(String),

    /// Value could not be serialized to JSON
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Value could not be encoded as TOON
    #[error("TOON encoding failed: {0}")]
    Toon(String),

    /// TOON was requested from a build without the `toon` feature
    #[error("TOON output requires the `toon` feature")]
    ToonUnavailable,
}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        match error {
            FormatError::UnknownFormat(_) => Self::invalid_input(error.to_string()),
            _ => Self::serialization(error.to_string()).with_source(error),
        }
    }
}

/// A report rendered to text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Rendered text, without a trailing newline
    pub text: String,
    /// Encoding used
    pub format: OutputFormat,
}

/// Render `report` in `format`.
///
/// `pretty` indents JSON; TOON output is indented either way.
///
/// # Errors
///
/// Returns an error if serialization fails or TOON is requested without the
/// `toon` feature
pub fn render<T: Serialize>(
    report: &T,
    format: OutputFormat,
    pretty: bool,
) -> Result<Rendered, FormatError> {
    let text = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(report)?,
        OutputFormat::Json => serde_json::to_string(report)?,
        OutputFormat::Toon => encode_toon(report)?,
    };
    Ok(Rendered { text, format })
}

#[cfg(feature = "toon")]
fn encode_toon<T: Serialize>(report: &T) -> Result<String, FormatError> {
    let value = serde_json::to_value(report)?;
    toon_format::encode(&value, &toon_format::EncodeOptions::default())
        .map_err(|e| FormatError::Toon(e.to_string()))
}

#[cfg(not(feature = "toon"))]
fn encode_toon<T: Serialize>(_report: &T) -> Result<String, FormatError> {
    Err(FormatError::ToonUnavailable)
}
