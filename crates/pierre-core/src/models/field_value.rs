// ABOUTME: Loosely-typed scalar value read from an export field
// ABOUTME: A field is a number, a timestamp (epoch seconds), or text after coercion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// A coerced export field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// Value that parsed fully as a number
    Number(f64),
    /// Date-like value in a time column, as epoch seconds
    Timestamp(i64),
    /// Anything else, verbatim
    Text(String),
}

impl FieldValue {
    /// Numeric view of the value.
    ///
    /// Timestamps convert to their epoch seconds; text never converts here,
    /// coercion already had its chance.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            #[allow(clippy::cast_precision_loss)]
            Self::Timestamp(ts) => Some(*ts as f64),
            Self::Text(_) => None,
        }
    }

    /// Text view of the value, `None` when empty
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Text(s) if s.is_empty() => None,
            other => Some(other.to_string()),
        }
    }

    /// Whether the value carries information (empty text does not)
    #[must_use]
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral numbers print without a trailing ".0"
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{n:.0}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Timestamp(ts) => write!(f, "{ts}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_integral_number_without_fraction() {
        assert_eq!(FieldValue::Number(3.0).to_string(), "3");
        assert_eq!(FieldValue::Number(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_empty_text_is_not_present() {
        assert!(!FieldValue::Text(String::new()).is_present());
        assert!(FieldValue::Number(0.0).is_present());
        assert_eq!(FieldValue::Text(String::new()).as_text(), None);
    }
}
