// ABOUTME: Header-keyed record built by zipping a tokenized row against its section header
// ABOUTME: Typed alias lookups (text, number, duration, timestamp) over coerced field values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use crate::coerce::{coerce_field, epoch_seconds, parse_duration, parse_timestamp};
use crate::models::FieldValue;

#[derive(Debug, Clone, PartialEq)]
struct Field {
    name: String,
    key: String,
    value: FieldValue,
}

/// One data row keyed by header name
///
/// Lookups take alias lists and match case-insensitively; the first alias
/// with a present (non-empty) value wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    /// Zip `row` positionally against `header`, coercing every value.
    ///
    /// Columns with an empty header name are dropped, as are row values
    /// beyond the header's width.
    #[must_use]
    pub fn from_row(header: &[String], row: &[String]) -> Self {
        let fields = header
            .iter()
            .zip(row)
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, raw)| Field {
                name: name.clone(),
                key: name.to_lowercase(),
                value: coerce_field(name, raw),
            })
            .collect();
        Self { fields }
    }

    /// First present value among `aliases`
    #[must_use]
    pub fn get(&self, aliases: &[&str]) -> Option<&FieldValue> {
        aliases.iter().find_map(|alias| {
            self.fields
                .iter()
                .find(|f| f.key == *alias && f.value.is_present())
                .map(|f| &f.value)
        })
    }

    /// Whether any alias carries a value
    #[must_use]
    pub fn has(&self, aliases: &[&str]) -> bool {
        self.get(aliases).is_some()
    }

    /// Value rendered as text
    #[must_use]
    pub fn text(&self, aliases: &[&str]) -> Option<String> {
        self.get(aliases).and_then(FieldValue::as_text)
    }

    /// Numeric value; text never parses here
    #[must_use]
    pub fn number(&self, aliases: &[&str]) -> Option<f64> {
        match self.get(aliases)? {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Timestamp(_) | FieldValue::Text(_) => None,
        }
    }

    /// Duration in seconds from a number or duration text
    #[must_use]
    pub fn duration(&self, aliases: &[&str]) -> Option<f64> {
        match self.get(aliases)? {
            FieldValue::Number(n) => Some(n.max(0.0)),
            FieldValue::Text(s) => parse_duration(s),
            FieldValue::Timestamp(_) => None,
        }
    }

    /// Epoch seconds from a timestamp, an epoch number, or date text
    #[must_use]
    pub fn timestamp(&self, aliases: &[&str]) -> Option<i64> {
        match self.get(aliases)? {
            FieldValue::Timestamp(ts) => Some(*ts),
            FieldValue::Number(n) if *n > 0.0 => epoch_seconds(*n),
            FieldValue::Number(_) => None,
            FieldValue::Text(s) => parse_timestamp(s),
        }
    }

    /// Whether any field at all carries a value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.fields.iter().any(|f| f.value.is_present())
    }

    /// Present fields in header order, under their original header names
    pub fn present_fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields
            .iter()
            .filter(|f| f.value.is_present())
            .map(|f| (f.name.as_str(), &f.value))
    }

    /// Every field under its original header name
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, FieldValue> {
        self.fields.into_iter().map(|f| (f.name, f.value)).collect()
    }
}
