// ABOUTME: Aggregate root of one parse: every collection plus the source format and date range
// ABOUTME: SourceFormat tags, last-write-wins Settings, and the inclusive session DateRange
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::{Exercise, ExerciseLog, FieldValue, Note, Routine, WorkoutDay, WorkoutSession};
use crate::constants::formats::{MULTI_SECTION, SINGLE_TABLE};
use crate::constants::units::SECONDS_PER_DAY;

/// The closed set of export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceFormat {
    /// One semicolon-separated table, one row per set
    #[serde(rename = "single-table")]
    SingleTable,
    /// Comma-separated sub-tables introduced by `### NAME` markers
    #[serde(rename = "multi-section")]
    MultiSection,
}

impl SourceFormat {
    /// Format tag as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SingleTable => SINGLE_TABLE,
            Self::MultiSection => MULTI_SECTION,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User preference keys mapped to scalar values
///
/// One per parse. Later occurrences of a key overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(BTreeMap<String, FieldValue>);

impl Settings {
    /// Set a key, replacing any earlier value
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        self.0.insert(key.into(), value);
    }

    /// Look up a key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Number of keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no settings were read
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate keys and values in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }
}

/// Earliest and latest session start with the span between them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Earliest session start (epoch seconds)
    pub start: i64,
    /// Latest session start (epoch seconds)
    pub end: i64,
    /// `ceil((end - start) / 1 day)`
    pub days: i64,
}

impl DateRange {
    /// Compute the range over a set of start times, ignoring unknown (non-positive) ones
    #[must_use]
    pub fn from_start_times(times: impl IntoIterator<Item = i64>) -> Option<Self> {
        let (start, end) = times
            .into_iter()
            .filter(|t| *t > 0)
            .fold(None, |acc: Option<(i64, i64)>, t| match acc {
                None => Some((t, t)),
                Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
            })?;
        Some(Self {
            start,
            end,
            days: ceil_days(end.saturating_sub(start)),
        })
    }
}

/// Whole days covering `seconds`, rounding any partial day up
#[must_use]
pub fn ceil_days(seconds: i64) -> i64 {
    // Gaps are never negative once start times are sorted
    let seconds = seconds.max(0);
    seconds / SECONDS_PER_DAY + i64::from(seconds % SECONDS_PER_DAY != 0)
}

/// Everything one parse produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedData {
    /// Format the input was detected as
    pub format: SourceFormat,
    /// User preferences
    #[serde(default)]
    pub settings: Settings,
    /// Routine definitions, in file order
    #[serde(default)]
    pub routines: Vec<Routine>,
    /// Routine days, in file order
    #[serde(default)]
    pub workout_days: Vec<WorkoutDay>,
    /// Exercises, in file order
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    /// Completed sessions, in file order
    #[serde(default)]
    pub sessions: Vec<WorkoutSession>,
    /// Notes, in file order
    #[serde(default)]
    pub notes: Vec<Note>,
    /// Records of unrecognized sections that describe exercises
    #[serde(default)]
    pub exercise_logs: Vec<ExerciseLog>,
    /// Session date range, `None` without any dated session
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

impl NormalizedData {
    /// Empty data for a format
    #[must_use]
    pub fn new(format: SourceFormat) -> Self {
        Self {
            format,
            settings: Settings::default(),
            routines: Vec::new(),
            workout_days: Vec::new(),
            exercises: Vec::new(),
            sessions: Vec::new(),
            notes: Vec::new(),
            exercise_logs: Vec::new(),
            date_range: None,
        }
    }

    /// Compute derived aggregate fields; importers call this once collections are complete
    #[must_use]
    pub fn finalize(mut self) -> Self {
        self.date_range = DateRange::from_start_times(self.sessions.iter().map(|s| s.start_time));
        self
    }

    /// Whether the parse produced nothing at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
            && self.routines.is_empty()
            && self.workout_days.is_empty()
            && self.exercises.is_empty()
            && self.sessions.is_empty()
            && self.notes.is_empty()
            && self.exercise_logs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_rounds_partial_days_up() {
        let range = DateRange::from_start_times([1_000, 1_000 + 86_400 + 1]);
        assert_eq!(
            range,
            Some(DateRange {
                start: 1_000,
                end: 87_401,
                days: 2
            })
        );
    }

    #[test]
    fn test_day_span_never_overflows() {
        assert_eq!(ceil_days(i64::MAX), i64::MAX / 86_400 + 1);
        let range = DateRange::from_start_times([1, i64::MAX]);
        assert_eq!(range.map(|r| r.days), Some(ceil_days(i64::MAX - 1)));
    }

    #[test]
    fn test_date_range_ignores_unknown_start_times() {
        assert_eq!(DateRange::from_start_times([0, 0]), None);
        let range = DateRange::from_start_times([0, 5_000]);
        assert_eq!(range.map(|r| r.days), Some(0));
    }

    #[test]
    fn test_settings_last_write_wins() {
        let mut settings = Settings::default();
        settings.insert("unit", FieldValue::Text("kg".into()));
        settings.insert("unit", FieldValue::Text("lbs".into()));
        assert_eq!(settings.len(), 1);
        assert_eq!(settings.get("unit"), Some(&FieldValue::Text("lbs".into())));
    }

    #[test]
    fn test_format_tags() {
        assert_eq!(SourceFormat::SingleTable.to_string(), "single-table");
        let json = serde_json::to_string(&SourceFormat::MultiSection).unwrap_or_default();
        assert_eq!(json, "\"multi-section\"");
    }
}
