// ABOUTME: Entry points consumed by the CLI and other collaborators
// ABOUTME: Format detection, parsing from text or file, and every analysis report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use pierre_core::errors::{AppError, AppResult, ErrorCode};
use pierre_core::models::{NormalizedData, SourceFormat};
use pierre_import::{detect_format_with, ImportConfig};
use pierre_intelligence::{
    ConsistencyStats, PersonalRecords, ProgressPoint, WeeklyVolume, WorkoutSummary,
};
use tracing::{info, instrument};

use crate::strategy::strategy_for;

/// Classify raw export text as single-table or multi-section
#[must_use]
pub fn detect_format(text: &str) -> SourceFormat {
    detect_format_with_config(text, &ImportConfig::default())
}

/// Classify raw export text using the configured detection window
#[must_use]
pub fn detect_format_with_config(text: &str, config: &ImportConfig) -> SourceFormat {
    detect_format_with(text, config.detect_lines)
}

/// Detect and parse raw export text with the default configuration
///
/// # Examples
///
/// ```rust
/// let text = "Workout #;Exercise Name;Set Order;Weight (kg);Reps\n1;Squat;1;100;5\n";
/// let data = pierre_workouts::parse(text);
/// assert_eq!(data.format.as_str(), "single-table");
/// assert_eq!(data.exercises[0].sets.len(), 1);
/// ```
#[must_use]
pub fn parse(text: &str) -> NormalizedData {
    parse_with_config(text, &ImportConfig::default())
}

/// Detect and parse raw export text.
///
/// Malformed content never fails; it yields partially filled data.
#[must_use]
pub fn parse_with_config(text: &str, config: &ImportConfig) -> NormalizedData {
    strategy_for(detect_format_with_config(text, config)).parse(text, config)
}

/// Read an export file whole and parse it, honoring environment configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not UTF-8 text, or the
/// importer environment variables are invalid
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn parse_file(path: impl AsRef<Path>) -> AppResult<NormalizedData> {
    let path = path.as_ref();
    let config = ImportConfig::from_env()?;

    let bytes = fs::read(path).map_err(|e| {
        let error = if e.kind() == ErrorKind::NotFound {
            AppError::not_found(format!("Export file {}", path.display()))
        } else {
            AppError::storage(format!("Failed to read {}", path.display()))
        };
        error.with_source(e)
    })?;
    let text = String::from_utf8(bytes).map_err(|e| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("{} is not UTF-8 text", path.display()),
        )
        .with_source(e)
    })?;

    let data = parse_with_config(&text, &config);
    info!(format = %data.format, sessions = data.sessions.len(), "parsed export file");
    Ok(data)
}

/// Headline figures for the whole export
#[must_use]
pub fn get_summary(data: &NormalizedData) -> WorkoutSummary {
    strategy_for(data.format).summarize(data)
}

/// Heaviest weighted set per exercise name
#[must_use]
pub fn get_personal_records(data: &NormalizedData) -> PersonalRecords {
    strategy_for(data.format).records(data)
}

/// Every occurrence of one exercise, oldest first
#[must_use]
pub fn get_exercise_progress(data: &NormalizedData, exercise: &str) -> Vec<ProgressPoint> {
    strategy_for(data.format).progress(data, exercise)
}

/// Day gaps between sessions, `None` with fewer than two dated sessions
#[must_use]
pub fn get_workout_consistency(data: &NormalizedData) -> Option<ConsistencyStats> {
    strategy_for(data.format).consistency(data)
}

/// Training volume per ISO week, oldest first
#[must_use]
pub fn get_weekly_volume(data: &NormalizedData) -> Vec<WeeklyVolume> {
    strategy_for(data.format).weekly_volume(data)
}

/// Distinct exercise names, sorted
#[must_use]
pub fn exercise_names(data: &NormalizedData) -> Vec<String> {
    strategy_for(data.format).exercise_names(data)
}
