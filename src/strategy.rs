// ABOUTME: Capability-indexed format strategies selected once by the format detector
// ABOUTME: Each strategy parses its export and decides which exercises count as performed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Format strategies
//!
//! Every operation that differs between the two exports lives behind
//! [`FormatStrategy`]; callers pick the implementation once with
//! [`strategy_for`] and never branch on the format again.

use std::borrow::Cow;

use pierre_core::models::{Exercise, ExerciseLog, NormalizedData, SourceFormat};
use pierre_import::{parse_multi_section, parse_single_table, ImportConfig};
use pierre_intelligence::{
    ConsistencyStats, PersonalRecords, ProgressPoint, WeeklyVolume, WorkoutAnalyzer,
    WorkoutSummary,
};

/// Parsing and analysis capabilities of one export format
pub trait FormatStrategy: Send + Sync {
    /// Format this strategy handles
    fn format(&self) -> SourceFormat;

    /// Parse raw export text; never fails on content
    fn parse(&self, text: &str, config: &ImportConfig) -> NormalizedData;

    /// Exercise occurrences the analyzer treats as performed
    fn performed_exercises<'a>(&self, data: &'a NormalizedData) -> Cow<'a, [Exercise]>;

    /// Headline figures
    fn summarize(&self, data: &NormalizedData) -> WorkoutSummary {
        let exercises = self.performed_exercises(data);
        WorkoutAnalyzer::new(&exercises, &data.sessions).summary()
    }

    /// Progress of one exercise, oldest first
    fn progress(&self, data: &NormalizedData, exercise: &str) -> Vec<ProgressPoint> {
        let exercises = self.performed_exercises(data);
        WorkoutAnalyzer::new(&exercises, &data.sessions).exercise_progress(exercise)
    }

    /// Heaviest set per exercise
    fn records(&self, data: &NormalizedData) -> PersonalRecords {
        let exercises = self.performed_exercises(data);
        WorkoutAnalyzer::new(&exercises, &data.sessions).personal_records()
    }

    /// Gaps between sessions, `None` below two dated sessions
    fn consistency(&self, data: &NormalizedData) -> Option<ConsistencyStats> {
        WorkoutAnalyzer::new(&[], &data.sessions).consistency()
    }

    /// Volume per ISO week
    fn weekly_volume(&self, data: &NormalizedData) -> Vec<WeeklyVolume> {
        let exercises = self.performed_exercises(data);
        WorkoutAnalyzer::new(&exercises, &data.sessions).weekly_volume()
    }

    /// Distinct performed exercise names, sorted
    fn exercise_names(&self, data: &NormalizedData) -> Vec<String> {
        let exercises = self.performed_exercises(data);
        WorkoutAnalyzer::new(&exercises, &[]).exercise_names()
    }
}

/// Semicolon-separated one-row-per-set export
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleTableFormat;

impl FormatStrategy for SingleTableFormat {
    fn format(&self) -> SourceFormat {
        SourceFormat::SingleTable
    }

    fn parse(&self, text: &str, config: &ImportConfig) -> NormalizedData {
        parse_single_table(text, config)
    }

    fn performed_exercises<'a>(&self, data: &'a NormalizedData) -> Cow<'a, [Exercise]> {
        Cow::Borrowed(&data.exercises)
    }
}

/// `### NAME` sectioned export
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiSectionFormat;

impl MultiSectionFormat {
    /// A log of an unrecognized section counts as an exercise once it names one and logged sets
    fn log_exercise(log: &ExerciseLog) -> Option<Exercise> {
        let name = log.exercise_name.as_deref().filter(|name| !name.is_empty())?;
        if log.sets.is_empty() {
            return None;
        }
        let mut exercise = Exercise::new(name);
        exercise.timestamp = log.timestamp;
        exercise.sets.clone_from(&log.sets);
        Some(exercise)
    }
}

impl FormatStrategy for MultiSectionFormat {
    fn format(&self) -> SourceFormat {
        SourceFormat::MultiSection
    }

    fn parse(&self, text: &str, config: &ImportConfig) -> NormalizedData {
        parse_multi_section(text, config)
    }

    fn performed_exercises<'a>(&self, data: &'a NormalizedData) -> Cow<'a, [Exercise]> {
        if data.exercise_logs.iter().all(|log| Self::log_exercise(log).is_none()) {
            return Cow::Borrowed(&data.exercises);
        }
        let mut exercises = data.exercises.clone();
        exercises.extend(data.exercise_logs.iter().filter_map(Self::log_exercise));
        Cow::Owned(exercises)
    }
}

/// The strategy for `format`
#[must_use]
pub fn strategy_for(format: SourceFormat) -> &'static dyn FormatStrategy {
    match format {
        SourceFormat::SingleTable => &SingleTableFormat,
        SourceFormat::MultiSection => &MultiSectionFormat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pierre_core::models::WorkoutSet;
    use std::collections::BTreeMap;

    #[test]
    fn test_strategy_matches_format() {
        for format in [SourceFormat::SingleTable, SourceFormat::MultiSection] {
            assert_eq!(strategy_for(format).format(), format);
        }
    }

    #[test]
    fn test_multi_section_includes_named_logs_with_sets() {
        let mut data = NormalizedData::new(SourceFormat::MultiSection);
        data.exercises.push(Exercise::new("Squat"));
        data.exercise_logs.push(ExerciseLog {
            section: "EXERCISE LOGS".into(),
            exercise_name: Some("Deadlift".into()),
            timestamp: Some(1_700_000_000),
            sets: vec![WorkoutSet::new(1, 140.0, 3)],
            fields: BTreeMap::new(),
        });
        data.exercise_logs.push(ExerciseLog {
            section: "EXERCISE LOGS".into(),
            exercise_name: None,
            timestamp: None,
            sets: vec![WorkoutSet::new(1, 60.0, 10)],
            fields: BTreeMap::new(),
        });

        let performed = MultiSectionFormat.performed_exercises(&data);
        let names: Vec<&str> = performed.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Squat", "Deadlift"]);
        assert_eq!(performed[1].timestamp, Some(1_700_000_000));
    }
}
