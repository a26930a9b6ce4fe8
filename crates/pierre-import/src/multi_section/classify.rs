// ABOUTME: Classifies rows of the shared routines section into routine, day, or exercise
// ABOUTME: One place resolves the sub-table ambiguity by which optional columns are populated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::columns::multi_section::{DAY_INDEX, DIFFICULTY, EXERCISE_NAME, FOCUS};
use crate::record::Record;

/// Which sub-table a routines-section row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutineRecordKind {
    /// Routine definition (difficulty or focus populated)
    Routine,
    /// Scheduled day (day index populated)
    WorkoutDay,
    /// Exercise within a day (exercise name populated)
    Exercise,
    /// None of the distinguishing columns populated
    Unclassified,
}

/// Classify a routines-section record.
///
/// The export reuses one section marker for three sub-tables; only the
/// populated columns tell them apart. Precedence is routine, then workout
/// day, then exercise.
#[must_use]
pub fn classify_routine_record(record: &Record) -> RoutineRecordKind {
    if record.has(DIFFICULTY) || record.has(FOCUS) {
        RoutineRecordKind::Routine
    } else if record.has(DAY_INDEX) {
        RoutineRecordKind::WorkoutDay
    } else if record.has(EXERCISE_NAME) {
        RoutineRecordKind::Exercise
    } else {
        RoutineRecordKind::Unclassified
    }
}
