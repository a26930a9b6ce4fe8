// ABOUTME: Materializes typed model entities from header-keyed multi-section records
// ABOUTME: Routines, workout days, exercises, sessions, notes, and generic exercise logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::coerce::truncate_count;
use crate::constants::columns::multi_section as col;
use crate::models::{Exercise, ExerciseLog, Note, Routine, WorkoutDay, WorkoutSession};
use crate::record::Record;
use crate::set_log::decode_set_log;

pub(super) fn routine(record: &Record) -> Routine {
    Routine {
        id: record.text(col::ID),
        name: record.text(col::NAME).unwrap_or_default(),
        difficulty: record.text(col::DIFFICULTY),
        focus: record.text(col::FOCUS),
        description: record.text(col::DESCRIPTION),
    }
}

pub(super) fn workout_day(record: &Record) -> WorkoutDay {
    WorkoutDay {
        id: record.text(col::ID),
        routine_id: record.text(col::ROUTINE_ID),
        name: record.text(col::NAME),
        day_index: record.number(col::DAY_INDEX).map_or(0, truncate_count),
        rest_day: record.number(col::REST_DAY).is_some_and(|flag| flag > 0.0)
            || record
                .text(col::REST_DAY)
                .is_some_and(|flag| flag.eq_ignore_ascii_case("true")),
        completed_at: record.timestamp(col::COMPLETED),
    }
}

pub(super) fn exercise(record: &Record) -> Exercise {
    let mut exercise = Exercise::new(record.text(col::EXERCISE_NAME).unwrap_or_default());
    exercise.body_part = record.text(col::BODY_PART);
    exercise.target_reps = record.number(col::TARGET_REPS).map(truncate_count);
    exercise.timestamp = record.timestamp(col::DATE);
    exercise.workout_id = record
        .text(col::SESSION_ID)
        .or_else(|| record.text(col::ROUTINE_ID));
    exercise.sets = record
        .text(col::LOGS)
        .map(|log| decode_set_log(&log))
        .unwrap_or_default();
    exercise
}

pub(super) fn session(record: &Record) -> WorkoutSession {
    let start_time = record
        .timestamp(col::START_TIME)
        .or_else(|| record.timestamp(col::DATE))
        .unwrap_or(0);
    let end_time = record.timestamp(col::END_TIME);

    let mut session = WorkoutSession::new(start_time);
    session.id = record.text(col::ID);
    session.name = record.text(col::NAME);
    session.end_time = end_time;
    session.total_duration = record.duration(col::TOTAL_TIME).unwrap_or_else(|| {
        // No declared duration: fall back to the start/end span
        #[allow(clippy::cast_precision_loss)]
        end_time
            .filter(|end| start_time > 0 && *end > start_time)
            .map_or(0.0, |end| end.saturating_sub(start_time) as f64)
    });
    session.active_duration = record.duration(col::ACTIVE_TIME);
    session.rest_duration = record.duration(col::REST_TIME);
    session.exercise_count = record.number(col::EXERCISE_COUNT).map_or(0, truncate_count);
    session.total_weight = record
        .number(col::TOTAL_WEIGHT)
        .map_or(0.0, |weight| weight.max(0.0));
    session.notes = record.text(col::NOTE_TEXT);
    session
}

pub(super) fn note(record: &Record) -> Note {
    Note {
        exercise_id: record.text(col::NOTE_EXERCISE_ID),
        date: record.timestamp(col::DATE),
        text: record.text(col::NOTE_TEXT).unwrap_or_default(),
    }
}

/// A record of an unrecognized section, kept only when it names an exercise or logs sets
pub(super) fn exercise_log(section: &str, record: Record) -> Option<ExerciseLog> {
    if !record.has(col::EXERCISE_NAME) && !record.has(col::LOGS) {
        return None;
    }
    Some(ExerciseLog {
        section: section.to_owned(),
        exercise_name: record.text(col::EXERCISE_NAME),
        timestamp: record
            .timestamp(col::DATE)
            .or_else(|| record.timestamp(col::START_TIME)),
        sets: record
            .text(col::LOGS)
            .map(|log| decode_set_log(&log))
            .unwrap_or_default(),
        fields: record.into_map(),
    })
}
