// ABOUTME: Column aliases recognized by the workout importers
// ABOUTME: Multi-section aliases are matched exactly; single-table aliases by prefix
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Column aliases
//!
//! All aliases are lowercase. Importers lowercase header names before lookup.

/// Multi-section export columns
pub mod multi_section {
    /// Canonical column names used by the header heuristic
    pub const CANONICAL_HEADERS: &[&str] = &[
        "_id",
        "row_id",
        "name",
        "ename",
        "exercisename",
        "exercise_name",
        "logs",
        "difficulty",
        "focus",
        "day_index",
        "dayindex",
        "starttime",
        "endtime",
        "total_time",
        "mydate",
        "note",
        "notes",
        "bodypart",
    ];

    /// Header substrings that mark a header row on their own
    pub const HEADER_SUBSTRINGS: &[&str] = &["time", "id"];

    /// Substring of a header name whose date-like values become timestamps
    pub const TIME_HEADER_SUBSTRING: &str = "time";

    /// Record identifier
    pub const ID: &[&str] = &["_id", "row_id", "id"];
    /// Routine or workout-day name
    pub const NAME: &[&str] = &["name", "routine_name", "day_name"];
    /// Routine difficulty
    pub const DIFFICULTY: &[&str] = &["difficulty", "level"];
    /// Routine focus
    pub const FOCUS: &[&str] = &["focus", "routine_focus"];
    /// Routine description
    pub const DESCRIPTION: &[&str] = &["description", "desc"];
    /// Workout-day index within a routine
    pub const DAY_INDEX: &[&str] = &["day_index", "dayindex"];
    /// Owning routine of a workout day or exercise
    pub const ROUTINE_ID: &[&str] = &["package_id", "routine_id", "belongplan"];
    /// Rest-day flag
    pub const REST_DAY: &[&str] = &["rest_day", "restday", "is_rest"];
    /// Completion timestamp of a workout day
    pub const COMPLETED: &[&str] = &["completed_time", "completetime", "completed"];
    /// Exercise name
    pub const EXERCISE_NAME: &[&str] = &["exercisename", "ename", "exercise_name", "exercise"];
    /// Exercise body part
    pub const BODY_PART: &[&str] = &["bodypart", "body_part"];
    /// Target repetitions of a routine exercise
    pub const TARGET_REPS: &[&str] = &["target_reps", "reps", "rep_count"];
    /// Set log (`"w x r,w x r"`)
    pub const LOGS: &[&str] = &["logs", "log", "set_log"];
    /// Date of an exercise, log, or note
    pub const DATE: &[&str] = &["mydate", "date", "timestamp", "logtime"];
    /// Owning session of an exercise log
    pub const SESSION_ID: &[&str] = &["belongsession", "session_id"];
    /// Session start
    pub const START_TIME: &[&str] = &["starttime", "start_time"];
    /// Session end
    pub const END_TIME: &[&str] = &["endtime", "end_time"];
    /// Session total duration (seconds)
    pub const TOTAL_TIME: &[&str] = &["total_time", "session_length", "duration"];
    /// Session active duration (seconds)
    pub const ACTIVE_TIME: &[&str] = &["active_time", "activetime", "workout_time"];
    /// Session rest duration (seconds)
    pub const REST_TIME: &[&str] = &["rest_time", "resttime", "rest_timer"];
    /// Number of exercises in a session
    pub const EXERCISE_COUNT: &[&str] = &["total_exercise", "exercise_count", "total_exercises"];
    /// Total weight moved in a session
    pub const TOTAL_WEIGHT: &[&str] = &["total_weight", "weight_moved"];
    /// Exercise the note is attached to
    pub const NOTE_EXERCISE_ID: &[&str] = &["eid", "exercise_id", "belongexercise"];
    /// Note text
    pub const NOTE_TEXT: &[&str] = &["note", "notes", "content", "text"];
}

/// Single-table export columns, matched as prefixes of the lowercased header
pub mod single_table {
    /// Workout number grouping rows into sessions
    pub const WORKOUT_NUMBER: &str = "workout #";
    /// Session date
    pub const DATE: &str = "date";
    /// Session name
    pub const WORKOUT_NAME: &str = "workout name";
    /// Session duration
    pub const DURATION: &str = "duration";
    /// Exercise name
    pub const EXERCISE_NAME: &str = "exercise name";
    /// Position of the set within its exercise
    pub const SET_ORDER: &str = "set order";
    /// Weight (`Weight (kg)`, `Weight (lbs)`)
    pub const WEIGHT: &str = "weight";
    /// Repetitions
    pub const REPS: &str = "reps";
    /// Distance (`Distance (meters)`)
    pub const DISTANCE: &str = "distance";
    /// Set duration in seconds
    pub const SECONDS: &str = "seconds";
    /// Rate of perceived exertion
    pub const RPE: &str = "rpe";
    /// Set notes
    pub const NOTES: &str = "notes";
    /// Session notes
    pub const WORKOUT_NOTES: &str = "workout notes";
}
