// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Loads export fixtures and builds small exercises and sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pierre_workouts`

use std::fs;
use std::path::PathBuf;

use pierre_workouts::models::{Exercise, WorkoutSession, WorkoutSet};

/// 2024-01-01 00:00:00 UTC
pub const JAN_1_2024: i64 = 1_704_067_200;
/// Seconds per day
pub const DAY: i64 = 86_400;

/// Path of a file under `tests/fixtures`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Contents of a file under `tests/fixtures`
pub fn fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).unwrap()
}

/// Exercise with `(weight, reps)` sets numbered from 1
pub fn exercise(name: &str, timestamp: Option<i64>, sets: &[(f64, u32)]) -> Exercise {
    let mut exercise = Exercise::new(name);
    exercise.timestamp = timestamp;
    exercise.sets = sets
        .iter()
        .zip(1_u32..)
        .map(|(&(weight, reps), number)| WorkoutSet::new(number, weight, reps))
        .collect();
    exercise
}

/// Session starting at `start_time` lasting `duration` seconds
pub fn session(start_time: i64, duration: f64) -> WorkoutSession {
    let mut session = WorkoutSession::new(start_time);
    session.total_duration = duration;
    session
}

/// Approximate float equality for derived figures
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
