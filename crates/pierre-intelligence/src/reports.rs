// ABOUTME: Plain report structures produced by the workout analyzer
// ABOUTME: Personal records, progress points, consistency gaps, summary, and weekly volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{DateRange, WorkoutSet};

/// Heaviest set ever logged for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    /// Record weight
    pub weight: f64,
    /// Repetitions performed at that weight
    pub reps: u32,
    /// Volume of the record set
    pub volume: f64,
    /// Timestamp of the exercise occurrence holding the set (epoch seconds)
    pub date: Option<i64>,
}

/// Personal records keyed by exercise name
pub type PersonalRecords = BTreeMap<String, PersonalRecord>;

/// One occurrence of an exercise reduced for progress charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPoint {
    /// When the occurrence was performed (epoch seconds)
    pub date: Option<i64>,
    /// Sets of the occurrence
    pub sets: Vec<WorkoutSet>,
    /// Heaviest weight among the sets
    pub max_weight: f64,
    /// Sum of set volumes
    pub total_volume: f64,
}

/// Whole-day gaps between consecutive sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyStats {
    /// Mean gap, rounded to whole days
    pub average_gap: i64,
    /// Shortest gap in days
    pub min_gap: i64,
    /// Longest gap in days
    pub max_gap: i64,
    /// Number of gaps (sessions minus one)
    pub total_gaps: usize,
}

/// Headline figures for a whole export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Number of sessions
    pub total_workouts: usize,
    /// Number of performed exercise occurrences
    pub total_exercises: usize,
    /// Number of sets across those occurrences
    pub total_sets: usize,
    /// Volume across those occurrences
    pub total_volume: f64,
    /// Mean session duration in minutes, one decimal
    pub avg_workout_time: f64,
    /// Distinct exercise names, sorted
    pub exercise_types: Vec<String>,
    /// Span of dated sessions
    pub date_range: Option<DateRange>,
    /// Sessions per week over the date range, two decimals
    pub workout_frequency: f64,
}

/// Training volume of one ISO week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyVolume {
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Sessions started that week
    pub sessions: usize,
    /// Sets logged that week
    pub total_sets: usize,
    /// Volume logged that week
    pub total_volume: f64,
}
