// ABOUTME: Workout analyzer computing personal records, progress, consistency, and summaries
// ABOUTME: Borrows performed exercises and sessions and derives every report on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Report computation over performed exercises and sessions
#![allow(clippy::cast_precision_loss)] // Safe: counts and day gaps are far below 2^52

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Datelike, Duration, NaiveDate};
use tracing::debug;

use crate::constants::units::{DAYS_PER_WEEK, SECONDS_PER_MINUTE};
use crate::models::{ceil_days, DateRange, Exercise, WorkoutSession};
use crate::reports::{
    ConsistencyStats, PersonalRecord, PersonalRecords, ProgressPoint, WeeklyVolume,
    WorkoutSummary,
};

/// Round to a fixed number of decimal places
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Analyzer over one immutable snapshot of performed exercises and sessions
///
/// # Examples
///
/// ```rust
/// use pierre_intelligence::models::{Exercise, WorkoutSet};
/// use pierre_intelligence::WorkoutAnalyzer;
///
/// let mut squat = Exercise::new("Squat");
/// squat.sets = vec![WorkoutSet::new(1, 0.0, 12), WorkoutSet::new(2, 20.0, 5)];
/// let exercises = [squat];
///
/// let records = WorkoutAnalyzer::new(&exercises, &[]).personal_records();
/// assert_eq!(records["Squat"].reps, 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WorkoutAnalyzer<'a> {
    exercises: &'a [Exercise],
    sessions: &'a [WorkoutSession],
}

impl<'a> WorkoutAnalyzer<'a> {
    /// Analyze `exercises` performed across `sessions`
    #[must_use]
    pub const fn new(exercises: &'a [Exercise], sessions: &'a [WorkoutSession]) -> Self {
        Self {
            exercises,
            sessions,
        }
    }

    /// Heaviest set per exercise name.
    ///
    /// Sets with no weight never hold a record, so a bodyweight exercise only
    /// appears once a weighted set was logged. Among equally heavy sets the
    /// first one found wins.
    #[must_use]
    pub fn personal_records(&self) -> PersonalRecords {
        let mut records = PersonalRecords::new();
        for exercise in self.exercises {
            for set in exercise.sets.iter().filter(|s| s.weight > 0.0) {
                let held = records
                    .get(&exercise.name)
                    .is_some_and(|best| set.weight <= best.weight);
                if !held {
                    records.insert(
                        exercise.name.clone(),
                        PersonalRecord {
                            weight: set.weight,
                            reps: set.reps,
                            volume: set.volume(),
                            date: exercise.timestamp,
                        },
                    );
                }
            }
        }
        records
    }

    /// Every occurrence of `name`, oldest first.
    ///
    /// Occurrences without a timestamp sort ahead of dated ones; equal
    /// timestamps keep their original order.
    #[must_use]
    pub fn exercise_progress(&self, name: &str) -> Vec<ProgressPoint> {
        let mut occurrences: Vec<&Exercise> =
            self.exercises.iter().filter(|e| e.name == name).collect();
        occurrences.sort_by_key(|e| e.timestamp);
        occurrences
            .into_iter()
            .map(|exercise| ProgressPoint {
                date: exercise.timestamp,
                sets: exercise.sets.clone(),
                max_weight: exercise.max_weight(),
                total_volume: exercise.total_volume(),
            })
            .collect()
    }

    /// Whole-day gaps between consecutive dated sessions, `None` below two sessions
    #[must_use]
    pub fn consistency(&self) -> Option<ConsistencyStats> {
        let mut starts: Vec<i64> = self
            .sessions
            .iter()
            .filter(|s| s.has_start_time())
            .map(|s| s.start_time)
            .collect();
        if starts.len() < 2 {
            debug!(sessions = starts.len(), "not enough dated sessions for consistency");
            return None;
        }
        starts.sort_unstable();

        let gaps: Vec<i64> = starts.windows(2).map(|w| ceil_days(w[1].saturating_sub(w[0]))).collect();
        let total: i64 = gaps.iter().sum();
        #[allow(clippy::cast_possible_truncation)] // Safe: rounded mean of day gaps
        let average_gap = (total as f64 / gaps.len() as f64).round() as i64;

        Some(ConsistencyStats {
            average_gap,
            min_gap: gaps.iter().copied().min().unwrap_or(0),
            max_gap: gaps.iter().copied().max().unwrap_or(0),
            total_gaps: gaps.len(),
        })
    }

    /// Headline figures across sessions and performed exercises
    #[must_use]
    pub fn summary(&self) -> WorkoutSummary {
        let total_workouts = self.sessions.len();
        let date_range = DateRange::from_start_times(self.sessions.iter().map(|s| s.start_time));

        let avg_workout_time = if total_workouts == 0 {
            0.0
        } else {
            let total: f64 = self.sessions.iter().map(|s| s.total_duration).sum();
            round_to(total / total_workouts as f64 / SECONDS_PER_MINUTE, 1)
        };

        let weeks = date_range.map_or(0.0, |range| range.days as f64 / DAYS_PER_WEEK);
        let workout_frequency = round_to(total_workouts as f64 / weeks.max(1.0), 2);

        WorkoutSummary {
            total_workouts,
            total_exercises: self.exercises.len(),
            total_sets: self.exercises.iter().map(Exercise::total_sets).sum(),
            total_volume: self.exercises.iter().map(Exercise::total_volume).sum(),
            avg_workout_time,
            exercise_types: self.exercise_names(),
            date_range,
            workout_frequency,
        }
    }

    /// Volume per ISO week (weeks start on Monday), oldest first.
    ///
    /// Undated exercises and sessions are left out.
    #[must_use]
    pub fn weekly_volume(&self) -> Vec<WeeklyVolume> {
        let mut weeks: BTreeMap<NaiveDate, WeeklyVolume> = BTreeMap::new();
        for session in self.sessions.iter().filter(|s| s.has_start_time()) {
            if let Some(start) = week_start(session.start_time) {
                weeks.entry(start).or_insert_with(|| empty_week(start)).sessions += 1;
            }
        }
        for exercise in self.exercises {
            let Some(start) = exercise.timestamp.and_then(week_start) else {
                continue;
            };
            let week = weeks.entry(start).or_insert_with(|| empty_week(start));
            week.total_sets += exercise.total_sets();
            week.total_volume += exercise.total_volume();
        }
        weeks.into_values().collect()
    }

    /// Distinct exercise names, sorted
    #[must_use]
    pub fn exercise_names(&self) -> Vec<String> {
        self.exercises
            .iter()
            .map(|e| e.name.as_str())
            .filter(|name| !name.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }
}

const fn empty_week(week_start: NaiveDate) -> WeeklyVolume {
    WeeklyVolume {
        week_start,
        sessions: 0,
        total_sets: 0,
        total_volume: 0.0,
    }
}

/// Monday of the ISO week holding `timestamp`
fn week_start(timestamp: i64) -> Option<NaiveDate> {
    if timestamp <= 0 {
        return None;
    }
    let date = DateTime::from_timestamp(timestamp, 0)?.date_naive();
    Some(date - Duration::days(i64::from(date.weekday().num_days_from_monday())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutSet;

    #[test]
    fn test_week_start_is_monday() {
        // 2024-01-03 is a Wednesday
        assert_eq!(
            week_start(1_704_240_000),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(week_start(0), None);
    }

    #[test]
    fn test_record_ties_keep_first() {
        let mut first = Exercise::new("Bench");
        first.timestamp = Some(100);
        first.sets = vec![WorkoutSet::new(1, 80.0, 5)];
        let mut second = Exercise::new("Bench");
        second.timestamp = Some(200);
        second.sets = vec![WorkoutSet::new(1, 80.0, 8)];
        let exercises = [first, second];

        let records = WorkoutAnalyzer::new(&exercises, &[]).personal_records();
        assert_eq!(records["Bench"].reps, 5);
        assert_eq!(records["Bench"].date, Some(100));
    }

    #[test]
    fn test_round_to() {
        assert!((round_to(2.345_67, 2) - 2.35).abs() < 1e-9);
        assert!((round_to(47.5, 1) - 47.5).abs() < 1e-9);
    }
}
