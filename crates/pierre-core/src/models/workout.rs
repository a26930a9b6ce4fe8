// ABOUTME: Performed-workout models: sets, exercises, and completed sessions
// ABOUTME: Volumes, totals, and efficiency are derived on access and emitted on serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One performed set
///
/// # Examples
///
/// ```rust
/// use pierre_core::models::WorkoutSet;
///
/// let set = WorkoutSet::new(1, 100.0, 5);
/// assert!((set.volume() - 500.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(into = "WorkoutSetView")]
pub struct WorkoutSet {
    /// 1-based position within its exercise
    pub set_number: u32,
    /// Weight lifted (never negative)
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
    /// Distance covered in meters (cardio only)
    #[serde(default)]
    pub distance: Option<f64>,
    /// Duration in seconds (timed sets only)
    #[serde(default)]
    pub duration: Option<f64>,
    /// Rate of perceived exertion
    #[serde(default)]
    pub rpe: Option<f64>,
    /// Free-text set notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl WorkoutSet {
    /// Create a weight-and-reps set; negative weights clamp to zero
    #[must_use]
    pub fn new(set_number: u32, weight: f64, reps: u32) -> Self {
        Self {
            set_number,
            weight: weight.max(0.0),
            reps,
            distance: None,
            duration: None,
            rpe: None,
            notes: None,
        }
    }

    /// Training volume of this set (`weight × reps`)
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }

    /// A set where nothing at all was recorded is not a real attempt.
    ///
    /// Weight or reps alone count, as do distance or duration so cardio and
    /// timed holds survive.
    #[must_use]
    pub fn is_attempt(&self) -> bool {
        self.weight > 0.0
            || self.reps > 0
            || self.distance.is_some_and(|d| d > 0.0)
            || self.duration.is_some_and(|d| d > 0.0)
    }
}

#[derive(Serialize)]
struct WorkoutSetView {
    set_number: u32,
    weight: f64,
    reps: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rpe: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    volume: f64,
}

impl From<WorkoutSet> for WorkoutSetView {
    fn from(set: WorkoutSet) -> Self {
        let volume = set.volume();
        Self {
            set_number: set.set_number,
            weight: set.weight,
            reps: set.reps,
            distance: set.distance,
            duration: set.duration,
            rpe: set.rpe,
            notes: set.notes,
            volume,
        }
    }
}

/// One exercise performed within a session or defined within a routine
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(into = "ExerciseView")]
pub struct Exercise {
    /// Exercise name as written in the export
    pub name: String,
    /// Targeted body part
    #[serde(default)]
    pub body_part: Option<String>,
    /// Planned repetitions per set
    #[serde(default)]
    pub target_reps: Option<u32>,
    /// When the exercise was performed (epoch seconds)
    #[serde(default)]
    pub timestamp: Option<i64>,
    /// Identifier of the owning workout or routine
    #[serde(default)]
    pub workout_id: Option<String>,
    /// Performed sets, numbered contiguously from 1
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

impl Exercise {
    /// Create an exercise with no sets
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body_part: None,
            target_reps: None,
            timestamp: None,
            workout_id: None,
            sets: Vec::new(),
        }
    }

    /// Number of sets
    #[must_use]
    pub fn total_sets(&self) -> usize {
        self.sets.len()
    }

    /// Sum of set volumes, always recomputed from `sets`
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.sets.iter().map(WorkoutSet::volume).sum()
    }

    /// Heaviest weight across sets, 0 without sets
    #[must_use]
    pub fn max_weight(&self) -> f64 {
        self.sets.iter().map(|s| s.weight).fold(0.0, f64::max)
    }

    /// Renumber sets 1..=N in their current order
    pub fn renumber_sets(&mut self) {
        for (set, number) in self.sets.iter_mut().zip(1_u32..) {
            set.set_number = number;
        }
    }
}

#[derive(Serialize)]
struct ExerciseView {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    body_part: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_reps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    workout_id: Option<String>,
    sets: Vec<WorkoutSet>,
    total_sets: usize,
    total_volume: f64,
    max_weight: f64,
}

impl From<Exercise> for ExerciseView {
    fn from(exercise: Exercise) -> Self {
        let total_sets = exercise.total_sets();
        let total_volume = exercise.total_volume();
        let max_weight = exercise.max_weight();
        Self {
            name: exercise.name,
            body_part: exercise.body_part,
            target_reps: exercise.target_reps,
            timestamp: exercise.timestamp,
            workout_id: exercise.workout_id,
            sets: exercise.sets,
            total_sets,
            total_volume,
            max_weight,
        }
    }
}

/// One completed workout occurrence
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(into = "WorkoutSessionView")]
pub struct WorkoutSession {
    /// Workout identifier from the export (workout number or row id)
    #[serde(default)]
    pub id: Option<String>,
    /// Workout name
    #[serde(default)]
    pub name: Option<String>,
    /// Start time in epoch seconds; 0 when the export carried no usable start
    pub start_time: i64,
    /// End time in epoch seconds
    #[serde(default)]
    pub end_time: Option<i64>,
    /// Total duration in seconds
    pub total_duration: f64,
    /// Time spent working, in seconds
    #[serde(default)]
    pub active_duration: Option<f64>,
    /// Time spent resting, in seconds
    #[serde(default)]
    pub rest_duration: Option<f64>,
    /// Number of exercises performed
    pub exercise_count: u32,
    /// Aggregate weight moved
    pub total_weight: f64,
    /// Session notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl WorkoutSession {
    /// Create a session starting at `start_time` with every other figure zeroed
    #[must_use]
    pub fn new(start_time: i64) -> Self {
        Self {
            id: None,
            name: None,
            start_time,
            end_time: None,
            total_duration: 0.0,
            active_duration: None,
            rest_duration: None,
            exercise_count: 0,
            total_weight: 0.0,
            notes: None,
        }
    }

    /// Percentage of the session spent active, when both durations are known and non-zero
    #[must_use]
    pub fn efficiency(&self) -> Option<f64> {
        match self.active_duration {
            Some(active) if active > 0.0 && self.total_duration > 0.0 => {
                Some(active / self.total_duration * 100.0)
            }
            _ => None,
        }
    }

    /// Average weight moved per exercise, when both inputs are non-zero
    #[must_use]
    pub fn average_weight_per_exercise(&self) -> Option<f64> {
        (self.exercise_count > 0 && self.total_weight > 0.0)
            .then(|| self.total_weight / f64::from(self.exercise_count))
    }

    /// Whether the session has a usable start time
    #[must_use]
    pub const fn has_start_time(&self) -> bool {
        self.start_time > 0
    }
}

#[derive(Serialize)]
struct WorkoutSessionView {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    start_time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_time: Option<i64>,
    total_duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    active_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rest_duration: Option<f64>,
    exercise_count: u32,
    total_weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    efficiency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    average_weight_per_exercise: Option<f64>,
}

impl From<WorkoutSession> for WorkoutSessionView {
    fn from(session: WorkoutSession) -> Self {
        let efficiency = session.efficiency();
        let average_weight_per_exercise = session.average_weight_per_exercise();
        Self {
            id: session.id,
            name: session.name,
            start_time: session.start_time,
            end_time: session.end_time,
            total_duration: session.total_duration,
            active_duration: session.active_duration,
            rest_duration: session.rest_duration,
            exercise_count: session.exercise_count,
            total_weight: session.total_weight,
            notes: session.notes,
            efficiency,
            average_weight_per_exercise,
        }
    }
}
