// ABOUTME: Plan and annotation models: routines, workout days, notes, and raw exercise logs
// ABOUTME: Populated only by the multi-section export, which carries plan definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{FieldValue, WorkoutSet};

/// A named workout plan definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    /// Routine identifier from the export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Routine name
    pub name: String,
    /// Difficulty label or level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Training focus (strength, hypertrophy, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A scheduled day within a routine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDay {
    /// Day identifier from the export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owning routine identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routine_id: Option<String>,
    /// Day name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Position of the day within its routine
    pub day_index: u32,
    /// Whether this is a rest day
    pub rest_day: bool,
    /// When the day was last completed (epoch seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
}

/// A free-text annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Exercise the note refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<String>,
    /// When the note was written (epoch seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    /// Note text, verbatim
    pub text: String,
}

/// A record from a section the importer has no dedicated model for, kept
/// because it names an exercise or carries a set log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    /// Marker text of the section the record came from
    pub section: String,
    /// Exercise name, when the record carried one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_name: Option<String>,
    /// When the exercise was logged (epoch seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// Sets decoded from the record's set log
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
    /// Every field of the record, coerced
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}
