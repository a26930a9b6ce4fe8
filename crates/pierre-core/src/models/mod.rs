// ABOUTME: Normalized workout data model shared by every importer and the analysis engine
// ABOUTME: Re-exports sessions, exercises, sets, routines, notes, settings, and NormalizedData
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The common schema both export formats are normalized into.
//!
//! ## Design Principles
//!
//! - **Format Agnostic**: Models abstract away differences between the exports
//! - **Derived, never stored**: Volumes, totals, and efficiency are computed from
//!   their inputs on access and only materialized when serialized
//! - **Serializable**: Every model round-trips through JSON
//!
//! ## Core Models
//!
//! - `NormalizedData`: aggregate root produced by one parse
//! - `WorkoutSession`: one completed workout occurrence
//! - `Exercise` / `WorkoutSet`: what was performed within a session or routine
//! - `Routine` / `WorkoutDay`: plan definitions
//! - `Note` / `ExerciseLog` / `Settings`: everything else an export carries

mod field_value;
mod normalized;
mod plan;
mod workout;

pub use field_value::FieldValue;
pub use normalized::{ceil_days, DateRange, NormalizedData, Settings, SourceFormat};
pub use plan::{ExerciseLog, Note, Routine, WorkoutDay};
pub use workout::{Exercise, WorkoutSession, WorkoutSet};
