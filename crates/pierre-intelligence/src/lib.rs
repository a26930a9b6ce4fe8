// ABOUTME: Workout analysis engine computing records, progress, consistency, and volume trends
// ABOUTME: Pure functions over an immutable snapshot of performed exercises and sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout analysis.
//!
//! Every report is computed on demand from borrowed data; nothing is cached
//! and empty inputs produce empty or absent reports rather than errors.

// Re-export pierre-core modules so analyzer files can keep `use crate::models::*` etc.
pub use pierre_core::constants;
pub use pierre_core::models;

/// Report computation over performed exercises and sessions
pub mod analyzer;
/// Report types returned by the analyzer
pub mod reports;

pub use analyzer::WorkoutAnalyzer;
pub use reports::{
    ConsistencyStats, PersonalRecord, PersonalRecords, ProgressPoint, WeeklyVolume,
    WorkoutSummary,
};
