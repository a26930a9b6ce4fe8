// ABOUTME: Main library entry point for Pierre workout export import and analysis
// ABOUTME: Detects the export format, parses it into the normalized model, and analyzes it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Workouts
//!
//! Imports workout tracker CSV exports and computes strength-training
//! reports from them. Two exports are understood: a multi-section export of
//! `### NAME` delimited sub-tables, and a single-table export with one row
//! per set.
//!
//! ## Features
//!
//! - **Format detection**: classifies an export from its leading lines
//! - **Best-effort parsing**: malformed lines are skipped, never fatal
//! - **Analysis**: personal records, exercise progress, workout consistency,
//!   summaries and weekly volume
//! - **Output**: JSON or TOON serialization of any report
//!
//! ## Example
//!
//! ```rust
//! use pierre_workouts::{get_personal_records, parse};
//!
//! let text = "Workout #;Date;Exercise Name;Set Order;Weight (kg);Reps\n\
//!             1;2024-01-01 10:00:00;Squat;1;100;5\n\
//!             1;2024-01-01 10:00:00;Squat;2;110;3\n";
//! let data = parse(text);
//! let records = get_personal_records(&data);
//! assert_eq!(records["Squat"].reps, 3);
//! ```

/// Entry points: detection, parsing, and analysis reports
pub mod api;

/// Logging configuration and structured logging
pub mod logging;

/// Format strategies selected by the detector
pub mod strategy;

pub use api::{
    detect_format, detect_format_with_config, exercise_names, get_exercise_progress,
    get_personal_records, get_summary, get_weekly_volume, get_workout_consistency, parse,
    parse_file, parse_with_config,
};
pub use strategy::{strategy_for, FormatStrategy, MultiSectionFormat, SingleTableFormat};

pub use pierre_core::errors;
pub use pierre_core::formatters;
pub use pierre_core::models;
pub use pierre_import::{ConfigError, ImportConfig};
pub use pierre_intelligence::{
    ConsistencyStats, PersonalRecord, PersonalRecords, ProgressPoint, WeeklyVolume,
    WorkoutAnalyzer, WorkoutSummary,
};
