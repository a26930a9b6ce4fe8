// ABOUTME: Unit conversion constants for time and date arithmetic
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Seconds per day, as used for whole-day gap arithmetic
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Days per week
pub const DAYS_PER_WEEK: f64 = 7.0;

/// Epoch values above this are milliseconds rather than seconds (year 5138 in seconds)
pub const EPOCH_MILLIS_THRESHOLD: f64 = 100_000_000_000.0;

/// Milliseconds per second
pub const MS_PER_SECOND: f64 = 1000.0;

/// Meters in one kilometer
pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Meters in one statute mile
pub const METERS_PER_MILE: f64 = 1609.344;
