// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Units, export format markers, and column aliases for the workout importers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file. Column aliases are lowercase; importers compare them against
//! lowercased header names.

/// Column aliases for the multi-section and single-table exports
pub mod columns;
/// Format detection indicators, section keywords, and separators
pub mod formats;
/// Unit conversion and measurement constants
pub mod units;
