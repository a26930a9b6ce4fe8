// ABOUTME: Format detection indicators, section marker keywords, and default separators
// ABOUTME: Shared by the format detector and the multi-section parser state machine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Tag of the flat, one-header-row export
pub const SINGLE_TABLE: &str = "single-table";

/// Tag of the multi-section export
pub const MULTI_SECTION: &str = "multi-section";

/// Number of leading lines the format detector inspects
pub const DEFAULT_DETECT_LINES: usize = 5;

/// Column names that only appear in the single-table export header.
///
/// Matched case-sensitively as substrings; multi-section headers are lowercase.
pub const SINGLE_TABLE_INDICATORS: &[&str] = &[
    "Exercise Name",
    "Set Order",
    "Weight",
    "Reps",
    "Duration",
];

/// Prefix of a line that opens a named section
pub const SECTION_MARKER_PREFIX: &str = "### ";

/// Comment / separator character of the multi-section export
pub const COMMENT_CHAR: char = '#';

/// Section keyword table, checked in order against the lowercased marker text
pub mod section_keywords {
    /// Settings section
    pub const SETTINGS: &str = "setting";
    /// Routines section (routines, workout days, routine exercises)
    pub const ROUTINES: &str = "routine";
    /// Completed workout sessions
    pub const WORKOUT_SESSIONS: &str = "workout session";
    /// Free-text notes
    pub const NOTES: &str = "notes";
}

/// Default separator of the multi-section export
pub const DEFAULT_MULTI_SECTION_SEPARATOR: char = ',';

/// Separator of the reference single-table export
pub const SINGLE_TABLE_SEPARATOR: char = ';';

/// Separator of older single-table exports
pub const SINGLE_TABLE_LEGACY_SEPARATOR: char = ',';

/// Set-log value meaning "no sets logged"
pub const EMPTY_SET_LOG: &str = "0";

/// Separator between set tokens inside a set log
pub const SET_LOG_TOKEN_SEPARATOR: char = ',';

/// Delimiter between weight and reps inside one set token (matched case-insensitively)
pub const SET_LOG_WEIGHT_REPS_DELIMITER: char = 'x';
