// ABOUTME: Line classification and section kinds for the multi-section export
// ABOUTME: Recognizes `### NAME` markers, `#` comment runs, blanks, and header-like rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::columns::multi_section::{CANONICAL_HEADERS, HEADER_SUBSTRINGS};
use crate::constants::formats::{section_keywords, COMMENT_CHAR};

/// Minimum run of `#` that opens a named section
const MARKER_HASH_RUN: usize = 3;

/// The kinds of section the parser routes records by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Single settings table, merged into one map
    Settings,
    /// Routines, workout days, and routine exercises sharing one marker
    Routines,
    /// Completed workout sessions
    WorkoutSessions,
    /// Free-text notes
    Notes,
    /// Any other section
    Unknown,
}

impl SectionKind {
    /// Derive the kind from marker text by case-insensitive keyword match
    #[must_use]
    pub fn from_title(title: &str) -> Self {
        let title = title.to_lowercase();
        if title.contains(section_keywords::SETTINGS) {
            Self::Settings
        } else if title.contains(section_keywords::ROUTINES) {
            Self::Routines
        } else if title.contains(section_keywords::WORKOUT_SESSIONS) {
            Self::WorkoutSessions
        } else if title.contains(section_keywords::NOTES) {
            Self::Notes
        } else {
            Self::Unknown
        }
    }
}

/// What a single trimmed line is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Nothing but whitespace
    Blank,
    /// `#` run or other `#`-prefixed line that names no section
    Comment,
    /// `### NAME ###` section marker, carrying the bare name
    SectionMarker(&'a str),
    /// Anything else
    Content,
}

/// Classify a line
#[must_use]
pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }
    if !line.starts_with(COMMENT_CHAR) {
        return LineKind::Content;
    }

    let rest = line.trim_start_matches(COMMENT_CHAR);
    let run = line.len() - rest.len();
    let title = rest.trim().trim_end_matches(COMMENT_CHAR).trim();
    if run >= MARKER_HASH_RUN && rest.starts_with(char::is_whitespace) && !title.is_empty() {
        LineKind::SectionMarker(title)
    } else {
        LineKind::Comment
    }
}

/// Header heuristic: any canonical column name, or any field containing
/// `time` or `id`, case-insensitively
#[must_use]
pub fn looks_like_header(fields: &[String]) -> bool {
    fields.iter().any(|field| {
        let field = field.to_lowercase();
        CANONICAL_HEADERS.contains(&field.as_str())
            || HEADER_SUBSTRINGS.iter().any(|s| field.contains(s))
    })
}
