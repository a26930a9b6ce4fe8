// ABOUTME: Classifies raw export text as single-table or multi-section from its leading lines
// ABOUTME: Single-table indicator columns win; section markers or the default give multi-section
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::debug;

use crate::constants::formats::{
    COMMENT_CHAR, DEFAULT_DETECT_LINES, SECTION_MARKER_PREFIX, SINGLE_TABLE_INDICATORS,
};
use crate::models::SourceFormat;

/// Byte-order mark some spreadsheet tools prepend to exports
const BOM: char = '\u{feff}';

/// Detect the export format from the first five non-blank lines
#[must_use]
pub fn detect_format(text: &str) -> SourceFormat {
    detect_format_with(text, DEFAULT_DETECT_LINES)
}

/// Detect the export format from the first `max_lines` non-blank lines.
///
/// Single pass, first match wins: any line containing a single-table
/// indicator column (case-sensitive substring) means single-table; otherwise
/// the input is multi-section, whether or not a section marker was seen.
#[must_use]
pub fn detect_format_with(text: &str, max_lines: usize) -> SourceFormat {
    let head: Vec<&str> = text
        .trim_start_matches(BOM)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(max_lines)
        .collect();

    if let Some(indicator) = head.iter().find_map(|line| {
        SINGLE_TABLE_INDICATORS
            .iter()
            .find(|indicator| line.contains(*indicator))
    }) {
        debug!(indicator = %indicator, "detected single-table export");
        return SourceFormat::SingleTable;
    }

    if head
        .iter()
        .any(|line| line.starts_with(SECTION_MARKER_PREFIX) || line.starts_with(COMMENT_CHAR))
    {
        debug!("detected multi-section export from section markers");
    } else {
        debug!("no format indicators found, defaulting to multi-section");
    }
    SourceFormat::MultiSection
}
