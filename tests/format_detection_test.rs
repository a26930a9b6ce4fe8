// ABOUTME: Integration tests for export format detection
// ABOUTME: Indicator words win, markers and unknown input fall back to multi-section
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pierre_workouts::models::SourceFormat;
use pierre_workouts::{detect_format, detect_format_with_config, parse_with_config, ImportConfig};

#[test]
fn test_single_table_fixture_is_detected() {
    let text = common::fixture("single_table_export.csv");
    assert_eq!(detect_format(&text), SourceFormat::SingleTable);
    assert_eq!(detect_format(&text).as_str(), "single-table");
}

#[test]
fn test_multi_section_fixture_is_detected() {
    let text = common::fixture("multi_section_export.csv");
    assert_eq!(detect_format(&text), SourceFormat::MultiSection);
}

#[test]
fn test_indicator_match_is_case_sensitive() {
    assert_eq!(
        detect_format("exercise name;set order;weight\n"),
        SourceFormat::MultiSection
    );
    assert_eq!(detect_format("x;Reps\n"), SourceFormat::SingleTable);
}

#[test]
fn test_marker_casing_does_not_matter() {
    assert_eq!(
        detect_format("### my routines ###\n_id,name\n"),
        SourceFormat::MultiSection
    );
    assert_eq!(
        detect_format("### MY ROUTINES ###\n_id,name\n"),
        SourceFormat::MultiSection
    );
}

#[test]
fn test_unrecognized_and_empty_input_default_to_multi_section() {
    assert_eq!(detect_format(""), SourceFormat::MultiSection);
    assert_eq!(detect_format("hello\nworld\n"), SourceFormat::MultiSection);
}

#[test]
fn test_only_first_five_non_blank_lines_are_inspected() {
    let text = "\n\na\n\nb\nc\nd\ne\nExercise Name;Reps\n";
    assert_eq!(detect_format(text), SourceFormat::MultiSection);

    let text = "\n\na\n\nb\nc\nExercise Name;Reps\n";
    assert_eq!(detect_format(text), SourceFormat::SingleTable);
}

#[test]
fn test_configured_window_drives_detection_and_parsing_alike() {
    let text = "a\nb\nc\nd\ne\nf\nExercise Name;Reps\nSquat;5\n";
    let wide = ImportConfig {
        detect_lines: 10,
        ..ImportConfig::default()
    };

    assert_eq!(detect_format(text), SourceFormat::MultiSection);
    assert_eq!(detect_format_with_config(text, &wide), SourceFormat::SingleTable);
    assert_eq!(parse_with_config(text, &wide).format, SourceFormat::SingleTable);
}
