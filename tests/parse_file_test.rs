// ABOUTME: Integration tests for reading exports from disk
// ABOUTME: Missing files, non-UTF-8 content, and invalid environment configuration map to error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;
use std::fs;

use pierre_import::{ENV_DETECT_LINES, ENV_SINGLE_TABLE_SEPARATOR};
use pierre_workouts::errors::ErrorCode;
use pierre_workouts::models::SourceFormat;
use pierre_workouts::parse_file;
use serial_test::serial;
use tempfile::TempDir;

fn clear_env() {
    env::remove_var(ENV_DETECT_LINES);
    env::remove_var(ENV_SINGLE_TABLE_SEPARATOR);
}

#[test]
#[serial]
fn test_parse_fixture_file() {
    clear_env();
    let data = parse_file(common::fixture_path("single_table_export.csv")).unwrap();
    assert_eq!(data.format, SourceFormat::SingleTable);
    assert_eq!(data.sessions.len(), 3);
}

#[test]
#[serial]
fn test_missing_file_is_not_found() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let error = parse_file(dir.path().join("absent.csv")).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[test]
#[serial]
fn test_non_utf8_file_is_invalid_format() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.csv");
    fs::write(&path, b"Exercise Name;Reps\n\xE9l\xE9vation;10\n").unwrap();

    let error = parse_file(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[test]
#[serial]
fn test_invalid_environment_is_config_error() {
    clear_env();
    env::set_var(ENV_DETECT_LINES, "many");
    let result = parse_file(common::fixture_path("single_table_export.csv"));
    clear_env();

    assert_eq!(result.unwrap_err().code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_environment_forces_single_table_separator() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pipes.csv");
    fs::write(&path, "Exercise Name|Set Order|Weight (kg)|Reps\nSquat|1|100|5\n").unwrap();

    env::set_var(ENV_SINGLE_TABLE_SEPARATOR, "|");
    let data = parse_file(&path);
    clear_env();

    let data = data.unwrap();
    assert_eq!(data.exercises.len(), 1);
    assert_eq!(data.exercises[0].sets[0].reps, 5);
}
