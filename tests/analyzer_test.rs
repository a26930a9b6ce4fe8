// ABOUTME: Integration tests for workout analysis reports
// ABOUTME: Personal records, exercise progress, consistency, summary, and weekly volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, exercise, session, DAY, JAN_1_2024};
use pierre_workouts::models::{NormalizedData, SourceFormat};
use pierre_workouts::{
    exercise_names, get_exercise_progress, get_personal_records, get_summary, get_weekly_volume,
    get_workout_consistency, parse, WorkoutAnalyzer,
};

fn single_table(sessions: Vec<pierre_workouts::models::WorkoutSession>) -> NormalizedData {
    let mut data = NormalizedData::new(SourceFormat::SingleTable);
    data.sessions = sessions;
    data.finalize()
}

#[test]
fn test_consistency_of_evenly_spaced_sessions() {
    let data = single_table(vec![
        session(JAN_1_2024, 3600.0),
        session(JAN_1_2024 + 3 * DAY, 3600.0),
        session(JAN_1_2024 + 6 * DAY, 3600.0),
    ]);
    let stats = get_workout_consistency(&data).unwrap();
    assert_eq!(stats.average_gap, 3);
    assert_eq!(stats.min_gap, 3);
    assert_eq!(stats.max_gap, 3);
    assert_eq!(stats.total_gaps, 2);
}

#[test]
fn test_consistency_sorts_and_rounds_partial_days_up() {
    let data = single_table(vec![
        session(JAN_1_2024 + 10 * DAY, 0.0),
        session(JAN_1_2024, 0.0),
        session(JAN_1_2024 + DAY + 60, 0.0),
    ]);
    let stats = get_workout_consistency(&data).unwrap();
    // Gaps: ceil(1 day + 60s) = 2, ceil(9 days - 60s) = 9
    assert_eq!((stats.min_gap, stats.max_gap), (2, 9));
    // 5.5 rounds half away from zero
    assert_eq!(stats.average_gap, 6);
}

#[test]
fn test_consistency_needs_two_dated_sessions() {
    assert_eq!(get_workout_consistency(&single_table(vec![])), None);
    assert_eq!(
        get_workout_consistency(&single_table(vec![session(JAN_1_2024, 0.0)])),
        None
    );
    // Undated sessions do not count
    assert_eq!(
        get_workout_consistency(&single_table(vec![session(JAN_1_2024, 0.0), session(0, 0.0)])),
        None
    );
}

#[test]
fn test_zero_weight_set_never_holds_the_record() {
    let exercises = [exercise("Pull Up", Some(JAN_1_2024), &[(0.0, 12), (20.0, 5)])];
    let records = WorkoutAnalyzer::new(&exercises, &[]).personal_records();

    let record = &records["Pull Up"];
    assert_close(record.weight, 20.0);
    assert_eq!(record.reps, 5);
    assert_close(record.volume, 100.0);
    assert_eq!(record.date, Some(JAN_1_2024));
}

#[test]
fn test_bodyweight_only_exercise_has_no_record() {
    let exercises = [exercise("Push Up", None, &[(0.0, 30), (0.0, 25)])];
    let records = WorkoutAnalyzer::new(&exercises, &[]).personal_records();
    assert!(records.is_empty());
}

#[test]
fn test_records_from_single_table_fixture() {
    let data = parse(&common::fixture("single_table_export.csv"));
    let records = get_personal_records(&data);

    let names: Vec<&str> = records.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Bench Press (Barbell)", "Deadlift (Barbell)"]);

    let bench = &records["Bench Press (Barbell)"];
    assert_close(bench.weight, 85.0);
    assert_eq!(bench.reps, 5);
    assert_eq!(bench.date, Some(1_705_341_600 + 6 * DAY));
}

#[test]
fn test_records_include_multi_section_exercise_logs() {
    let data = parse(&common::fixture("multi_section_export.csv"));
    let records = get_personal_records(&data);

    let squat = &records["Squat"];
    assert_close(squat.weight, 100.0);
    // First of the three 100 kg sets wins
    assert_eq!(squat.reps, 5);

    let bench = &records["Bench Press"];
    assert_close(bench.weight, 70.0);
    assert_eq!(bench.reps, 6);
}

#[test]
fn test_progress_is_oldest_first() {
    let exercises = [
        exercise("Squat", Some(JAN_1_2024 + 7 * DAY), &[(110.0, 5)]),
        exercise("Bench", Some(JAN_1_2024), &[(60.0, 5)]),
        exercise("Squat", Some(JAN_1_2024), &[(100.0, 5), (105.0, 3)]),
    ];
    let progress = WorkoutAnalyzer::new(&exercises, &[]).exercise_progress("Squat");

    assert_eq!(progress.len(), 2);
    assert_eq!(progress[0].date, Some(JAN_1_2024));
    assert_close(progress[0].max_weight, 105.0);
    assert_close(progress[0].total_volume, 815.0);
    assert_eq!(progress[0].sets.len(), 2);
    assert_eq!(progress[1].date, Some(JAN_1_2024 + 7 * DAY));
}

#[test]
fn test_progress_of_unknown_exercise_is_empty() {
    let data = parse(&common::fixture("single_table_export.csv"));
    assert!(get_exercise_progress(&data, "Snatch").is_empty());
    assert_eq!(get_exercise_progress(&data, "Bench Press (Barbell)").len(), 2);
}

#[test]
fn test_summary_of_single_table_fixture() {
    let data = parse(&common::fixture("single_table_export.csv"));
    let summary = get_summary(&data);

    assert_eq!(summary.total_workouts, 3);
    assert_eq!(summary.total_exercises, 5);
    assert_eq!(summary.total_sets, 6);
    assert_close(summary.total_volume, 2245.0);
    assert_close(summary.avg_workout_time, 60.0);
    assert_eq!(
        summary.exercise_types,
        vec!["Bench Press (Barbell)", "Deadlift (Barbell)", "Plank", "Running"]
    );
    assert_eq!(summary.date_range.unwrap().days, 6);
    // Less than a week of data counts as one week
    assert_close(summary.workout_frequency, 3.0);
}

#[test]
fn test_summary_frequency_over_several_weeks() {
    let sessions = (0..5).map(|i| session(JAN_1_2024 + i * 7 * DAY, 2700.0)).collect();
    let summary = get_summary(&single_table(sessions));
    // 5 sessions over 28 days = 4 weeks
    assert_close(summary.workout_frequency, 1.25);
    assert_close(summary.avg_workout_time, 45.0);
}

#[test]
fn test_summary_of_empty_data() {
    let summary = get_summary(&NormalizedData::new(SourceFormat::MultiSection));
    assert_eq!(summary.total_workouts, 0);
    assert_close(summary.avg_workout_time, 0.0);
    assert_close(summary.workout_frequency, 0.0);
    assert_eq!(summary.date_range, None);
    assert!(summary.exercise_types.is_empty());
}

#[test]
fn test_weekly_volume_groups_by_iso_week() {
    let data = parse(&common::fixture("single_table_export.csv"));
    let weeks = get_weekly_volume(&data);

    // 2024-01-15 is a Monday and 2024-01-21 the Sunday of the same week
    assert_eq!(weeks.len(), 1);
    assert_eq!(weeks[0].week_start.to_string(), "2024-01-15");
    assert_eq!(weeks[0].sessions, 3);
    assert_eq!(weeks[0].total_sets, 6);
    assert_close(weeks[0].total_volume, 2245.0);
}

#[test]
fn test_exercise_names_are_sorted_and_distinct() {
    let data = parse(&common::fixture("multi_section_export.csv"));
    assert_eq!(exercise_names(&data), vec!["Bench Press", "Squat"]);
}
