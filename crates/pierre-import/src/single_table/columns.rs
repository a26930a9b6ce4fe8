// ABOUTME: Resolves single-table header names to column positions and unit factors
// ABOUTME: Matches exact names or names followed by a unit suffix such as `Weight (kg)`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::columns::single_table as col;
use crate::constants::units::{METERS_PER_KILOMETER, METERS_PER_MILE, SECONDS_PER_MINUTE};

/// Column positions of one single-table header
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMap {
    pub workout_number: Option<usize>,
    pub date: Option<usize>,
    pub workout_name: Option<usize>,
    pub duration: Option<usize>,
    pub exercise_name: Option<usize>,
    pub set_order: Option<usize>,
    pub weight: Option<usize>,
    pub reps: Option<usize>,
    pub distance: Option<usize>,
    pub seconds: Option<usize>,
    pub rpe: Option<usize>,
    pub notes: Option<usize>,
    pub workout_notes: Option<usize>,
    /// Multiplier taking the distance column to meters
    pub distance_factor: f64,
    /// Multiplier taking the session duration column to seconds
    pub duration_factor: f64,
}

impl ColumnMap {
    /// Resolve every known column in `header`
    pub fn resolve(header: &[String]) -> Self {
        let lower: Vec<String> = header.iter().map(|h| h.trim().to_lowercase()).collect();
        let find = |name: &str| lower.iter().position(|h| matches_column(h, name));

        let distance = find(col::DISTANCE);
        let duration = find(col::DURATION);
        Self {
            workout_number: find(col::WORKOUT_NUMBER),
            date: find(col::DATE),
            workout_name: find(col::WORKOUT_NAME),
            duration,
            exercise_name: find(col::EXERCISE_NAME),
            set_order: find(col::SET_ORDER),
            weight: find(col::WEIGHT),
            reps: find(col::REPS),
            distance,
            seconds: find(col::SECONDS),
            rpe: find(col::RPE),
            notes: find(col::NOTES),
            workout_notes: find(col::WORKOUT_NOTES),
            distance_factor: distance.map_or(1.0, |i| distance_factor(&lower[i])),
            duration_factor: duration.map_or(1.0, |i| duration_factor(&lower[i])),
        }
    }
}

/// `header` names column `name` exactly or with a unit suffix
fn matches_column(header: &str, name: &str) -> bool {
    header
        .strip_prefix(name)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with([' ', '(']))
}

fn unit_suffix(header: &str) -> Option<&str> {
    let open = header.find('(')?;
    let close = header[open..].find(')')? + open;
    Some(header[open + 1..close].trim())
}

fn distance_factor(header: &str) -> f64 {
    match unit_suffix(header) {
        Some("km" | "kilometers" | "kilometres") => METERS_PER_KILOMETER,
        Some("mi" | "mile" | "miles") => METERS_PER_MILE,
        _ => 1.0,
    }
}

fn duration_factor(header: &str) -> f64 {
    match unit_suffix(header) {
        Some("min" | "mins" | "minutes") => SECONDS_PER_MINUTE,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_unit_suffixes_resolve() {
        let map = ColumnMap::resolve(&header(&[
            "Workout #",
            "Weight (kg)",
            "Distance (km)",
            "Workout Notes",
            "Notes",
        ]));
        assert_eq!(map.workout_number, Some(0));
        assert_eq!(map.weight, Some(1));
        assert_eq!(map.distance, Some(2));
        assert!((map.distance_factor - 1000.0).abs() < f64::EPSILON);
        assert_eq!(map.workout_notes, Some(3));
        assert_eq!(map.notes, Some(4));
    }

    #[test]
    fn test_prefix_requires_word_boundary() {
        assert!(matches_column("reps", "reps"));
        assert!(!matches_column("repsx", "reps"));
        assert!(!matches_column("workout notes", "workout name"));
    }
}
