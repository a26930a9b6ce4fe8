// ABOUTME: Flat-table parser for the semicolon-separated single-table export
// ABOUTME: Groups one-row-per-set records into sessions and exercises ordered by first appearance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Single-table export parser.
//!
//! Line one is the header; every later line is one set belonging to the
//! workout named by its `Workout #` column. Exports without that column are
//! grouped by date and workout name instead.

mod columns;

use std::collections::HashMap;
use tracing::{debug, info, instrument};

use crate::coerce::{number_or_zero, parse_duration, parse_number, parse_timestamp, truncate_count};
use crate::config::ImportConfig;
use crate::constants::formats::{SINGLE_TABLE_LEGACY_SEPARATOR, SINGLE_TABLE_SEPARATOR};
use crate::models::{Exercise, NormalizedData, SourceFormat, WorkoutSession, WorkoutSet};
use crate::tokenizer::split_fields;
use columns::ColumnMap;

/// Pick the separator a header line uses.
///
/// Counts `;` and `,` outside quotes; the reference `;` wins ties, including
/// a header with neither.
#[must_use]
pub fn sniff_separator(header_line: &str) -> char {
    let mut in_quotes = false;
    let (mut semicolons, mut commas) = (0_usize, 0_usize);
    for c in header_line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            SINGLE_TABLE_SEPARATOR if !in_quotes => semicolons += 1,
            SINGLE_TABLE_LEGACY_SEPARATOR if !in_quotes => commas += 1,
            _ => {}
        }
    }
    if commas > semicolons {
        SINGLE_TABLE_LEGACY_SEPARATOR
    } else {
        SINGLE_TABLE_SEPARATOR
    }
}

fn cell(fields: &[String], column: Option<usize>) -> &str {
    column.and_then(|i| fields.get(i)).map_or("", String::as_str)
}

fn text(fields: &[String], column: Option<usize>) -> Option<String> {
    Some(cell(fields, column))
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Sets of one exercise within a workout, keyed by declared set order
struct ExerciseGroup {
    name: String,
    sets: Vec<(f64, WorkoutSet)>,
}

/// Rows sharing one workout key
struct WorkoutGroup {
    id: Option<String>,
    name: Option<String>,
    start_time: i64,
    duration: f64,
    notes: Option<String>,
    exercises: Vec<ExerciseGroup>,
}

impl WorkoutGroup {
    fn exercise_mut(&mut self, name: &str) -> &mut ExerciseGroup {
        let index = match self.exercises.iter().position(|e| e.name == name) {
            Some(index) => index,
            None => {
                self.exercises.push(ExerciseGroup {
                    name: name.to_owned(),
                    sets: Vec::new(),
                });
                self.exercises.len() - 1
            }
        };
        &mut self.exercises[index]
    }

    /// Emit the session and its exercises in first-appearance order
    fn emit(self, data: &mut NormalizedData) {
        let mut session = WorkoutSession::new(self.start_time);
        session.id.clone_from(&self.id);
        session.name = self.name;
        session.total_duration = self.duration;
        session.notes = self.notes;
        if self.start_time > 0 && self.duration > 0.0 {
            // Saturating cast; an absurd duration leaves the end time unknown
            #[allow(clippy::cast_possible_truncation)]
            let seconds = self.duration.round() as i64;
            session.end_time = self.start_time.checked_add(seconds);
        }
        session.exercise_count = u32::try_from(self.exercises.len()).unwrap_or(u32::MAX);

        let timestamp = (self.start_time > 0).then_some(self.start_time);
        for group in self.exercises {
            let mut sets = group.sets;
            // Stable: rows with equal set order keep their file order
            sets.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut exercise = Exercise::new(group.name);
            exercise.timestamp = timestamp;
            exercise.workout_id.clone_from(&self.id);
            exercise.sets = sets.into_iter().map(|(_, set)| set).collect();
            exercise.renumber_sets();

            session.total_weight += exercise.total_volume();
            data.exercises.push(exercise);
        }
        data.sessions.push(session);
    }
}

/// Accumulator threaded through one parse
struct ParseState {
    columns: ColumnMap,
    workouts: Vec<WorkoutGroup>,
    index: HashMap<String, usize>,
    skipped: usize,
}

impl ParseState {
    fn new(columns: ColumnMap) -> Self {
        Self {
            columns,
            workouts: Vec::new(),
            index: HashMap::new(),
            skipped: 0,
        }
    }

    fn row(&mut self, line_number: usize, fields: &[String]) {
        let cols = &self.columns;
        let raw = |column: Option<usize>| cell(fields, column);
        let present = |column: Option<usize>| text(fields, column);

        let workout_number = present(cols.workout_number);
        let key = workout_number.clone().unwrap_or_else(|| {
            format!("{}|{}", raw(cols.date), raw(cols.workout_name))
        });

        let position = match self.index.get(&key) {
            Some(position) => *position,
            None => {
                let date = raw(cols.date);
                let start_time = parse_timestamp(date).unwrap_or_else(|| {
                    if !date.is_empty() {
                        debug!(line = line_number, date, "unreadable workout date");
                    }
                    0
                });
                self.workouts.push(WorkoutGroup {
                    id: workout_number,
                    name: present(cols.workout_name),
                    start_time,
                    duration: parse_duration(raw(cols.duration)).unwrap_or(0.0)
                        * cols.duration_factor,
                    notes: present(cols.workout_notes),
                    exercises: Vec::new(),
                });
                self.index.insert(key, self.workouts.len() - 1);
                self.workouts.len() - 1
            }
        };

        let Some(exercise_name) = present(cols.exercise_name) else {
            debug!(line = line_number, "row without exercise name adds no set");
            return;
        };

        let mut set = WorkoutSet::new(
            0,
            number_or_zero(raw(cols.weight)),
            truncate_count(number_or_zero(raw(cols.reps))),
        );
        set.distance = parse_number(raw(cols.distance))
            .map(|d| d * cols.distance_factor)
            .filter(|d| *d > 0.0);
        set.duration = parse_number(raw(cols.seconds)).filter(|s| *s > 0.0);
        set.rpe = parse_number(raw(cols.rpe)).filter(|r| *r > 0.0);
        set.notes = present(cols.notes);
        let order = parse_number(raw(cols.set_order)).unwrap_or(0.0);

        let group = self.workouts[position].exercise_mut(&exercise_name);
        if set.is_attempt() {
            group.sets.push((order, set));
        } else {
            debug!(line = line_number, exercise = %exercise_name, "dropping empty set");
        }
    }

    fn finish(self) -> NormalizedData {
        let mut data = NormalizedData::new(SourceFormat::SingleTable);
        for workout in self.workouts {
            workout.emit(&mut data);
        }
        info!(
            sessions = data.sessions.len(),
            exercises = data.exercises.len(),
            skipped_lines = self.skipped,
            "parsed single-table export"
        );
        data.finalize()
    }
}

/// Parse a single-table export.
///
/// Rows shorter than the header are skipped. Missing or unreadable numbers
/// read as 0 and the row is kept, so cardio rows that only carry distance or
/// seconds survive.
#[must_use]
#[instrument(skip_all, fields(bytes = text.len()))]
pub fn parse_single_table(text: &str, config: &ImportConfig) -> NormalizedData {
    let mut lines = text
        .trim_start_matches('\u{feff}')
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((_, header_line)) = lines.next() else {
        debug!("empty single-table export");
        return NormalizedData::new(SourceFormat::SingleTable);
    };

    let separator = config
        .single_table_separator
        .unwrap_or_else(|| sniff_separator(header_line));
    let header = split_fields(header_line, separator);
    debug!(columns = header.len(), separator = %separator, "single-table header");

    let mut state = ParseState::new(ColumnMap::resolve(&header));
    for (line_number, line) in lines {
        let fields = split_fields(line, separator);
        if fields.len() < header.len() {
            debug!(
                line = line_number,
                fields = fields.len(),
                expected = header.len(),
                "skipping short row"
            );
            state.skipped += 1;
            continue;
        }
        state.row(line_number, &fields);
    }

    state.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_prefers_semicolon_on_ties() {
        assert_eq!(sniff_separator("Date;Workout Name;Reps"), ';');
        assert_eq!(sniff_separator("Date,Workout Name,Reps"), ',');
        assert_eq!(sniff_separator("\"a;b\",c,d"), ',');
        assert_eq!(sniff_separator("Reps"), ';');
    }

    #[test]
    fn test_rows_out_of_set_order_are_sorted() {
        let text = "Workout #;Exercise Name;Set Order;Weight (kg);Reps\n\
                    1;Squat;2;100;5\n1;Squat;1;90;5\n1;Squat;3;110;3\n";
        let data = parse_single_table(text, &ImportConfig::default());
        let weights: Vec<f64> = data.exercises[0].sets.iter().map(|s| s.weight).collect();
        assert_eq!(weights, vec![90.0, 100.0, 110.0]);
        let numbers: Vec<u32> = data.exercises[0].sets.iter().map(|s| s.set_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_grouping_without_workout_number() {
        let text = "Date,Workout Name,Exercise Name,Set Order,Weight,Reps\n\
                    2024-01-01 10:00:00,Legs,Squat,1,100,5\n\
                    2024-01-03 10:00:00,Legs,Squat,1,105,5\n";
        let data = parse_single_table(text, &ImportConfig::default());
        assert_eq!(data.sessions.len(), 2);
        assert_eq!(data.exercises.len(), 2);
        assert!(data.sessions.iter().all(|s| s.id.is_none()));
    }

    #[test]
    fn test_cardio_row_with_distance_only() {
        let text = "Workout #;Exercise Name;Set Order;Weight (kg);Reps;Distance (km)\n\
                    7;Running;1;;;5\n";
        let data = parse_single_table(text, &ImportConfig::default());
        let set = &data.exercises[0].sets[0];
        assert_eq!(set.reps, 0);
        assert_eq!(set.distance, Some(5000.0));
    }
}
