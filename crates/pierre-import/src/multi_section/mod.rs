// ABOUTME: Section-based parser for the comma-separated multi-section export
// ABOUTME: Walks lines tracking the active section and its header, routing records by section kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Multi-section export parser.
//!
//! The export is a sequence of sub-tables, each introduced by a
//! `### NAME ###` marker line and closed by a line of `#`. The first content
//! line after a marker is that section's header; every later line is a data
//! row zipped against it. Parsing never fails on content: lines before any
//! marker, rows without a header, and rows with no usable field are skipped
//! with a debug event naming the line number.

mod classify;
mod entities;
/// Line and section classification
pub mod section;

pub use classify::{classify_routine_record, RoutineRecordKind};

use tracing::{debug, info, instrument};

use crate::config::ImportConfig;
use crate::models::{NormalizedData, SourceFormat};
use crate::record::Record;
use crate::tokenizer::{has_content, split_fields};
use section::{classify_line, looks_like_header, LineKind, SectionKind};

/// Section the walker is currently inside
struct ActiveSection {
    kind: SectionKind,
    title: String,
    header: Option<Vec<String>>,
}

/// Accumulator threaded through one parse
struct ParseState<'c> {
    config: &'c ImportConfig,
    data: NormalizedData,
    section: Option<ActiveSection>,
    skipped: usize,
}

impl<'c> ParseState<'c> {
    fn new(config: &'c ImportConfig) -> Self {
        Self {
            config,
            data: NormalizedData::new(SourceFormat::MultiSection),
            section: None,
            skipped: 0,
        }
    }

    fn enter_section(&mut self, title: &str) {
        let kind = SectionKind::from_title(title);
        debug!(section = title, ?kind, "entering section");
        self.section = Some(ActiveSection {
            kind,
            title: title.to_owned(),
            header: None,
        });
    }

    fn content_line(&mut self, line_number: usize, line: &str) {
        let separator = self.config.multi_section_separator;
        let strict = self.config.strict_headers;

        let Some(section) = self.section.as_mut() else {
            debug!(line = line_number, "skipping content outside any section");
            self.skipped += 1;
            return;
        };

        let fields = split_fields(line, separator);
        if !has_content(&fields) {
            debug!(line = line_number, "skipping line without usable fields");
            self.skipped += 1;
            return;
        }

        let Some(header) = section.header.as_ref() else {
            if strict && !looks_like_header(&fields) {
                debug!(line = line_number, "skipping non-header line before section header");
                self.skipped += 1;
                return;
            }
            if !looks_like_header(&fields) {
                debug!(line = line_number, "header row has no recognizable column names");
            }
            section.header = Some(fields);
            return;
        };

        let record = Record::from_row(header, &fields);
        if record.is_empty() {
            debug!(line = line_number, "skipping record without values");
            self.skipped += 1;
            return;
        }

        let kind = section.kind;
        let title = section.title.clone();
        self.route(line_number, kind, &title, record);
    }

    fn route(&mut self, line_number: usize, kind: SectionKind, title: &str, record: Record) {
        let data = &mut self.data;
        match kind {
            SectionKind::Settings => {
                for (key, value) in record.present_fields() {
                    data.settings.insert(key, value.clone());
                }
            }
            SectionKind::Routines => match classify_routine_record(&record) {
                RoutineRecordKind::Routine => data.routines.push(entities::routine(&record)),
                RoutineRecordKind::WorkoutDay => {
                    data.workout_days.push(entities::workout_day(&record));
                }
                RoutineRecordKind::Exercise => data.exercises.push(entities::exercise(&record)),
                RoutineRecordKind::Unclassified => {
                    debug!(line = line_number, "dropping unclassifiable routines record");
                    self.skipped += 1;
                }
            },
            SectionKind::WorkoutSessions => data.sessions.push(entities::session(&record)),
            SectionKind::Notes => data.notes.push(entities::note(&record)),
            SectionKind::Unknown => match entities::exercise_log(title, record) {
                Some(log) => data.exercise_logs.push(log),
                None => {
                    debug!(line = line_number, section = title, "dropping record of unknown section");
                    self.skipped += 1;
                }
            },
        }
    }

    fn finish(self) -> NormalizedData {
        let data = self.data;
        info!(
            routines = data.routines.len(),
            workout_days = data.workout_days.len(),
            exercises = data.exercises.len(),
            sessions = data.sessions.len(),
            notes = data.notes.len(),
            exercise_logs = data.exercise_logs.len(),
            skipped_lines = self.skipped,
            "parsed multi-section export"
        );
        data.finalize()
    }
}

/// Parse a multi-section export.
///
/// Never fails: the format is noisy by nature and partial results are
/// preferred over errors.
#[must_use]
#[instrument(skip_all, fields(bytes = text.len()))]
pub fn parse_multi_section(text: &str, config: &ImportConfig) -> NormalizedData {
    let mut state = ParseState::new(config);

    for (index, line) in text.trim_start_matches('\u{feff}').lines().enumerate() {
        let line_number = index + 1;
        match classify_line(line) {
            LineKind::Blank | LineKind::Comment => {}
            LineKind::SectionMarker(title) => state.enter_section(title),
            LineKind::Content => state.content_line(line_number, line),
        }
    }

    state.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_reset_on_each_marker() {
        let text = "### SETTINGS ###\nunits,theme\nkg,dark\n##########\n\
                    ### MORE SETTINGS ###\nrest_timer\n90\n";
        let data = parse_multi_section(text, &ImportConfig::default());
        assert_eq!(data.settings.len(), 3);
        assert_eq!(data.settings.get("rest_timer").and_then(|v| v.as_f64()), Some(90.0));
    }

    #[test]
    fn test_content_before_first_marker_is_skipped() {
        let text = "exercisename,logs\nSquat,100x5\n";
        let data = parse_multi_section(text, &ImportConfig::default());
        assert!(data.is_empty());
    }

    #[test]
    fn test_strict_headers_skip_preamble_rows() {
        let config = ImportConfig {
            strict_headers: true,
            ..ImportConfig::default()
        };
        let text = "### ROUTINES ###\nexported list\n_id,name,difficulty\n1,Push,hard\n";
        let data = parse_multi_section(text, &config);
        assert_eq!(data.routines.len(), 1);
        assert_eq!(data.routines[0].name, "Push");
    }
}
