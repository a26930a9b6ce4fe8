// ABOUTME: Workout export importers for the multi-section and single-table CSV formats
// ABOUTME: Tokenizer, format detection, field coercion, set-log decoding, and both parsers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout export importers and their shared building blocks.
//!
//! Control flow for one parse:
//!
//! ```text
//! raw text -> detect_format -> parse_multi_section | parse_single_table -> NormalizedData
//! ```
//!
//! Both parsers tokenize lines with [`split_fields`]; the multi-section parser
//! also decodes compact `"w x r,w x r"` set logs with [`decode_set_log`]. Content
//! errors never abort a parse: malformed lines are skipped and unreadable
//! numbers coerce to zero.

// Re-export pierre-core modules so importer files can keep `use crate::models::*` etc.
pub use pierre_core::constants;
pub use pierre_core::errors;
pub use pierre_core::models;

/// Field value coercion (numbers, timestamps, durations)
pub mod coerce;
/// Environment-driven importer configuration
pub mod config;
/// Format detection over the leading lines of an export
pub mod detector;
/// Multi-section (`### NAME` delimited) export parser
pub mod multi_section;
/// Header-keyed records built from tokenized rows
pub mod record;
/// Compact set-log decoding
pub mod set_log;
/// Single-table (one row per set) export parser
pub mod single_table;
/// Quote-aware line tokenizer
pub mod tokenizer;

pub use config::{
    ConfigError, ImportConfig, ENV_DETECT_LINES, ENV_MULTI_SECTION_SEPARATOR,
    ENV_SINGLE_TABLE_SEPARATOR, ENV_STRICT_HEADERS,
};
pub use detector::{detect_format, detect_format_with};
pub use multi_section::{classify_routine_record, parse_multi_section, RoutineRecordKind};
pub use record::Record;
pub use set_log::decode_set_log;
pub use single_table::{parse_single_table, sniff_separator};
pub use tokenizer::split_fields;
