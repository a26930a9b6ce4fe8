// ABOUTME: Decodes compact "weight x reps, weight x reps" set logs into numbered sets
// ABOUTME: Zero-weight zero-rep tokens are dropped; one positive dimension keeps the set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::coerce::{number_or_zero, truncate_count};
use crate::constants::formats::{
    EMPTY_SET_LOG, SET_LOG_TOKEN_SEPARATOR, SET_LOG_WEIGHT_REPS_DELIMITER,
};
use crate::models::WorkoutSet;

/// Decode a set log such as `"20x10,70x5,90X5"`.
///
/// `""` and `"0"` mean no sets were logged. Each token splits on its first
/// `x` (either case); unreadable sides count as 0 and reps truncate to whole
/// numbers. Sets are numbered from 1 in log order after dropping tokens where
/// both weight and reps are 0.
///
/// # Examples
///
/// ```rust
/// use pierre_import::decode_set_log;
///
/// let sets = decode_set_log("20x10, 0x0, 0x12");
/// assert_eq!(sets.len(), 2);
/// assert_eq!((sets[1].set_number, sets[1].reps), (2, 12));
/// ```
#[must_use]
pub fn decode_set_log(log: &str) -> Vec<WorkoutSet> {
    let log = log.trim();
    if log.is_empty() || log == EMPTY_SET_LOG {
        return Vec::new();
    }

    log.split(SET_LOG_TOKEN_SEPARATOR)
        .map(decode_token)
        .filter(WorkoutSet::is_attempt)
        .zip(1_u32..)
        .map(|(mut set, number)| {
            set.set_number = number;
            set
        })
        .collect()
}

fn decode_token(token: &str) -> WorkoutSet {
    let token = token.trim();
    let (weight, reps) = token
        .find(|c: char| c.eq_ignore_ascii_case(&SET_LOG_WEIGHT_REPS_DELIMITER))
        .map_or((token, ""), |at| {
            (&token[..at], &token[at + SET_LOG_WEIGHT_REPS_DELIMITER.len_utf8()..])
        });
    WorkoutSet::new(0, number_or_zero(weight), truncate_count(number_or_zero(reps)))
}
