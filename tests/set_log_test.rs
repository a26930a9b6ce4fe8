// ABOUTME: Integration tests for compact set-log decoding
// ABOUTME: Empty logs, zero tokens, ordering, numbering, and volume of decoded sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::assert_close;
use pierre_import::decode_set_log;

#[test]
fn test_empty_and_zero_logs_have_no_sets() {
    assert!(decode_set_log("").is_empty());
    assert!(decode_set_log("0").is_empty());
    assert!(decode_set_log("  ").is_empty());
}

#[test]
fn test_sets_keep_order_and_are_numbered_from_one() {
    let sets = decode_set_log("20x10,70x5,90x5,100x5,100x4,100x3");
    let decoded: Vec<(u32, f64, u32)> = sets
        .iter()
        .map(|s| (s.set_number, s.weight, s.reps))
        .collect();
    assert_eq!(
        decoded,
        vec![
            (1, 20.0, 10),
            (2, 70.0, 5),
            (3, 90.0, 5),
            (4, 100.0, 5),
            (5, 100.0, 4),
            (6, 100.0, 3),
        ]
    );
    assert_close(sets.iter().map(|s| s.volume()).sum(), 2200.0);
}

#[test]
fn test_zero_tokens_are_dropped_and_numbering_stays_contiguous() {
    let sets = decode_set_log("0x0,60x8,0x0,0x12");
    assert_eq!(sets.len(), 2);
    assert_eq!((sets[0].set_number, sets[0].reps), (1, 8));
    assert_eq!((sets[1].set_number, sets[1].reps), (2, 12));
    assert_close(sets[1].weight, 0.0);
}

#[test]
fn test_delimiter_is_case_insensitive_and_split_on_first() {
    let sets = decode_set_log("50X8, 42.5x6x2");
    assert_eq!(sets.len(), 2);
    assert_close(sets[0].weight, 50.0);
    assert_eq!(sets[0].reps, 8);
    // "6x2" does not parse as a number, so reps read as 0
    assert_close(sets[1].weight, 42.5);
    assert_eq!(sets[1].reps, 0);
}

#[test]
fn test_negative_weight_clamps_to_zero() {
    let sets = decode_set_log("-20x5");
    assert_eq!(sets.len(), 1);
    assert_close(sets[0].weight, 0.0);
    assert_eq!(sets[0].reps, 5);
}
