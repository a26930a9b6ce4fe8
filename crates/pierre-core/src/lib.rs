// ABOUTME: Core types and constants for Pierre workout import and analysis
// ABOUTME: Foundation crate with error handling, the normalized model, formatters, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for importing workout
//! tracker exports. Both the importers and the analysis engine depend on it, so
//! it is designed to change infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Units, column aliases, section keywords and format indicators
//! - **models**: The normalized workout model every importer produces
//! - **formatters**: Output format abstraction (JSON, TOON)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Normalized workout data model (sessions, exercises, sets, routines, notes)
pub mod models;

/// Output format abstraction (JSON, TOON) for report serialization
pub mod formatters;
