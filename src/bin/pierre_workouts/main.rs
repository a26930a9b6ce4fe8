// ABOUTME: Pierre Workouts CLI - import a workout tracker export and print analysis reports
// ABOUTME: Thin glue over the library entry points with JSON or TOON output on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Command-line front end for workout export reports.
//!
//! Usage:
//! ```bash
//! # Which export format is this?
//! pierre-workouts detect export.csv
//!
//! # Full normalized data, pretty-printed
//! pierre-workouts parse export.csv --pretty
//!
//! # Personal records in TOON
//! pierre-workouts records export.csv --output toon
//!
//! # Progress of one exercise
//! pierre-workouts progress export.csv --exercise "Bench Press (Barbell)"
//! ```

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use pierre_workouts::errors::AppError;
use pierre_workouts::formatters::OutputFormat;
use pierre_workouts::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "pierre-workouts",
    about = "Pierre workout export analyzer",
    long_about = "Import a workout tracker CSV export (multi-section or single-table) and print analysis reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (json or toon)
    #[arg(long, short = 'o', global = true, default_value = "json", value_parser = OutputFormat::from_str)]
    output: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the detected export format
    Detect {
        /// Export file
        file: PathBuf,
    },

    /// Print the full normalized data
    Parse {
        /// Export file
        file: PathBuf,
    },

    /// Print headline figures
    Summary {
        /// Export file
        file: PathBuf,
    },

    /// Print the heaviest set per exercise
    Records {
        /// Export file
        file: PathBuf,
    },

    /// Print every occurrence of one exercise, oldest first
    Progress {
        /// Export file
        file: PathBuf,

        /// Exercise name, exactly as exported
        #[arg(long, short = 'e')]
        exercise: String,
    },

    /// Print day gaps between sessions
    Consistency {
        /// Export file
        file: PathBuf,
    },

    /// Print training volume per ISO week
    Volume {
        /// Export file
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        eprintln!("{e}");
    }

    match commands::run(cli.command, cli.output, cli.pretty) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e
                .downcast_ref::<AppError>()
                .map_or(1, |app| app.code.exit_code());
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
