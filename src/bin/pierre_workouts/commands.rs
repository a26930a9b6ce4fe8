// ABOUTME: Command implementations for pierre-workouts
// ABOUTME: Loads the export, computes the requested report, and writes it to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use pierre_workouts::errors::AppError;
use pierre_workouts::formatters::{render, OutputFormat};
use pierre_workouts::models::NormalizedData;
use pierre_workouts::{
    detect_format_with_config, exercise_names, get_exercise_progress, get_personal_records,
    get_summary, get_weekly_volume, get_workout_consistency, parse_file, ImportConfig,
};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::Command;

/// Execute one command
pub fn run(command: Command, output: OutputFormat, pretty: bool) -> Result<()> {
    match command {
        Command::Detect { file } => {
            let config = ImportConfig::from_env().map_err(AppError::from)?;
            let text = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let format = detect_format_with_config(&text, &config);
            emit(&json!({ "format": format }), output, pretty)
        }
        Command::Parse { file } => emit(&load(&file)?, output, pretty),
        Command::Summary { file } => emit(&get_summary(&load(&file)?), output, pretty),
        Command::Records { file } => emit(&get_personal_records(&load(&file)?), output, pretty),
        Command::Progress { file, exercise } => {
            let data = load(&file)?;
            let progress = get_exercise_progress(&data, &exercise);
            if progress.is_empty() {
                let known = exercise_names(&data).join(", ");
                return Err(
                    AppError::not_found(format!("Exercise '{exercise}' (known: {known})")).into(),
                );
            }
            emit(&progress, output, pretty)
        }
        Command::Consistency { file } => {
            emit(&get_workout_consistency(&load(&file)?), output, pretty)
        }
        Command::Volume { file } => emit(&get_weekly_volume(&load(&file)?), output, pretty),
    }
}

fn load(file: &Path) -> Result<NormalizedData> {
    let data = parse_file(file)?;
    info!(
        format = %data.format,
        sessions = data.sessions.len(),
        exercises = data.exercises.len(),
        "loaded export"
    );
    Ok(data)
}

fn emit<T: Serialize>(report: &T, output: OutputFormat, pretty: bool) -> Result<()> {
    let rendered = render(report, output, pretty).map_err(AppError::from)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered.text).context("Failed to write report")?;
    Ok(())
}
