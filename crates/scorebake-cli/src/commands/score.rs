//! Score command implementation
//!
//! Prints the built-in arrangement expanded to frame positions as JSON.

use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use scorebake_score::{Arrangement, Score};

use super::EXIT_INPUT_ERROR;

/// Run the score command
///
/// # Returns
/// Exit code: 0 success, 1 invalid sample rate
pub fn run(sample_rate: u32, pretty: bool) -> Result<ExitCode> {
    let score = match Arrangement::reference().build_score(sample_rate) {
        Ok(score) => score,
        Err(e) => {
            eprintln!("{} [{}] {}", "FAILED".red().bold(), e.code(), e);
            return Ok(ExitCode::from(EXIT_INPUT_ERROR));
        }
    };

    println!("{}", to_json(&score, pretty)?);
    Ok(ExitCode::SUCCESS)
}

/// Serializes a score.
pub fn to_json(score: &Score, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(score)
    } else {
        serde_json::to_string(score)
    };
    json.context("Failed to serialize score")
}
