//! Doctor command implementation
//!
//! Host capability check: verifies that the WAV sink can write to the output
//! directory and that the built-in arrangement resolves.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use scorebake_render::{DEFAULT_SAMPLE_RATE, TIME_BUDGET};
use scorebake_score::{Arrangement, PitchTable};

use super::json_output::{DoctorCheck, DoctorJsonOutput};
use super::EXIT_SINK_ERROR;
use crate::sink::check_output_dir;

/// Runs every check against `output_dir`.
pub fn checks(output_dir: &Path) -> Vec<DoctorCheck> {
    vec![check_sink(output_dir), check_arrangement()]
}

fn check_sink(output_dir: &Path) -> DoctorCheck {
    match check_output_dir(output_dir) {
        Ok(()) => DoctorCheck {
            name: "output_dir".to_string(),
            ok: true,
            detail: format!("{} is writable", output_dir.display()),
        },
        Err(e) => DoctorCheck {
            name: "output_dir".to_string(),
            ok: false,
            detail: e.to_string(),
        },
    }
}

fn check_arrangement() -> DoctorCheck {
    let resolved = Arrangement::reference()
        .build_score(DEFAULT_SAMPLE_RATE)
        .and_then(|score| PitchTable::for_score(&score).map(|table| (score, table)));
    match resolved {
        Ok((score, table)) => DoctorCheck {
            name: "arrangement".to_string(),
            ok: true,
            detail: format!(
                "{} tracks, {} notes, {} pitches, {:.2}s at {} Hz",
                score.tracks.len(),
                score.note_count(),
                table.len(),
                score.duration_seconds(),
                DEFAULT_SAMPLE_RATE
            ),
        },
        Err(e) => DoctorCheck {
            name: "arrangement".to_string(),
            ok: false,
            detail: e.to_string(),
        },
    }
}

/// Run the doctor command
///
/// # Returns
/// Exit code: 0 if all checks pass, 3 if the sink cannot be used
pub fn run(output_dir: &str, json_output: bool) -> Result<ExitCode> {
    let checks = checks(Path::new(output_dir));
    let all_ok = checks.iter().all(|check| check.ok);

    if json_output {
        let output = DoctorJsonOutput {
            success: all_ok,
            version: env!("CARGO_PKG_VERSION").to_string(),
            checks,
        };
        let json =
            serde_json::to_string_pretty(&output).context("Failed to serialize doctor output")?;
        println!("{}", json);
    } else {
        println!("{}", "scorebake doctor".cyan().bold());
        println!("{}", "================".cyan());
        println!();
        println!(
            "  {} scorebake-cli v{}",
            "->".green(),
            env!("CARGO_PKG_VERSION")
        );
        println!("  {} time budget {:?}", "->".green(), TIME_BUDGET);
        println!();

        for check in &checks {
            if check.ok {
                println!("  {} {}: {}", "ok".green(), check.name, check.detail);
            } else {
                println!("  {} {}: {}", "!!".red(), check.name, check.detail);
            }
        }
        println!();

        if all_ok {
            println!("{} All checks passed!", "SUCCESS".green().bold());
        } else {
            println!(
                "{} Some checks failed. See above for details.",
                "WARNING".yellow().bold()
            );
        }
    }

    if all_ok {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_SINK_ERROR))
    }
}
