//! Pitch command implementation
//!
//! Resolves pitch names to frequencies.

use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use scorebake_score::PitchTable;

use super::json_output::{JsonError, PitchEntry, PitchJsonOutput};
use super::EXIT_INPUT_ERROR;

/// Resolves each name, keeping failures alongside successes.
pub fn resolve_all(names: &[String]) -> Vec<PitchEntry> {
    let mut table = PitchTable::new();
    names
        .iter()
        .map(|name| match table.resolve(name) {
            Ok(frequency) => PitchEntry {
                name: name.clone(),
                frequency: Some(frequency),
                error: None,
            },
            Err(e) => PitchEntry {
                name: name.clone(),
                frequency: None,
                error: Some(JsonError::new(e.code(), e.to_string())),
            },
        })
        .collect()
}

/// Run the pitch command
///
/// # Returns
/// Exit code: 0 if every name resolved, 1 otherwise
pub fn run(names: &[String], json_output: bool) -> Result<ExitCode> {
    let pitches = resolve_all(names);
    let success = pitches.iter().all(|entry| entry.error.is_none());

    if json_output {
        let output = PitchJsonOutput { success, pitches };
        let json =
            serde_json::to_string_pretty(&output).context("Failed to serialize pitch output")?;
        println!("{}", json);
    } else {
        for entry in &pitches {
            match (&entry.frequency, &entry.error) {
                (Some(frequency), _) => {
                    println!("  {} {:<4} {:.3} Hz", "ok".green(), entry.name, frequency)
                }
                (None, Some(error)) => {
                    println!("  {} {}", "!!".red(), error.message)
                }
                (None, None) => {}
            }
        }
    }

    if success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_INPUT_ERROR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_all_keeps_order() {
        let entries = resolve_all(&names(&["A4", "Q2", "A5"]));
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].frequency, Some(440.0));
        assert_eq!(entries[1].error.as_ref().unwrap().code, "SCORE_001");
        assert_eq!(entries[2].frequency, Some(880.0));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(run(&names(&["C4", "Eb3"]), true).unwrap(), ExitCode::SUCCESS);
        assert_eq!(
            run(&names(&["C4", "C"]), true).unwrap(),
            ExitCode::from(EXIT_INPUT_ERROR)
        );
    }
}
