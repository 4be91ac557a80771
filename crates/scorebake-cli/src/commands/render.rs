//! Render command implementation
//!
//! Renders the built-in arrangement and optionally plays it into a WAV file.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use scorebake_render::{render_with_config, RenderConfig};

use super::json_output::{JsonError, RenderJsonOutput, RenderSummary};
use super::{render_exit_code, EXIT_SINK_ERROR};
use crate::sink::{PlaybackSink, WavFileSink};

/// Run the render command
///
/// # Arguments
/// * `config` - Sample rate and optional seed
/// * `output` - WAV file to write (no file when `None`)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 score error, 2 render error, 3 sink error
pub fn run(config: &RenderConfig, output: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let start = Instant::now();
    let mut sink = output.map(WavFileSink::new);

    // Capability check happens before any rendering work.
    if let Some(sink) = &sink {
        if let Err(e) = sink.is_available() {
            if json_output {
                print_json(&RenderJsonOutput {
                    success: false,
                    errors: vec![JsonError::from(&e)],
                    result: None,
                    total_ms: start.elapsed().as_millis() as u64,
                })?;
            } else {
                eprintln!("{} {}", "FAILED".red().bold(), e);
            }
            return Ok(ExitCode::from(EXIT_SINK_ERROR));
        }
    }

    if !json_output {
        println!("{} {} Hz", "Sample rate:".cyan().bold(), config.sample_rate);
        if let Some(seed) = config.seed {
            println!("{} {}", "Seed:".cyan().bold(), seed);
        }
    }

    let rendered = match render_with_config(config) {
        Ok(rendered) => rendered,
        Err(e) => {
            if json_output {
                print_json(&RenderJsonOutput {
                    success: false,
                    errors: vec![JsonError::from(&e)],
                    result: None,
                    total_ms: start.elapsed().as_millis() as u64,
                })?;
            } else {
                eprintln!("{} [{}] {}", "FAILED".red().bold(), e.code(), e);
            }
            return Ok(render_exit_code(&e));
        }
    };

    let mut summary = RenderSummary::from_output(&rendered);

    if let Some(sink) = sink.as_mut() {
        if let Err(e) = sink.start(&rendered.buffer) {
            if json_output {
                print_json(&RenderJsonOutput {
                    success: false,
                    errors: vec![JsonError::from(&e)],
                    result: Some(summary),
                    total_ms: start.elapsed().as_millis() as u64,
                })?;
            } else {
                eprintln!("{} {}", "FAILED".red().bold(), e);
            }
            return Ok(ExitCode::from(EXIT_SINK_ERROR));
        }
        summary.output = Some(sink.path().display().to_string());
        summary.pcm_hash = sink.written().map(|wav| wav.pcm_hash.clone());
    }

    let total = start.elapsed();
    if json_output {
        print_json(&RenderJsonOutput {
            success: true,
            errors: Vec::new(),
            result: Some(summary),
            total_ms: total.as_millis() as u64,
        })?;
    } else {
        print_summary(&summary);
        println!(
            "{} Total time: {:.2?}",
            "SUCCESS".green().bold(),
            total
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn print_summary(summary: &RenderSummary) {
    println!(
        "{} {} frames x {} channels ({:.2}s)",
        "Rendered:".cyan().bold(),
        summary.frames,
        summary.channels,
        summary.duration_seconds
    );
    println!("{} {}", "Seed:".dimmed(), summary.seed);
    println!("{} {:.4}", "Peak before normalization:".dimmed(), summary.peak);
    println!(
        "{} {} entries, {} of {} samples synthesized",
        "Waveform cache:".dimmed(),
        summary.cache.entries,
        summary.cache.generated_samples,
        summary.cache.requested_samples
    );
    println!("{} {} ms", "Render time:".dimmed(), summary.render_ms);
    if let (Some(path), Some(hash)) = (&summary.output, &summary.pcm_hash) {
        println!(
            "  {} {} ({})",
            "->".green(),
            Path::new(path).display(),
            &hash[..16]
        );
    }
}

fn print_json(output: &RenderJsonOutput) -> Result<()> {
    let json = serde_json::to_string_pretty(output).context("Failed to serialize render output")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("song.wav");
        let config = RenderConfig::new(8000).with_seed(1);

        let code = run(&config, path.to_str(), true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().channels, 2);
        assert_eq!(reader.spec().sample_rate, 8000);
    }

    #[test]
    fn test_missing_output_dir_fails_before_rendering() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("song.wav");
        let code = run(&RenderConfig::new(8000), path.to_str(), true).unwrap();
        assert_eq!(code, ExitCode::from(EXIT_SINK_ERROR));
        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_sample_rate_is_input_error() {
        let code = run(&RenderConfig::new(0), None, true).unwrap();
        assert_eq!(code, ExitCode::from(super::super::EXIT_INPUT_ERROR));
    }
}
