//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag of `render` and `pitch`, and the
//! report printed by `doctor --json`.

use scorebake_render::{CacheStats, RenderError, RenderOutput};
use serde::{Deserialize, Serialize};

use crate::sink::SinkError;

/// Error codes for CLI-level failures. Library errors keep their own codes.
pub mod error_codes {
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g. "SCORE_001", "RENDER_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&RenderError> for JsonError {
    fn from(err: &RenderError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

impl From<&SinkError> for JsonError {
    fn from(err: &SinkError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// Summary of a finished render.
#[derive(Debug, Clone, Serialize)]
pub struct RenderSummary {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Seed the noise generators used.
    pub seed: u32,
    /// Number of channels.
    pub channels: usize,
    /// Frames per channel.
    pub frames: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Peak before normalization.
    pub peak: f64,
    /// Notes mixed per channel.
    pub notes: usize,
    /// Render wall time in milliseconds.
    pub render_ms: u64,
    /// Waveform cache counters.
    pub cache: CacheStats,
    /// WAV file written, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// BLAKE3 hash of the written PCM data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
}

impl RenderSummary {
    /// Summarizes a render output.
    pub fn from_output(output: &RenderOutput) -> Self {
        Self {
            sample_rate: output.buffer.sample_rate(),
            seed: output.seed,
            channels: output.buffer.channel_count(),
            frames: output.buffer.frame_count(),
            duration_seconds: output.buffer.duration_seconds(),
            peak: output.peak,
            notes: output.note_count,
            render_ms: output.elapsed.as_millis() as u64,
            cache: output.cache,
            output: None,
            pcm_hash: None,
        }
    }
}

/// JSON output for the `render` command.
#[derive(Debug, Clone, Serialize)]
pub struct RenderJsonOutput {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Render summary (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RenderSummary>,
    /// Total command wall time in milliseconds.
    pub total_ms: u64,
}

/// One resolved pitch.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PitchEntry {
    /// Pitch name as given.
    pub name: String,
    /// Frequency in Hz (on success).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    /// Resolution error (on failure).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

/// JSON output for the `pitch` command.
#[derive(Debug, Clone, Serialize)]
pub struct PitchJsonOutput {
    /// Whether every name resolved
    pub success: bool,
    /// One entry per requested name, in order
    pub pitches: Vec<PitchEntry>,
}

/// A single doctor check.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorCheck {
    /// Check name.
    pub name: String,
    /// Whether it passed.
    pub ok: bool,
    /// Details.
    pub detail: String,
}

/// JSON output for the `doctor` command.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorJsonOutput {
    /// Whether all checks passed
    pub success: bool,
    /// scorebake-cli version
    pub version: String,
    /// Individual checks
    pub checks: Vec<DoctorCheck>,
}
