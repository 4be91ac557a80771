//! CLI command implementations.
//!
//! Each command returns `anyhow::Result<ExitCode>`. Exit codes:
//!
//! - 0: success
//! - 1: input or score error (malformed pitch, invalid sample rate)
//! - 2: render error, including the time budget
//! - 3: playback sink unavailable or failed

pub mod doctor;
pub mod json_output;
pub mod pitch;
pub mod render;
pub mod score;

use std::process::ExitCode;

use scorebake_render::RenderError;

/// Exit code for a failed command input or score.
pub const EXIT_INPUT_ERROR: u8 = 1;
/// Exit code for a failed render.
pub const EXIT_RENDER_ERROR: u8 = 2;
/// Exit code for an unavailable or failed sink.
pub const EXIT_SINK_ERROR: u8 = 3;

/// Maps a render failure to its exit code.
pub fn render_exit_code(err: &RenderError) -> ExitCode {
    match err {
        RenderError::Score(_) => ExitCode::from(EXIT_INPUT_ERROR),
        _ => ExitCode::from(EXIT_RENDER_ERROR),
    }
}
