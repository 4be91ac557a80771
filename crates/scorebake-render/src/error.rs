//! Error types for the renderer.

use std::time::Duration;

use scorebake_score::ScoreError;
use thiserror::Error;

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can abort a render.
///
/// None of these leave a partial buffer behind: a render either completes
/// and is normalized, or returns one of these.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Score expansion or pitch resolution failed.
    #[error(transparent)]
    Score(#[from] ScoreError),

    /// The render ran for longer than the wall-clock budget.
    #[error("time budget exceeded: rendering ran for {elapsed:?} (budget {budget:?})")]
    TimeBudgetExceeded {
        /// Wall time measured at the check that tripped.
        elapsed: Duration,
        /// The budget that was exceeded.
        budget: Duration,
    },

    /// Every track needs exactly one waveform generator.
    #[error("score has {tracks} tracks but {generators} waveform generators were supplied")]
    GeneratorCountMismatch {
        /// Tracks in the score.
        tracks: usize,
        /// Generators supplied.
        generators: usize,
    },

    /// WAV encoding failed.
    #[error("WAV encoding error: {0}")]
    Wav(#[from] hound::Error),
}

impl RenderError {
    /// Returns true for the watchdog abort.
    pub fn is_timeout(&self) -> bool {
        matches!(self, RenderError::TimeBudgetExceeded { .. })
    }

    /// Returns the stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            RenderError::Score(inner) => inner.code(),
            RenderError::TimeBudgetExceeded { .. } => "RENDER_001",
            RenderError::GeneratorCountMismatch { .. } => "RENDER_002",
            RenderError::Wav(_) => "RENDER_003",
        }
    }

    /// Returns the error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        match self {
            RenderError::Score(inner) => inner.category(),
            _ => "render",
        }
    }
}
