//! Error types for score construction and pitch resolution.

use thiserror::Error;

/// Result type for score operations.
pub type ScoreResult<T> = Result<T, ScoreError>;

/// Errors that can occur while resolving pitches or expanding a score.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// A pitch name does not follow `<letter>[accidental]<octave>`, or names
    /// an unknown pitch class.
    #[error("malformed pitch name '{name}': {reason}")]
    MalformedPitch {
        /// The offending pitch name.
        name: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Sample rate must be positive.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Tempo must be a positive, finite number of beats per minute.
    #[error("invalid tempo: {tempo} bpm")]
    InvalidTempo {
        /// The invalid tempo.
        tempo: f64,
    },

    /// A note start or length (in bars) is negative or not finite.
    #[error("invalid time {value} bars for note {index} of track {track}")]
    InvalidNoteTime {
        /// Track index.
        track: usize,
        /// Note index within the track.
        index: usize,
        /// The offending value in bars.
        value: f64,
    },
}

impl ScoreError {
    /// Creates a malformed pitch error.
    pub fn malformed_pitch(name: impl Into<String>, reason: &'static str) -> Self {
        Self::MalformedPitch {
            name: name.into(),
            reason,
        }
    }

    /// Returns the stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            ScoreError::MalformedPitch { .. } => "SCORE_001",
            ScoreError::InvalidSampleRate { .. } => "SCORE_002",
            ScoreError::InvalidTempo { .. } => "SCORE_003",
            ScoreError::InvalidNoteTime { .. } => "SCORE_004",
        }
    }

    /// Returns the error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        "score"
    }
}
