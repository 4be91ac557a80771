//! scorebake score model
//!
//! This crate holds everything about the music that does not involve making
//! sound:
//!
//! - [`pitch`] - Pitch name parsing and 12-TET frequency resolution
//! - [`score`] - Bar-time arrangements and their frame-accurate expansion
//! - [`arrangement`] - The compiled-in reference arrangement
//!
//! # Example
//!
//! ```
//! use scorebake_score::{Arrangement, PitchTable};
//!
//! let score = Arrangement::reference().build_score(44100).unwrap();
//! let pitches = PitchTable::for_score(&score).unwrap();
//!
//! assert_eq!(score.tracks.len(), 4);
//! assert!(pitches.len() > 0);
//! ```

pub mod arrangement;
pub mod error;
pub mod pitch;
pub mod score;

// Re-export main types at crate root
pub use error::{ScoreError, ScoreResult};
pub use pitch::{frequency_of, parse_pitch_name, PitchTable, A4_FREQUENCY};
pub use score::{one_bar_frame, Arrangement, BarNote, Note, Score, Track, BEATS_PER_BAR};
