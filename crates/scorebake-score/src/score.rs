//! Bar-time arrangements and their expansion into frame-accurate scores.
//!
//! An [`Arrangement`] describes notes in bars (`start = 2.25` is the second
//! beat of the third bar). [`Arrangement::build_score`] fixes a sample rate and
//! rounds every position to an integer frame, producing a [`Score`].

use serde::Serialize;

use crate::error::{ScoreError, ScoreResult};

/// Beats in one bar of the reference arrangement.
pub const BEATS_PER_BAR: u32 = 4;

/// A note positioned in bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarNote {
    /// Pitch name, e.g. `"C5"`.
    pub pitch: &'static str,
    /// Start position in bars.
    pub start: f64,
    /// Length in bars.
    pub length: f64,
}

impl BarNote {
    /// Creates a bar-time note.
    pub fn new(pitch: &'static str, start: f64, length: f64) -> Self {
        Self {
            pitch,
            start,
            length,
        }
    }
}

impl From<(&'static str, f64, f64)> for BarNote {
    fn from((pitch, start, length): (&'static str, f64, f64)) -> Self {
        Self::new(pitch, start, length)
    }
}

/// A note positioned in sample frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Note {
    /// Pitch name.
    pub pitch: &'static str,
    /// First frame of the note.
    pub start_frame: usize,
    /// Number of frames the note lasts.
    pub duration_frames: usize,
}

impl Note {
    /// One past the last frame the note covers.
    pub fn end_frame(&self) -> usize {
        self.start_frame + self.duration_frames
    }
}

/// An ordered list of notes played by one generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Track {
    /// Notes in source order.
    pub notes: Vec<Note>,
}

/// A frame-accurate score for a fixed sample rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Score {
    /// Sample rate the frame positions were computed for.
    pub sample_rate: u32,
    /// Tempo in beats per minute.
    pub tempo: f64,
    /// Frames in one bar (not rounded).
    pub one_bar_frame: f64,
    /// Tracks in arrangement order.
    pub tracks: Vec<Track>,
}

impl Score {
    /// Iterates over every note of every track.
    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.tracks.iter().flat_map(|track| track.notes.iter())
    }

    /// Total number of notes.
    pub fn note_count(&self) -> usize {
        self.tracks.iter().map(|track| track.notes.len()).sum()
    }

    /// Length of the rendered buffer: the latest note end, or 0 for an empty score.
    pub fn frame_count(&self) -> usize {
        self.notes().map(Note::end_frame).max().unwrap_or(0)
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }
}

/// Frames in one bar: `beats_per_bar * 60 * sample_rate / tempo`.
///
/// # Examples
/// ```
/// use scorebake_score::one_bar_frame;
///
/// assert_eq!(one_bar_frame(4, 44100, 180.0), 58800.0);
/// ```
pub fn one_bar_frame(beats_per_bar: u32, sample_rate: u32, tempo: f64) -> f64 {
    (beats_per_bar * 60) as f64 * sample_rate as f64 / tempo
}

/// A symbolic arrangement: tracks of bar-time notes at a fixed tempo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arrangement {
    /// Tempo in beats per minute.
    pub tempo: f64,
    /// Beats per bar.
    pub beats_per_bar: u32,
    /// Tracks of bar-time notes.
    pub tracks: Vec<Vec<BarNote>>,
}

impl Arrangement {
    /// Creates an arrangement in 4/4 from note tables.
    pub fn from_tables(tempo: f64, tables: &[&[(&'static str, f64, f64)]]) -> Self {
        Self {
            tempo,
            beats_per_bar: BEATS_PER_BAR,
            tracks: tables
                .iter()
                .map(|table| table.iter().copied().map(BarNote::from).collect())
                .collect(),
        }
    }

    /// Keeps only the track at `index`, for rendering tracks in isolation.
    pub fn solo(&self, index: usize) -> Self {
        Self {
            tempo: self.tempo,
            beats_per_bar: self.beats_per_bar,
            tracks: self.tracks.get(index).cloned().into_iter().collect(),
        }
    }

    /// Expands the arrangement into integer frame positions.
    ///
    /// `start_frame = round(one_bar_frame * start)`,
    /// `duration_frames = round(one_bar_frame * length)`.
    pub fn build_score(&self, sample_rate: u32) -> ScoreResult<Score> {
        if sample_rate == 0 {
            return Err(ScoreError::InvalidSampleRate { rate: sample_rate });
        }
        if !self.tempo.is_finite() || self.tempo <= 0.0 {
            return Err(ScoreError::InvalidTempo { tempo: self.tempo });
        }

        let bar = one_bar_frame(self.beats_per_bar, sample_rate, self.tempo);
        let to_frames = |track: usize, index: usize, value: f64| -> ScoreResult<usize> {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoreError::InvalidNoteTime {
                    track,
                    index,
                    value,
                });
            }
            Ok((bar * value).round() as usize)
        };

        let tracks = self
            .tracks
            .iter()
            .enumerate()
            .map(|(track, notes)| {
                let notes = notes
                    .iter()
                    .enumerate()
                    .map(|(index, note)| {
                        Ok(Note {
                            pitch: note.pitch,
                            start_frame: to_frames(track, index, note.start)?,
                            duration_frames: to_frames(track, index, note.length)?,
                        })
                    })
                    .collect::<ScoreResult<Vec<_>>>()?;
                Ok(Track { notes })
            })
            .collect::<ScoreResult<Vec<_>>>()?;

        Ok(Score {
            sample_rate,
            tempo: self.tempo,
            one_bar_frame: bar,
            tracks,
        })
    }
}
