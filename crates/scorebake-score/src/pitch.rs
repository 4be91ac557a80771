//! Pitch name parsing and frequency resolution.
//!
//! Pitch names look like `C5`, `F#3` or `Bb-1`: a letter `A`-`G`, an optional
//! `#` or `b`, then a signed octave number. Frequencies use 12-tone equal
//! temperament referenced to A4 = 440 Hz.

use std::collections::HashMap;

use crate::error::{ScoreError, ScoreResult};
use crate::score::Score;

/// Reference frequency of A4 in Hz.
pub const A4_FREQUENCY: f64 = 440.0;

/// Octave of the reference pitch.
const REFERENCE_OCTAVE: i32 = 4;

/// Semitone distance from A for every accepted pitch-class spelling.
const PITCH_CLASS_OFFSETS: [(&str, i32); 17] = [
    ("C", -9),
    ("C#", -8),
    ("Db", -8),
    ("D", -7),
    ("D#", -6),
    ("Eb", -6),
    ("E", -5),
    ("F", -4),
    ("F#", -3),
    ("Gb", -3),
    ("G", -2),
    ("G#", -1),
    ("Ab", -1),
    ("A", 0),
    ("A#", 1),
    ("Bb", 1),
    ("B", 2),
];

/// Parse a pitch name into its semitone offset from A and its octave.
///
/// # Examples
/// ```
/// use scorebake_score::parse_pitch_name;
///
/// assert_eq!(parse_pitch_name("A4").unwrap(), (0, 4));
/// assert_eq!(parse_pitch_name("Db-1").unwrap(), (-8, -1));
/// assert!(parse_pitch_name("H2").is_err());
/// ```
pub fn parse_pitch_name(name: &str) -> ScoreResult<(i32, i32)> {
    let bytes = name.as_bytes();
    match bytes.first() {
        Some(b'A'..=b'G') => {}
        Some(_) => return Err(ScoreError::malformed_pitch(name, "expected a letter A-G")),
        None => return Err(ScoreError::malformed_pitch(name, "empty pitch name")),
    }

    let class_len = match bytes.get(1) {
        Some(b'#') | Some(b'b') => 2,
        _ => 1,
    };
    // Both slices start on ASCII boundaries checked above.
    let (class, octave) = name.split_at(class_len);

    let offset = PITCH_CLASS_OFFSETS
        .iter()
        .find(|(spelling, _)| *spelling == class)
        .map(|(_, offset)| *offset)
        .ok_or_else(|| ScoreError::malformed_pitch(name, "unknown pitch class"))?;

    let digits = octave.strip_prefix('-').unwrap_or(octave);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScoreError::malformed_pitch(
            name,
            "expected a signed integer octave",
        ));
    }
    let octave: i32 = octave
        .parse()
        .map_err(|_| ScoreError::malformed_pitch(name, "octave out of range"))?;

    Ok((offset, octave))
}

/// Resolve a pitch name to its frequency in Hz.
///
/// `frequency = 440 * 2^((offset + 12 * (octave - 4)) / 12)`
///
/// # Examples
/// ```
/// use scorebake_score::frequency_of;
///
/// assert_eq!(frequency_of("A4").unwrap(), 440.0);
/// assert_eq!(frequency_of("A5").unwrap(), 880.0);
/// assert!((frequency_of("C4").unwrap() - 261.626).abs() < 0.001);
/// ```
pub fn frequency_of(name: &str) -> ScoreResult<f64> {
    let (offset, octave) = parse_pitch_name(name)?;
    let semitones = offset as f64 + 12.0 * (octave as f64 - REFERENCE_OCTAVE as f64);
    let frequency = A4_FREQUENCY * 2.0_f64.powf(semitones / 12.0);

    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(ScoreError::malformed_pitch(name, "frequency out of range"));
    }
    Ok(frequency)
}

/// Memoized pitch-name to frequency lookup, scoped to one render.
#[derive(Debug, Clone, Default)]
pub struct PitchTable {
    frequencies: HashMap<String, f64>,
}

impl PitchTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves every distinct pitch in the score up front.
    ///
    /// Fails on the first malformed pitch name.
    pub fn for_score(score: &Score) -> ScoreResult<Self> {
        let mut table = Self::new();
        for note in score.notes() {
            table.resolve(note.pitch)?;
        }
        Ok(table)
    }

    /// Returns the frequency for `name`, parsing it only the first time.
    pub fn resolve(&mut self, name: &str) -> ScoreResult<f64> {
        if let Some(&frequency) = self.frequencies.get(name) {
            return Ok(frequency);
        }
        let frequency = frequency_of(name)?;
        self.frequencies.insert(name.to_string(), frequency);
        Ok(frequency)
    }

    /// Returns an already-resolved frequency.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.frequencies.get(name).copied()
    }

    /// Number of distinct pitches resolved so far.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Returns true if nothing has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}
