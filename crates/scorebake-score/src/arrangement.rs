//! The compiled-in reference arrangement.
//!
//! Eight bars at 185 bpm in four tracks. Each table row is
//! `(pitch, start in bars, length in bars)`. Track order matters: track `i`
//! is voiced by waveform `i` of the render library.

use crate::score::Arrangement;

/// Tempo of the reference arrangement in beats per minute.
pub const REFERENCE_TEMPO: f64 = 185.0;

/// Lead line.
pub const MELODY: &[(&str, f64, f64)] = &[
    ("C5", 0.0 + 1.0 / 4.0, 1.0 / 8.0),
    ("C5", 0.0 + 3.0 / 8.0, 1.0 / 8.0),
    ("C5", 0.0 + 2.0 / 4.0, 1.0 / 4.0),
    ("C5", 0.0 + 3.0 / 4.0, 1.0 / 8.0),
    ("C5", 0.0 + 7.0 / 8.0, 3.0 / 8.0),
    ("C5", 1.0 + 1.0 / 4.0, 1.0 / 4.0),
    ("B4", 1.0 + 2.0 / 4.0, 1.0 / 4.0),
    ("A4", 1.0 + 3.0 / 4.0, 1.0 / 4.0),
    ("G4", 2.0, 1.0 / 4.0),
    ("D4", 2.0 + 1.0 / 4.0, 1.0 / 8.0),
    ("D4", 2.0 + 3.0 / 8.0, 3.0 / 8.0),
    ("F4", 2.0 + 3.0 / 4.0, 1.0 / 8.0),
    ("E4", 2.0 + 7.0 / 8.0, 9.0 / 8.0),
    ("C5", 4.0 + 1.0 / 4.0, 1.0 / 8.0),
    ("C5", 4.0 + 3.0 / 8.0, 1.0 / 8.0),
    ("C5", 4.0 + 2.0 / 4.0, 1.0 / 4.0),
    ("C5", 4.0 + 3.0 / 4.0, 1.0 / 8.0),
    ("C5", 4.0 + 7.0 / 8.0, 3.0 / 8.0),
    ("C5", 5.0 + 1.0 / 4.0, 1.0 / 4.0),
    ("B4", 5.0 + 2.0 / 4.0, 1.0 / 4.0),
    ("A4", 5.0 + 3.0 / 4.0, 1.0 / 4.0),
    ("G4", 6.0, 1.0 / 8.0),
    ("G4", 6.0 + 1.0 / 4.0, 1.0 / 8.0),
    ("C5", 6.0 + 3.0 / 8.0, 3.0 / 8.0),
    ("D5", 6.0 + 3.0 / 4.0, 1.0 / 4.0),
    ("E5", 7.0, 1.0 / 2.0),
    ("D5", 7.0 + 2.0 / 4.0, 1.0 / 8.0),
    ("C5", 7.0 + 5.0 / 8.0, 3.0 / 8.0),
];

/// Whole-bar triads: Am, F, G, C, Am, F, G, C.
pub const CHORDS: &[(&str, f64, f64)] = &[
    ("A3", 0.0, 1.0),
    ("C3", 0.0, 1.0),
    ("E3", 0.0, 1.0),
    ("F3", 1.0, 1.0),
    ("A3", 1.0, 1.0),
    ("C3", 1.0, 1.0),
    ("G3", 2.0, 1.0),
    ("B3", 2.0, 1.0),
    ("D3", 2.0, 1.0),
    ("C3", 3.0, 1.0),
    ("E3", 3.0, 1.0),
    ("G3", 3.0, 1.0),
    ("A3", 4.0, 1.0),
    ("C3", 4.0, 1.0),
    ("E3", 4.0, 1.0),
    ("F3", 5.0, 1.0),
    ("A3", 5.0, 1.0),
    ("C3", 5.0, 1.0),
    ("G3", 6.0, 1.0),
    ("B3", 6.0, 1.0),
    ("D3", 6.0, 1.0),
    ("C4", 7.0, 1.0),
    ("E3", 7.0, 1.0),
    ("G3", 7.0, 1.0),
];

/// Backbeat on beats 2 and 4.
pub const SNARE: &[(&str, f64, f64)] = &[
    ("C4", 0.0 + 1.0 / 4.0, 1.0 / 8.0),
    ("C4", 0.0 + 3.0 / 4.0, 1.0 / 8.0),
    ("C4", 1.0 + 1.0 / 4.0, 1.0 / 8.0),
    ("C4", 1.0 + 3.0 / 4.0, 1.0 / 8.0),
    ("C4", 2.0 + 1.0 / 4.0, 1.0 / 8.0),
    ("C4", 2.0 + 3.0 / 4.0, 1.0 / 8.0),
    ("C4", 3.0 + 1.0 / 4.0, 1.0 / 8.0),
    ("C4", 3.0 + 3.0 / 4.0, 1.0 / 8.0),
    ("C4", 4.0 + 1.0 / 4.0, 1.0 / 8.0),
    ("C4", 4.0 + 3.0 / 4.0, 1.0 / 8.0),
    ("C4", 5.0 + 1.0 / 4.0, 1.0 / 8.0),
    ("C4", 5.0 + 3.0 / 4.0, 1.0 / 8.0),
    ("C4", 6.0 + 1.0 / 4.0, 1.0 / 8.0),
    ("C4", 6.0 + 3.0 / 4.0, 1.0 / 8.0),
    ("C4", 7.0 + 1.0 / 4.0, 1.0 / 8.0),
    ("C4", 7.0 + 3.0 / 4.0, 1.0 / 8.0),
];

/// Bass drum, alternating between two one-bar patterns.
pub const KICK: &[(&str, f64, f64)] = &[
    ("A1", 0.0, 1.0 / 8.0),
    ("A1", 0.0 + 2.0 / 4.0, 1.0 / 8.0),
    ("A1", 0.0 + 5.0 / 8.0, 1.0 / 8.0),
    ("A1", 1.0 + 1.0 / 8.0, 1.0 / 8.0),
    ("A1", 1.0 + 2.0 / 4.0, 1.0 / 8.0),
    ("A1", 1.0 + 5.0 / 8.0, 1.0 / 8.0),
    ("A1", 2.0, 1.0 / 8.0),
    ("A1", 2.0 + 2.0 / 4.0, 1.0 / 8.0),
    ("A1", 2.0 + 5.0 / 8.0, 1.0 / 8.0),
    ("A1", 3.0 + 1.0 / 8.0, 1.0 / 8.0),
    ("A1", 3.0 + 2.0 / 4.0, 1.0 / 8.0),
    ("A1", 3.0 + 5.0 / 8.0, 1.0 / 8.0),
    ("A1", 4.0, 1.0 / 8.0),
    ("A1", 4.0 + 2.0 / 4.0, 1.0 / 8.0),
    ("A1", 4.0 + 5.0 / 8.0, 1.0 / 8.0),
    ("A1", 5.0 + 1.0 / 8.0, 1.0 / 8.0),
    ("A1", 5.0 + 2.0 / 4.0, 1.0 / 8.0),
    ("A1", 5.0 + 5.0 / 8.0, 1.0 / 8.0),
    ("A1", 6.0, 1.0 / 8.0),
    ("A1", 6.0 + 2.0 / 4.0, 1.0 / 8.0),
    ("A1", 6.0 + 5.0 / 8.0, 1.0 / 8.0),
    ("A1", 7.0 + 1.0 / 8.0, 1.0 / 8.0),
    ("A1", 7.0 + 2.0 / 4.0, 1.0 / 8.0),
    ("A1", 7.0 + 5.0 / 8.0, 1.0 / 8.0),
];

impl Arrangement {
    /// The compiled-in four-track arrangement: melody, chords, snare, kick.
    pub fn reference() -> Self {
        Self::from_tables(REFERENCE_TEMPO, &[MELODY, CHORDS, SNARE, KICK])
    }
}
