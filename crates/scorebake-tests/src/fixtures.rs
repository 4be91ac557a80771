//! Arrangements and generators used by the end-to-end scenarios.

use std::time::Duration;

use rand_pcg::Pcg32;
use scorebake_render::waveform::{triangle, TWO_PI};
use scorebake_render::SampleGenerator;
use scorebake_score::Arrangement;

/// An arrangement with one track holding one note starting at bar 0.
pub fn single_note(tempo: f64, pitch: &'static str, length: f64) -> Arrangement {
    Arrangement::from_tables(tempo, &[&[(pitch, 0.0, length)]])
}

/// Raw triangle samples of a note, before normalization.
pub fn triangle_reference(frequency: f64, sample_rate: u32, len: usize) -> Vec<f64> {
    (0..len)
        .map(|t| triangle(TWO_PI * t as f64 * frequency / sample_rate as f64))
        .collect()
}

/// Generator that sleeps for every sample it produces.
#[derive(Debug, Clone, Copy)]
pub struct SlowGenerator {
    /// Sleep per sample.
    pub delay: Duration,
}

impl SlowGenerator {
    /// Creates a generator sleeping `delay` per sample.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl SampleGenerator for SlowGenerator {
    fn sample(&self, phase: f64, _elapsed: f64, _rng: &mut Pcg32) -> f64 {
        std::thread::sleep(self.delay);
        phase.sin()
    }
}
