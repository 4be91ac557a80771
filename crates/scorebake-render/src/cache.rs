//! Per-(track, pitch) waveform memoization.
//!
//! Repeated notes of the same pitch on the same track share one sample
//! sequence. An entry only ever grows: a longer note extends it with the
//! missing tail, a shorter or equal note reuses the prefix as-is. Random draws
//! made for an entry are therefore replayed, never redrawn.

use std::collections::HashMap;

use rand_pcg::Pcg32;
use serde::Serialize;
use tracing::debug;

use crate::waveform::{SampleGenerator, TWO_PI};

/// Counters describing how much work the cache saved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Distinct (track, pitch) entries.
    pub entries: usize,
    /// Samples synthesized.
    pub generated_samples: usize,
    /// Samples requested in total, including reused ones.
    pub requested_samples: usize,
    /// Lookups served without synthesizing anything.
    pub hits: usize,
    /// Lookups that created or extended an entry.
    pub misses: usize,
}

/// Waveform cache owned by a single render.
#[derive(Debug, Default)]
pub struct WaveformCache {
    entries: HashMap<(usize, &'static str), Vec<f64>>,
    stats: CacheStats,
}

impl WaveformCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns at least `required_len` samples for `(track, pitch)`.
    ///
    /// Frames `[current_len, required_len)` are synthesized with note-relative
    /// index `t`: `phase = 2π · t · frequency / sample_rate`,
    /// `elapsed = t / sample_rate`.
    #[allow(clippy::too_many_arguments)]
    pub fn get<G: SampleGenerator + ?Sized>(
        &mut self,
        track: usize,
        pitch: &'static str,
        required_len: usize,
        generator: &G,
        frequency: f64,
        sample_rate: u32,
        rng: &mut Pcg32,
    ) -> &[f64] {
        let key = (track, pitch);
        if !self.entries.contains_key(&key) {
            self.stats.entries += 1;
        }
        let entry = self.entries.entry(key).or_default();
        self.stats.requested_samples += required_len;

        let cached = entry.len();
        if cached >= required_len {
            self.stats.hits += 1;
        } else {
            let sample_rate = sample_rate as f64;
            entry.reserve(required_len - cached);
            for t in cached..required_len {
                let t = t as f64;
                let phase = TWO_PI * t * frequency / sample_rate;
                entry.push(generator.sample(phase, t / sample_rate, rng));
            }
            self.stats.misses += 1;
            self.stats.generated_samples += required_len - cached;
            debug!(
                track,
                pitch,
                from = cached,
                to = required_len,
                "extended cached waveform"
            );
        }

        entry.as_slice()
    }

    /// Length of the cached sequence for `(track, pitch)`, if any.
    pub fn cached_len(&self, track: usize, pitch: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|((t, p), _)| *t == track && *p == pitch)
            .map(|(_, samples)| samples.len())
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Usage counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
