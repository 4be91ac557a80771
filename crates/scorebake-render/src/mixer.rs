//! Note accumulation into the shared buffer.

use rand_pcg::Pcg32;
use scorebake_score::{PitchTable, Score};
use tracing::debug;

use crate::buffer::AudioBuffer;
use crate::cache::{CacheStats, WaveformCache};
use crate::error::{RenderError, RenderResult};
use crate::rng::create_track_rng;
use crate::watchdog::Watchdog;
use crate::waveform::SampleGenerator;

/// Mixes every note of a score into a multi-channel buffer.
///
/// Track `i` is played by `generators[i]`. Every channel receives the same
/// mix: notes are added in channel, track, note order, and each note's
/// waveform comes from a per-render [`WaveformCache`].
pub struct BufferRenderer<'a, G> {
    score: &'a Score,
    generators: &'a [G],
    pitches: PitchTable,
    cache: WaveformCache,
    rngs: Vec<Pcg32>,
    channel_count: usize,
}

impl<'a, G: SampleGenerator> BufferRenderer<'a, G> {
    /// Prepares a render: checks the generator count and resolves every pitch.
    ///
    /// Fails with `MalformedPitch` before any sample is produced.
    pub fn new(
        score: &'a Score,
        generators: &'a [G],
        channel_count: usize,
        seed: u32,
    ) -> RenderResult<Self> {
        if generators.len() != score.tracks.len() {
            return Err(RenderError::GeneratorCountMismatch {
                tracks: score.tracks.len(),
                generators: generators.len(),
            });
        }

        let pitches = PitchTable::for_score(score)?;
        let rngs = (0..score.tracks.len())
            .map(|track| create_track_rng(seed, track as u32))
            .collect();

        Ok(Self {
            score,
            generators,
            pitches,
            cache: WaveformCache::new(),
            rngs,
            channel_count,
        })
    }

    /// Renders the full buffer, checking `watchdog` after every note.
    ///
    /// The buffer is returned unnormalized.
    pub fn render(mut self, watchdog: &Watchdog) -> RenderResult<(AudioBuffer, CacheStats)> {
        let frame_count = self.score.frame_count();
        let mut buffer =
            AudioBuffer::new(self.channel_count, frame_count, self.score.sample_rate);

        for channel in 0..self.channel_count {
            for (track_index, track) in self.score.tracks.iter().enumerate() {
                let generator = &self.generators[track_index];
                let rng = &mut self.rngs[track_index];

                for note in &track.notes {
                    let frequency = self.pitches.resolve(note.pitch)?;
                    let wave = self.cache.get(
                        track_index,
                        note.pitch,
                        note.duration_frames,
                        generator,
                        frequency,
                        self.score.sample_rate,
                        rng,
                    );
                    buffer.accumulate(channel, note.start_frame, &wave[..note.duration_frames]);
                    watchdog.check()?;
                }
            }
            debug!(channel, elapsed = ?watchdog.elapsed(), "channel mixed");
        }

        let stats = self.cache.stats();
        debug!(
            entries = stats.entries,
            generated = stats.generated_samples,
            requested = stats.requested_samples,
            "waveform cache statistics"
        );
        Ok((buffer, stats))
    }
}

#[cfg(test)]
mod tests;
