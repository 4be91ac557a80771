//! Render entry points and configuration.

use std::time::Duration;

use scorebake_score::Arrangement;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::buffer::AudioBuffer;
use crate::cache::CacheStats;
use crate::error::RenderResult;
use crate::mixer::BufferRenderer;
use crate::normalize::normalize_peak;
use crate::rng::random_seed;
use crate::watchdog::Watchdog;
use crate::waveform::{SampleGenerator, Waveform};

/// Number of output channels. Every channel carries the same mix.
pub const CHANNEL_COUNT: usize = 2;

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Parameters of a single render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Seed for the noise generators. `None` picks a fresh one per render.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

impl RenderConfig {
    /// Creates a config with a random seed.
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            seed: None,
        }
    }

    /// Fixes the seed, making the render reproducible.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE)
    }
}

/// A finished render and what it took to produce it.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// The normalized buffer.
    pub buffer: AudioBuffer,
    /// Seed the noise generators were derived from.
    pub seed: u32,
    /// Peak absolute sample before normalization (0 for a silent render).
    pub peak: f64,
    /// Wall time from score expansion to normalization.
    pub elapsed: Duration,
    /// Number of notes mixed per channel.
    pub note_count: usize,
    /// Waveform cache counters.
    pub cache: CacheStats,
}

/// Renders the built-in arrangement at `sample_rate` into a normalized
/// stereo buffer.
///
/// Noise generators are seeded freshly on every call, so two calls produce
/// different stochastic tracks. Use [`render_with_config`] with a seed for a
/// reproducible result.
pub fn render_arrangement(sample_rate: u32) -> RenderResult<AudioBuffer> {
    render_with_config(&RenderConfig::new(sample_rate)).map(|output| output.buffer)
}

/// Renders the built-in arrangement with the standard waveform library.
pub fn render_with_config(config: &RenderConfig) -> RenderResult<RenderOutput> {
    render_arrangement_with(&Arrangement::reference(), &Waveform::LIBRARY, config)
}

/// Renders any arrangement with one generator per track.
///
/// The watchdog starts before the score is expanded and is checked after every
/// note; on timeout no buffer is returned.
pub fn render_arrangement_with<G: SampleGenerator>(
    arrangement: &Arrangement,
    generators: &[G],
    config: &RenderConfig,
) -> RenderResult<RenderOutput> {
    let watchdog = Watchdog::start();

    let score = arrangement.build_score(config.sample_rate)?;
    let seed = config.seed.unwrap_or_else(random_seed);
    debug!(
        sample_rate = score.sample_rate,
        tracks = score.tracks.len(),
        notes = score.note_count(),
        frames = score.frame_count(),
        seed,
        "score expanded"
    );

    let renderer = BufferRenderer::new(&score, generators, CHANNEL_COUNT, seed)?;
    let (mut buffer, cache) = renderer.render(&watchdog)?;
    let peak = normalize_peak(&mut buffer);
    let elapsed = watchdog.elapsed();

    info!(
        frames = buffer.frame_count(),
        channels = buffer.channel_count(),
        peak,
        ?elapsed,
        "render complete"
    );

    Ok(RenderOutput {
        buffer,
        seed,
        peak,
        elapsed,
        note_count: score.note_count(),
        cache,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use scorebake_score::ScoreError;

    #[test]
    fn test_config_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.seed, None);
        assert_eq!(RenderConfig::new(8000).with_seed(3).seed, Some(3));
    }

    #[test]
    fn test_config_serde() {
        let config: RenderConfig = serde_json::from_str(r#"{"sample_rate": 48000}"#).unwrap();
        assert_eq!(config, RenderConfig::new(48000));
        let json = serde_json::to_string(&config.with_seed(9)).unwrap();
        assert_eq!(json, r#"{"sample_rate":48000,"seed":9}"#);
    }

    #[test]
    fn test_reference_render_shape() {
        let output = render_with_config(&RenderConfig::new(8000).with_seed(1)).unwrap();
        let score = Arrangement::reference().build_score(8000).unwrap();

        assert_eq!(output.buffer.channel_count(), CHANNEL_COUNT);
        assert_eq!(output.buffer.frame_count(), score.frame_count());
        assert_eq!(output.buffer.peak(), 1.0);
        assert!(output.buffer.is_dual_mono());
        assert_eq!(output.seed, 1);
        assert_eq!(output.note_count, 92);
        assert!(output.peak > 0.0);
    }

    #[test]
    fn test_zero_sample_rate_is_rejected() {
        let err = render_arrangement(0).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Score(ScoreError::InvalidSampleRate { rate: 0 })
        ));
    }
}
