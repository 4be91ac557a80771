//! scorebake renderer
//!
//! Turns the compiled-in arrangement into a normalized stereo sample buffer.
//!
//! # Overview
//!
//! Rendering runs in one synchronous pass:
//!
//! 1. The arrangement is expanded into frame positions ([`scorebake_score`]).
//! 2. Every distinct pitch is resolved to a frequency.
//! 3. Each note pulls its waveform from a per-render [`WaveformCache`], which
//!    synthesizes only the frames no earlier note of the same track and pitch
//!    has produced yet.
//! 4. Waveforms are summed into every channel of an [`AudioBuffer`] at the
//!    note's start frame. A [`Watchdog`] aborts the render once it has run
//!    for [`TIME_BUDGET`].
//! 5. The buffer is divided by its global peak.
//!
//! # Randomness
//!
//! The noise-based waveforms draw from PCG32 streams, one per track, with
//! seeds derived from the render seed via BLAKE3. A render with a fixed seed
//! is reproducible; [`render_arrangement`] picks a fresh seed every call.
//!
//! # Example
//!
//! ```no_run
//! use scorebake_render::{render_with_config, RenderConfig};
//!
//! let output = render_with_config(&RenderConfig::new(44100).with_seed(7))?;
//! assert_eq!(output.buffer.channel_count(), 2);
//! println!("peak before normalization: {}", output.peak);
//! # Ok::<(), scorebake_render::RenderError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`render`] - Entry points and render configuration
//! - [`waveform`] - The per-track waveform library
//! - [`cache`] - Per-(track, pitch) waveform memoization
//! - [`mixer`] - Note accumulation into the shared buffer
//! - [`normalize`] - Global peak normalization
//! - [`watchdog`] - Wall-clock time budget
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`wav`] - 16-bit PCM WAV encoding

pub mod buffer;
pub mod cache;
pub mod error;
pub mod mixer;
pub mod normalize;
pub mod render;
pub mod rng;
pub mod watchdog;
pub mod wav;
pub mod waveform;

// Re-export main types at crate root
pub use buffer::AudioBuffer;
pub use cache::{CacheStats, WaveformCache};
pub use error::{RenderError, RenderResult};
pub use mixer::BufferRenderer;
pub use normalize::normalize_peak;
pub use render::{
    render_arrangement, render_arrangement_with, render_with_config, RenderConfig, RenderOutput,
    CHANNEL_COUNT, DEFAULT_SAMPLE_RATE,
};
pub use watchdog::{Watchdog, TIME_BUDGET};
pub use wav::WavResult;
pub use waveform::{SampleGenerator, Waveform};
