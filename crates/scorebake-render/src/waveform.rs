//! The per-track waveform library.
//!
//! A waveform maps `(phase, elapsed)` to one sample, where `phase` is the
//! note-relative phase in radians (`2π · t · frequency / sample_rate`) and
//! `elapsed` is the note-relative time in seconds. Phase restarts at 0 for
//! every note.

use std::f64::consts::PI;

use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;

/// 2π constant for phase calculations.
pub const TWO_PI: f64 = 2.0 * PI;

/// Frequency ratio of the second supersaw ramp (+0.5%).
pub const SUPERSAW_DETUNE: f64 = 1.005;

/// Decay rate of the noise envelope `1 / (rate · t + 1)`.
pub const NOISE_DECAY_RATE: f64 = 64.0;

/// Decay rate of the jittered sine envelope.
pub const SINE_DECAY_RATE: f64 = 32.0;

/// Common trait for per-sample generators.
pub trait SampleGenerator {
    /// Produces the sample at `phase` radians, `elapsed` seconds into a note.
    ///
    /// `rng` is the track's random stream; deterministic generators ignore it.
    fn sample(&self, phase: f64, elapsed: f64, rng: &mut Pcg32) -> f64;
}

/// The fixed waveform set, one entry per track of the arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Two detuned rising ramps, averaged.
    Supersaw,
    /// Symmetric triangle.
    Triangle,
    /// White noise under a fast hyperbolic decay.
    DecayingNoise,
    /// Sine with a little noise on top, under a slower hyperbolic decay.
    DecayingSine,
}

impl Waveform {
    /// Generator for track `i` is `LIBRARY[i]`.
    pub const LIBRARY: [Waveform; 4] = [
        Waveform::Supersaw,
        Waveform::Triangle,
        Waveform::DecayingNoise,
        Waveform::DecayingSine,
    ];

    /// Returns the generator assigned to a track.
    pub fn for_track(track_index: usize) -> Option<Waveform> {
        Self::LIBRARY.get(track_index).copied()
    }

    /// Returns true if the waveform draws random numbers.
    pub fn is_stochastic(&self) -> bool {
        matches!(self, Waveform::DecayingNoise | Waveform::DecayingSine)
    }

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Waveform::Supersaw => "supersaw",
            Waveform::Triangle => "triangle",
            Waveform::DecayingNoise => "decaying_noise",
            Waveform::DecayingSine => "decaying_sine",
        }
    }
}

impl SampleGenerator for Waveform {
    fn sample(&self, phase: f64, elapsed: f64, rng: &mut Pcg32) -> f64 {
        match self {
            Waveform::Supersaw => supersaw(phase),
            Waveform::Triangle => triangle(phase),
            Waveform::DecayingNoise => {
                bipolar_noise(rng) * decay_envelope(NOISE_DECAY_RATE, elapsed)
            }
            Waveform::DecayingSine => {
                (phase.sin() + bipolar_noise(rng) / 4.0) * decay_envelope(SINE_DECAY_RATE, elapsed)
            }
        }
    }
}

/// Rising ramp: `[0, 2π)` maps linearly onto `[-1, 1)`.
#[inline]
pub fn ramp(phase: f64) -> f64 {
    phase.rem_euclid(TWO_PI) / PI - 1.0
}

/// Average of a ramp at `phase` and one at `phase * 1.005`.
#[inline]
pub fn supersaw(phase: f64) -> f64 {
    (ramp(phase) + ramp(phase * SUPERSAW_DETUNE)) / 2.0
}

/// Triangle: -1 → 1 over `[0, π)`, 1 → -1 over `[π, 2π)`.
#[inline]
pub fn triangle(phase: f64) -> f64 {
    let p = phase.rem_euclid(TWO_PI);
    if p < PI {
        2.0 / PI * p - 1.0
    } else {
        -2.0 / PI * p + 3.0
    }
}

/// Hyperbolic decay `1 / (rate · elapsed + 1)`.
#[inline]
pub fn decay_envelope(rate: f64, elapsed: f64) -> f64 {
    1.0 / (rate * elapsed + 1.0)
}

/// Uniform value in `[-1, 1)`.
#[inline]
fn bipolar_noise(rng: &mut Pcg32) -> f64 {
    rng.gen::<f64>() * 2.0 - 1.0
}
