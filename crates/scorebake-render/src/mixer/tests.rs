use std::time::Duration;

use pretty_assertions::assert_eq;
use scorebake_score::{Arrangement, ScoreError};

use super::*;
use crate::waveform::{triangle, Waveform, TWO_PI};

const RATE: u32 = 8000;

/// 120 bpm at 8 kHz: one bar is 16000 frames.
fn arrangement(tables: &[&[(&'static str, f64, f64)]]) -> Arrangement {
    Arrangement::from_tables(120.0, tables)
}

fn triangle_wave(frequency: f64, len: usize) -> Vec<f64> {
    (0..len)
        .map(|t| triangle(TWO_PI * t as f64 * frequency / RATE as f64))
        .collect()
}

#[test]
fn test_single_note_is_placed_at_its_start_frame() {
    let score = arrangement(&[&[("A4", 0.25, 0.125)]]).build_score(RATE).unwrap();
    let generators = [Waveform::Triangle];
    let renderer = BufferRenderer::new(&score, &generators, 2, 0).unwrap();
    let (buffer, _) = renderer.render(&Watchdog::start()).unwrap();

    assert_eq!(buffer.frame_count(), 6000);
    let left = buffer.channel(0).unwrap();
    assert!(left[..4000].iter().all(|&s| s == 0.0));
    assert_eq!(&left[4000..], triangle_wave(440.0, 2000).as_slice());
    assert!(buffer.is_dual_mono());
}

#[test]
fn test_overlapping_notes_accumulate() {
    let score = arrangement(&[&[("A4", 0.0, 0.25), ("A4", 0.0, 0.25)]])
        .build_score(RATE)
        .unwrap();
    let generators = [Waveform::Triangle];
    let (buffer, stats) = BufferRenderer::new(&score, &generators, 1, 0)
        .unwrap()
        .render(&Watchdog::start())
        .unwrap();

    let expected: Vec<f64> = triangle_wave(440.0, 4000).iter().map(|s| s * 2.0).collect();
    assert_eq!(buffer.channel(0).unwrap(), expected.as_slice());
    assert_eq!(stats.generated_samples, 4000);
    assert_eq!(stats.hits, 1);
}

#[test]
fn test_tracks_are_summed() {
    let score = arrangement(&[&[("A4", 0.0, 0.125)], &[("A5", 0.0, 0.125)]])
        .build_score(RATE)
        .unwrap();
    let generators = [Waveform::Triangle, Waveform::Triangle];
    let (buffer, stats) = BufferRenderer::new(&score, &generators, 2, 0)
        .unwrap()
        .render(&Watchdog::start())
        .unwrap();

    let a4 = triangle_wave(440.0, 2000);
    let a5 = triangle_wave(880.0, 2000);
    for (i, &sample) in buffer.channel(1).unwrap().iter().enumerate() {
        assert!((sample - (a4[i] + a5[i])).abs() < 1e-12);
    }
    assert_eq!(stats.entries, 2);
}

#[test]
fn test_stochastic_channels_are_identical() {
    let score = arrangement(&[&[("C4", 0.0, 0.25), ("C4", 0.5, 0.125)]])
        .build_score(RATE)
        .unwrap();
    let generators = [Waveform::DecayingNoise];
    let (buffer, _) = BufferRenderer::new(&score, &generators, 2, 11)
        .unwrap()
        .render(&Watchdog::start())
        .unwrap();

    assert!(buffer.is_dual_mono());
    // The shorter repeat replays the first note's prefix.
    let left = buffer.channel(0).unwrap();
    assert_eq!(&left[8000..10000], &left[..2000]);
}

#[test]
fn test_generator_count_must_match() {
    let score = arrangement(&[&[("A4", 0.0, 1.0)], &[("A4", 0.0, 1.0)]])
        .build_score(RATE)
        .unwrap();
    let generators = [Waveform::Triangle];
    let err = BufferRenderer::new(&score, &generators, 2, 0).err().unwrap();
    assert!(matches!(
        err,
        RenderError::GeneratorCountMismatch {
            tracks: 2,
            generators: 1
        }
    ));
}

#[test]
fn test_malformed_pitch_fails_before_rendering() {
    let score = arrangement(&[&[("A4", 0.0, 1.0), ("H4", 1.0, 1.0)]])
        .build_score(RATE)
        .unwrap();
    let generators = [Waveform::Triangle];
    match BufferRenderer::new(&score, &generators, 2, 0) {
        Err(RenderError::Score(ScoreError::MalformedPitch { name, .. })) => assert_eq!(name, "H4"),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("malformed pitch was accepted"),
    }
}

#[test]
fn test_exhausted_watchdog_aborts() {
    let score = arrangement(&[&[("A4", 0.0, 0.125)]]).build_score(RATE).unwrap();
    let generators = [Waveform::Triangle];
    let renderer = BufferRenderer::new(&score, &generators, 2, 0).unwrap();
    let err = renderer
        .render(&Watchdog::with_budget(Duration::ZERO))
        .unwrap_err();
    assert!(err.is_timeout());
}

#[test]
fn test_empty_score_renders_empty_buffer() {
    let score = arrangement(&[]).build_score(RATE).unwrap();
    let generators: [Waveform; 0] = [];
    let (buffer, stats) = BufferRenderer::new(&score, &generators, 2, 0)
        .unwrap()
        .render(&Watchdog::start())
        .unwrap();
    assert_eq!(buffer.channel_count(), 2);
    assert_eq!(buffer.frame_count(), 0);
    assert_eq!(stats, CacheStats::default());
}
