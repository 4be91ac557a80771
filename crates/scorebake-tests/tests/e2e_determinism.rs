//! Seeded renders are byte-identical; unseeded renders differ in their noise.

use scorebake_render::{render_arrangement, render_with_config, RenderConfig};
use scorebake_tests::{compute_hash, verify_determinism};

fn seeded_wav(seed: u32) -> Vec<u8> {
    render_with_config(&RenderConfig::new(22050).with_seed(seed))
        .unwrap()
        .buffer
        .to_wav()
        .unwrap()
        .wav_data
}

#[test]
fn fixed_seed_is_byte_identical() {
    let result = verify_determinism(|| seeded_wav(12345), 3);
    result.assert_deterministic();
    assert_eq!(result.runs, 3);
}

#[test]
fn seed_is_reported() {
    let output = render_with_config(&RenderConfig::new(8000).with_seed(99)).unwrap();
    assert_eq!(output.seed, 99);

    let replay = render_with_config(&RenderConfig::new(8000).with_seed(output.seed)).unwrap();
    assert!(replay.buffer == output.buffer);
}

#[test]
fn different_seeds_differ() {
    assert_ne!(compute_hash(&seeded_wav(1)), compute_hash(&seeded_wav(2)));
}

#[test]
fn unseeded_renders_differ() {
    let a = render_arrangement(8000).unwrap();
    let b = render_arrangement(8000).unwrap();
    assert_eq!(a.frame_count(), b.frame_count());
    assert!(a != b);
}
