//! Score expansion integration tests.

use pretty_assertions::assert_eq;
use scorebake_score::{frequency_of, one_bar_frame, Arrangement, ScoreError};

#[test]
fn test_frames_match_rounded_bar_positions() {
    let tables: &[&[(&str, f64, f64)]] = &[
        &[("C4", 0.0, 1.0 / 3.0), ("E4", 1.0 / 3.0, 1.0 / 3.0)],
        &[("G2", 0.125, 0.0625), ("G2", 2.5, 1.75)],
    ];

    for tempo in [60.0, 97.5, 120.0, 185.0, 240.0] {
        for sample_rate in [8000, 22050, 44100, 48000, 96000] {
            let arrangement = Arrangement::from_tables(tempo, tables);
            let score = arrangement.build_score(sample_rate).unwrap();
            let bar = one_bar_frame(4, sample_rate, tempo);

            for (track, bar_notes) in score.tracks.iter().zip(&arrangement.tracks) {
                for (note, bar_note) in track.notes.iter().zip(bar_notes) {
                    assert_eq!(note.start_frame, (bar * bar_note.start).round() as usize);
                    assert_eq!(
                        note.duration_frames,
                        (bar * bar_note.length).round() as usize
                    );
                }
            }
        }
    }
}

#[test]
fn test_score_serializes_frame_positions() {
    let score = Arrangement::from_tables(180.0, &[&[("A4", 0.0, 1.0 / 8.0)]])
        .build_score(44100)
        .unwrap();
    let json = serde_json::to_value(&score).unwrap();

    assert_eq!(json["sample_rate"], 44100);
    assert_eq!(json["tracks"][0]["notes"][0]["pitch"], "A4");
    assert_eq!(json["tracks"][0]["notes"][0]["duration_frames"], 7350);
}

#[test]
fn test_malformed_pitch_is_caught_by_resolution_not_expansion() {
    // Expansion only positions notes; pitch names are validated when resolved.
    let score = Arrangement::from_tables(120.0, &[&[("X9", 0.0, 1.0)]])
        .build_score(44100)
        .unwrap();
    let err = frequency_of(score.tracks[0].notes[0].pitch).unwrap_err();
    assert!(matches!(err, ScoreError::MalformedPitch { .. }));
}
