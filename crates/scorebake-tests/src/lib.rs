//! scorebake end-to-end test infrastructure
//!
//! Shared fixtures and determinism helpers for the scenarios under `tests/`:
//!
//! - Rendering: arrangement -> normalized stereo buffer
//! - Determinism: a fixed seed yields byte-identical WAV output
//! - Time budget: a slow generator trips the watchdog
//! - Playback: the WAV sink transport rules
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p scorebake-tests
//! ```

pub mod determinism;
pub mod fixtures;

pub use determinism::{compute_hash, verify_determinism, DeterminismResult, DiffInfo};
pub use fixtures::{single_note, triangle_reference, SlowGenerator};
