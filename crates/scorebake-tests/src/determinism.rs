//! Byte-level determinism checks for rendered output.

use std::fmt;

/// Outcome of running a render several times.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether every run produced the same bytes.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// BLAKE3 hash of the first run.
    pub hash: String,
    /// First difference found, if any.
    pub diff: Option<DiffInfo>,
}

/// First differing byte between the first run and a later one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the difference (the shorter length on a size mismatch).
    pub offset: usize,
    /// Which run differed.
    pub run_index: usize,
    /// Output sizes of the first and differing run.
    pub sizes: (usize, usize),
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "run {} differs from run 0 at byte {} (sizes {} vs {})",
            self.run_index, self.offset, self.sizes.0, self.sizes.1
        )
    }
}

impl DeterminismResult {
    /// Panics with the first difference if the runs disagreed.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff {
            panic!(
                "Non-deterministic output detected after {} runs (hash {}): {}",
                self.runs, self.hash, diff
            );
        }
    }
}

/// Runs `generate_fn` `runs` times and compares every output with the first.
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference = reference.as_ref();
    let hash = compute_hash(reference);

    for run_index in 1..runs {
        let output = generate_fn();
        let output = output.as_ref();
        if let Some(offset) = first_difference(reference, output) {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                hash,
                diff: Some(DiffInfo {
                    offset,
                    run_index,
                    sizes: (reference.len(), output.len()),
                }),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        hash,
        diff: None,
    }
}

fn first_difference(expected: &[u8], actual: &[u8]) -> Option<usize> {
    expected
        .iter()
        .zip(actual)
        .position(|(e, a)| e != a)
        .or_else(|| (expected.len() != actual.len()).then(|| expected.len().min(actual.len())))
}

/// Compute BLAKE3 hash of data.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}
