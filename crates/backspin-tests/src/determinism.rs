//! Determinism checks for encoded output.
//!
//! Reversing and encoding the same input must produce byte-identical WAV
//! files on every run.

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the first output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the first output.
    pub hash: String,
    /// First difference found, if any.
    pub diff_info: Option<DiffInfo>,
}

/// The first byte difference found between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the difference, or the shorter length on a size mismatch.
    pub offset: usize,
    /// Byte from the first run, if present.
    pub expected: Option<u8>,
    /// Byte from the differing run, if present.
    pub actual: Option<u8>,
    /// Index of the differing run.
    pub run_index: usize,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.expected, self.actual) {
            (Some(e), Some(a)) => write!(
                f,
                "Difference at byte {}: expected 0x{:02X}, got 0x{:02X} (run {})",
                self.offset, e, a, self.run_index
            ),
            _ => write!(
                f,
                "Length mismatch at byte {} (run {})",
                self.offset, self.run_index
            ),
        }
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// BLAKE3 hex digest of `data`.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Runs `generate_fn` `runs` times and compares every output to the first.
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
        if let Some(diff) = first_difference(reference, output.as_ref(), run_index) {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                output_size: reference.len(),
                hash,
                diff_info: Some(diff),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        output_size: reference.len(),
        hash,
        diff_info: None,
    }
}

fn first_difference(expected: &[u8], actual: &[u8], run_index: usize) -> Option<DiffInfo> {
    if let Some(offset) = expected.iter().zip(actual).position(|(e, a)| e != a) {
        return Some(DiffInfo {
            offset,
            expected: Some(expected[offset]),
            actual: Some(actual[offset]),
            run_index,
        });
    }

    (expected.len() != actual.len()).then(|| DiffInfo {
        offset: expected.len().min(actual.len()),
        expected: expected.get(actual.len()).copied(),
        actual: actual.get(expected.len()).copied(),
        run_index,
    })
}
