//! Candidate extraction: split raw bytes into maximal printable ASCII runs.

use crate::classify::{is_ascii, is_print};
use crate::types::Candidate;

/// Bytes that end a run and are dropped from the output.
#[inline]
pub fn is_separator(b: u8) -> bool {
    matches!(b, b'\0' | b'\n' | b'\r') || !is_ascii(b) || !is_print(b)
}

/// Scan `data` for runs of printable ASCII, in file order.
///
/// This mimics the traditional `strings` command without a length cutoff:
/// every non-empty run is returned, and filtering happens later. Separator
/// bytes are not part of any candidate.
pub fn extract_candidates(data: &[u8]) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut current = String::new();
    let mut run_start = 0usize;

    for (i, &b) in data.iter().enumerate() {
        if is_separator(b) {
            if !current.is_empty() {
                candidates.push(Candidate::new(
                    run_start as u64,
                    std::mem::take(&mut current),
                ));
            }
            continue;
        }

        if current.is_empty() {
            run_start = i;
        }
        current.push(char::from(b));
    }

    // Handle run at end of data
    if !current.is_empty() {
        candidates.push(Candidate::new(run_start as u64, current));
    }

    tracing::debug!(
        "extract_candidates: {} candidates from {} bytes",
        candidates.len(),
        data.len()
    );

    candidates
}
