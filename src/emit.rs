//! Deduplicating emission of accepted candidates in first-occurrence order.

use crate::types::Candidate;
use crate::validation::accept_string;
use std::collections::HashMap;
use std::io::{self, Write};

/// Accepted candidate values, each distinct value once, in the order of
/// its first occurrence.
///
/// The map is seeded with every distinct value before filtering; the
/// second walk over `candidates` decides acceptance and marks values as
/// emitted so that later duplicates are skipped.
pub fn select_accepted(candidates: &[Candidate], min_sequence: i64) -> Vec<&str> {
    let mut emitted: HashMap<&str, bool> = HashMap::with_capacity(candidates.len());
    for c in candidates {
        emitted.entry(c.value.as_str()).or_insert(false);
    }

    let mut accepted = Vec::new();
    for c in candidates {
        if !accept_string(&c.value, min_sequence) {
            continue;
        }
        if let Some(done) = emitted.get_mut(c.value.as_str()) {
            if !*done {
                *done = true;
                accepted.push(c.value.as_str());
            }
        }
    }

    tracing::debug!(
        "select_accepted: {} of {} candidates ({} distinct) accepted at min={}",
        accepted.len(),
        candidates.len(),
        emitted.len(),
        min_sequence
    );

    accepted
}

/// Write each accepted value on its own line. Returns the number of lines.
pub fn write_accepted<W: Write + ?Sized>(
    out: &mut W,
    candidates: &[Candidate],
    min_sequence: i64,
) -> io::Result<usize> {
    let accepted = select_accepted(candidates, min_sequence);
    for value in &accepted {
        writeln!(out, "{}", value)?;
    }
    Ok(accepted.len())
}
