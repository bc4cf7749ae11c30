//! Core types for string extraction.
//!
//! This module defines the data passed between the extraction, filtering
//! and emission stages.

/// Minimum letter run a string needs when no `--min=` is given.
pub const DEFAULT_MIN_SEQUENCE: i64 = 4;

/// A maximal run of printable ASCII found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Offset of the first byte of the run
    pub data_offset: u64,
    /// The run itself; never empty
    pub value: String,
}

impl Candidate {
    pub fn new(data_offset: u64, value: String) -> Self {
        Self { data_offset, value }
    }

    /// Offset one past the last byte of the run.
    pub fn end_offset(&self) -> u64 {
        self.data_offset + self.value.len() as u64
    }
}

/// Options controlling which candidates are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Minimum length of the longest letter run. Zero or negative accepts
    /// everything.
    pub min_sequence: i64,
}

impl ScanOptions {
    pub fn new(min_sequence: i64) -> Self {
        Self { min_sequence }
    }

    pub fn with_min_sequence(mut self, min_sequence: i64) -> Self {
        self.min_sequence = min_sequence;
        self
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SEQUENCE)
    }
}
