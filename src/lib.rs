//! # istrings - `strings(1)` filtered by letter runs
//!
//! Extracts printable ASCII runs from arbitrary binary data, like the
//! traditional `strings` utility, but keeps only the runs whose longest
//! stretch of letters (`A-Z`, `a-z`, `_`) reaches a minimum length.
//! Each distinct accepted string is reported once, in the order it first
//! appears in the input.
//!
//! ## Background
//!
//! Plain `strings` reports any run of printable bytes above a length
//! cutoff, so opcodes, packed integers and table data that happen to fall
//! in the printable range show up as noise like `H;E@t$`. Real text almost
//! always contains a word, so measuring the longest letter run is a cheap
//! and effective filter.
//!
//! The scan has two phases:
//! 1. Split the input into candidates at every byte that is not printable
//!    ASCII (NUL, CR and LF included).
//! 2. Walk the candidates in file order, emit those that pass the filter,
//!    skipping values that were already emitted.
//!
//! ## Usage
//!
//! ```no_run
//! use istrings::{scan, ScanOptions};
//!
//! let data = std::fs::read("my_binary").unwrap();
//! for s in scan(&data, &ScanOptions::default()) {
//!     println!("{}", s);
//! }
//! ```

pub mod args;
mod classify;
mod emit;
mod error;
mod extraction;
mod input;
mod output;
mod types;
mod validation;

pub use classify::{is_ascii, is_letter, is_print, is_word_byte};
pub use emit::{select_accepted, write_accepted};
pub use error::{Result, ScanError};
pub use extraction::{extract_candidates, is_separator};
pub use input::load_file;
pub use output::open_output;
pub use types::{Candidate, ScanOptions, DEFAULT_MIN_SEQUENCE};
pub use validation::{accept_string, letter_run_length};

use std::io::{self, Write};

/// Extract, filter and deduplicate the strings in `data`.
///
/// Returns each accepted distinct string once, in first-occurrence order.
pub fn scan(data: &[u8], opts: &ScanOptions) -> Vec<String> {
    let candidates = extract_candidates(data);
    select_accepted(&candidates, opts.min_sequence)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Like [`scan`], but writes one string per line to `out`.
///
/// Returns the number of lines written.
pub fn scan_to_writer<W: Write + ?Sized>(
    data: &[u8],
    opts: &ScanOptions,
    out: &mut W,
) -> io::Result<usize> {
    let candidates = extract_candidates(data);
    write_accepted(out, &candidates, opts.min_sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_empty_data() {
        assert!(scan(&[], &ScanOptions::default()).is_empty());
    }

    #[test]
    fn test_scan_pure_binary() {
        let data = &[0x00, 0x01, 0x02, 0x03, 0x80, 0xff, 0x0a, 0x0d];
        assert!(scan(data, &ScanOptions::default()).is_empty());
    }

    #[test]
    fn test_scan_filters_noise() {
        let data = b"\x48\x8b\x45\xf8H;E@t$\x00\x00GetProcAddress\x00\x90\x90";
        assert_eq!(scan(data, &ScanOptions::default()), vec!["GetProcAddress"]);
    }

    #[test]
    fn test_scan_respects_min_sequence() {
        let data = b"abc\x00abcdef\x00";
        assert_eq!(scan(data, &ScanOptions::new(3)), vec!["abc", "abcdef"]);
        assert_eq!(scan(data, &ScanOptions::new(6)), vec!["abcdef"]);
        assert!(scan(data, &ScanOptions::new(7)).is_empty());
    }

    #[test]
    fn test_scan_to_writer_matches_scan() {
        let data = b"hello_world\x00hello_world\x001234\x00goodbye";
        let opts = ScanOptions::default();
        let mut out = Vec::new();
        let n = scan_to_writer(data, &opts, &mut out).unwrap();
        assert_eq!(n, 2);

        let expected: String = scan(data, &opts)
            .iter()
            .map(|s| format!("{}\n", s))
            .collect();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
