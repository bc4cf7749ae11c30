//! Acceptance filter: keep strings that contain a long enough letter run.
//!
//! Plain `strings` output is dominated by short fragments of code and
//! tables that happen to be printable. Requiring a contiguous run of
//! letters (or underscores) weeds most of those out while keeping
//! identifiers, messages and paths.

use crate::classify::is_word_byte;

/// Length of the longest contiguous run of letters/underscores in `s`.
///
/// Returns 0 when `s` has no such byte, including for the empty string.
pub fn letter_run_length(s: &str) -> usize {
    let mut longest = 0usize;
    let mut current = 0usize;

    for &b in s.as_bytes() {
        if is_word_byte(b) {
            current += 1;
        } else {
            longest = longest.max(current);
            current = 0;
        }
    }

    longest.max(current)
}

/// Whether `s` passes the filter for the given threshold.
///
/// A threshold of zero or below accepts every string, including ones with
/// no letters at all.
pub fn accept_string(s: &str, min_sequence: i64) -> bool {
    let run = i64::try_from(letter_run_length(s)).unwrap_or(i64::MAX);
    run >= min_sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_run_length_basic() {
        assert_eq!(letter_run_length("ab"), 2);
        assert_eq!(letter_run_length("cdefg"), 5);
        assert_eq!(letter_run_length("hij"), 3);
    }

    #[test]
    fn test_letter_run_length_underscore_counts() {
        assert_eq!(letter_run_length("foo_bar"), 7);
        assert_eq!(letter_run_length("__"), 2);
    }

    #[test]
    fn test_letter_run_length_picks_longest() {
        assert_eq!(letter_run_length("ab1abcd2abc"), 4);
        assert_eq!(letter_run_length("x.y.zzzzzz"), 6);
        assert_eq!(letter_run_length("longest first 12"), 7);
    }

    #[test]
    fn test_letter_run_length_no_letters() {
        assert_eq!(letter_run_length(""), 0);
        assert_eq!(letter_run_length("12345"), 0);
        assert_eq!(letter_run_length("!@#$ %^&*"), 0);
    }

    #[test]
    fn test_accept_default_threshold() {
        assert!(accept_string("cdefg", 4));
        assert!(accept_string("abcd", 4));
        assert!(!accept_string("abc", 4));
        assert!(!accept_string("ab cd ef gh", 4));
    }

    #[test]
    fn test_accept_zero_threshold_takes_everything() {
        assert!(accept_string("12345", 0));
        assert!(!accept_string("12345", 4));
        assert!(accept_string("", 0));
    }

    #[test]
    fn test_accept_negative_threshold() {
        assert!(accept_string("...", -1));
        assert!(accept_string("", i64::MIN));
    }

    #[test]
    fn test_accept_huge_threshold() {
        assert!(!accept_string("abcdefghijklmnopqrstuvwxyz", i64::MAX));
    }
}
