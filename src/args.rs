//! Interpretation of the positional command line.
//!
//! The command line is `<input-file> [output-file] [--min=N]` or
//! `-h|--help`. Arguments are matched by position rather than by name, so
//! the front end hands the raw strings over and they are classified here.

use crate::types::DEFAULT_MIN_SEQUENCE;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// What a given command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print usage. `failed` is set when no arguments were given at all.
    Usage { failed: bool },
    /// First argument is empty or starts with `-`.
    InvalidFilename(String),
    Scan {
        input: PathBuf,
        /// `None` means standard output
        output: Option<PathBuf>,
        min_sequence: i64,
    },
}

impl Invocation {
    /// Classify `args` (program name excluded). Arguments need not be
    /// valid UTF-8; only the `--min=` slot is decoded.
    pub fn from_args(args: &[OsString]) -> Self {
        let Some(first) = args.first() else {
            return Invocation::Usage { failed: true };
        };

        if first == "-h" || first == "--help" {
            return Invocation::Usage { failed: false };
        }

        if first.is_empty() || starts_with_hyphen(first) {
            return Invocation::InvalidFilename(first.to_string_lossy().into_owned());
        }

        let output = args
            .get(1)
            .filter(|arg| !starts_with_hyphen(arg))
            .map(PathBuf::from);

        // --min= is only looked for in the last slot of a 2 or 3 argument line
        let flag = match args {
            [_, flag] | [_, _, flag] if starts_with_hyphen(flag) => Some(flag),
            _ => None,
        };
        let min_sequence = flag
            .and_then(|f| f.to_str())
            .and_then(parse_min_flag)
            .unwrap_or(DEFAULT_MIN_SEQUENCE);

        Invocation::Scan {
            input: PathBuf::from(first),
            output,
            min_sequence,
        }
    }
}

fn starts_with_hyphen(arg: &OsStr) -> bool {
    arg.as_encoded_bytes().first() == Some(&b'-')
}

/// Parse `--min=<N>` the way `sscanf("--min=%d")` would: optional leading
/// whitespace, optional sign, then at least one digit. Anything after the
/// digits is ignored. Returns `None` when no number can be read.
pub fn parse_min_flag(arg: &str) -> Option<i64> {
    let rest = arg.strip_prefix("--min=")?;
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');

    let sign_len = usize::from(rest.starts_with(['+', '-']));
    let digits = rest[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }

    // Parsed as i64 rather than the C `int` the flag format comes from, so
    // values past i32 are real thresholds; only i64 overflow falls back.
    rest[..sign_len + digits].parse().ok()
}
