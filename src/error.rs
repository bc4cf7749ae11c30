//! Error types for istrings operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`ScanError`].
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors that end a run.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Input filename is empty or looks like a flag.
    #[error("Invalid filename \"{0}\"!")]
    InvalidFilename(String),

    #[error("Failed to open \"{}\"", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error getting length of \"{}\"", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Empty file \"{}\"!", path.display())]
    EmptyFile { path: PathBuf },

    #[error("Failed to read \"{}\"", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output file could not be created or truncated.
    #[error("Problems opening output file \"{}\"", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScanError::InvalidFilename("-x".to_string());
        assert_eq!(err.to_string(), "Invalid filename \"-x\"!");

        let err = ScanError::EmptyFile {
            path: PathBuf::from("empty.bin"),
        };
        assert!(err.to_string().contains("empty.bin"));
    }

    #[test]
    fn test_error_includes_system_description() {
        let err = ScanError::Open {
            path: PathBuf::from("missing.bin"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert!(err.to_string().contains("missing.bin"));

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "No such file or directory");

        let chained = format!("{:#}", anyhow::Error::from(err));
        assert!(chained.ends_with(": No such file or directory"));
    }
}
