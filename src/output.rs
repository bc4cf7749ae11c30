//! Output sink selection.

use crate::error::{Result, ScanError};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Open the sink for accepted strings: the given file (created or
/// truncated) or standard output.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| ScanError::CreateOutput {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
