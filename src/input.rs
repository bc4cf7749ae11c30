//! Loading the input file into memory.

use crate::error::{Result, ScanError};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read the whole of `path` into memory.
///
/// Files reporting a length of zero are rejected. If fewer bytes arrive
/// than the reported length, a warning is logged and the bytes that were
/// read are returned.
pub fn load_file(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let expected = file
        .metadata()
        .map_err(|source| ScanError::Metadata {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    if expected == 0 {
        return Err(ScanError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let data = read_contents(file, expected, path)?;
    tracing::debug!("load_file: {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Read up to `expected` bytes from `reader`.
///
/// A short read is not an error: it is logged as a warning and whatever
/// arrived is returned.
pub(crate) fn read_contents<R: Read>(reader: R, expected: u64, path: &Path) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(usize::try_from(expected).unwrap_or(0));
    reader
        .take(expected)
        .read_to_end(&mut data)
        .map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    if (data.len() as u64) < expected {
        tracing::warn!(
            "Failed to read whole file \"{}\": got {} of {} bytes",
            path.display(),
            data.len(),
            expected
        );
    }

    Ok(data)
}
