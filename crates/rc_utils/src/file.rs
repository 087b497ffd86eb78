//! Whole-file loading.

use std::path::Path;

use tracing::debug;

use crate::error::{Result, UtilError};

/// Read the entire file at `path` into memory.
///
/// # Errors
///
/// Returns [`UtilError::Io`] if the file cannot be opened or read.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| UtilError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), size = data.len(), "loaded file");
    Ok(data)
}

/// Read the entire file at `path` as UTF-8 text.
///
/// # Errors
///
/// Returns [`UtilError::Io`] if the file cannot be read and
/// [`UtilError::InvalidUtf8`] if its contents are not UTF-8.
pub fn load_file_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let data = load_file(path)?;
    String::from_utf8(data).map_err(|_| UtilError::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}
