//! Text reads for inputs that may legitimately be absent

use std::fs;
use std::io::ErrorKind;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
///
/// A missing file is an error here; use [`read_optional_text`] when absence
/// has its own meaning.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content from a file, returning `Ok(None)` if it does not exist.
///
/// Every other failure (permissions, a directory in place of the file,
/// invalid UTF-8) is still reported as [`Error::Io`].
pub fn read_optional_text(path: &NormalizedPath) -> Result<Option<String>> {
    let native_path = path.to_native();
    match fs::read_to_string(&native_path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::trace!(path = %path, "file not present");
            Ok(None)
        }
        Err(e) => Err(Error::io(&native_path, e)),
    }
}
