use crate::error::{ErrorType, IntoResult};
use crate::Result;
use anyhow::Context;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Write a file, replacing whatever was there.
pub(crate) fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, contents)
        .context(format!("Unable to write to {}", path.to_string_lossy()))
        .pub_result(ErrorType::Io)
}

/// Read a file to a `String`. Returns `None` if the file does not exist.
pub(crate) fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e)
            .with_context(|| format!("Failed to read file at {}", path.display()))
            .pub_result(ErrorType::Io),
    }
}

/// Create a directory and all of its parents.
pub(crate) fn make_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .with_context(|| format!("Unable to create directory at {}", path.to_string_lossy()))
        .pub_result(ErrorType::Io)
}

/// Canonicalize `path`, which must exist.
pub(crate) fn canonicalize(path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| {
            format!(
                "Unable to canonicalize the path {}",
                path.to_string_lossy()
            )
        })
        .pub_result(ErrorType::Io)
}
