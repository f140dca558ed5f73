use crate::error::{EngineError, Result};
use crate::header::{has_header, with_header};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The header was prepended and the file rewritten.
    Added,
    /// The header text was already somewhere in the file.
    AlreadyPresent,
}

/// Prepend `header` to the file at `path` unless it already contains it.
///
/// `on_added` runs before the rewrite, so a notice is emitted even when the
/// subsequent write fails.
///
/// # Errors
///
/// Returns [`EngineError::FileRead`] if the file cannot be read as UTF-8 text,
/// and [`EngineError::FileWrite`] if it cannot be overwritten.
pub fn process_file<F>(path: &Path, header: &str, on_added: &mut F) -> Result<FileOutcome>
where
    F: FnMut(&Path),
{
    let content = fs::read_to_string(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if has_header(&content, header) {
        log::debug!("License already present in {}", path.display());
        return Ok(FileOutcome::AlreadyPresent);
    }

    on_added(path);
    fs::write(path, with_header(header, &content)).map_err(|e| EngineError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(FileOutcome::Added)
}
