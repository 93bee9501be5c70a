use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

use super::error::CleanerError;

/// Best-effort recursive removal of matched paths.
pub struct Deleter;

impl Deleter {
    /// Remove `path`, recursing into it when it is a directory.
    ///
    /// Returns `Ok(true)` when something was removed and `Ok(false)` when the
    /// path was already gone. Symlinks are removed as links, never followed.
    pub fn remove_all(path: &Path) -> Result<bool, CleanerError> {
        info!("[clean] {}", path.display());

        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(source) => return Err(Self::failed(path, source)),
        };

        let result = if metadata.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };

        match result {
            Ok(()) => Ok(true),
            // Lost a race with another removal
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(Self::failed(path, source)),
        }
    }

    fn failed(path: &Path, source: io::Error) -> CleanerError {
        CleanerError::DeleteFailed {
            path: path.to_path_buf(),
            source,
        }
    }
}
