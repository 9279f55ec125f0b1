use std::fs;
use std::path::Path;

use tracing::trace;
use walkdir::WalkDir;

use crate::error::{OperationError, OperationResult};

/// Recursively copy `source` into `destination`, merging with whatever is already there.
///
/// Existing files are overwritten; symlinks are followed and copied as regular
/// files. Returns the number of files copied.
pub fn copy_tree(source: &Path, destination: &Path) -> OperationResult<usize> {
    let mut copied = 0usize;

    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.map_err(|err| OperationError::Walk {
            path: source.to_path_buf(),
            source: err,
        })?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .unwrap_or_else(|_| entry.path());
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(OperationError::io(&target))?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(OperationError::io(parent))?;
        }
        fs::copy(entry.path(), &target).map_err(OperationError::io(entry.path()))?;
        trace!(from = %entry.path().display(), to = %target.display(), "copied image");
        copied += 1;
    }

    Ok(copied)
}
