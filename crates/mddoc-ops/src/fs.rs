use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::Path;

use tempfile::Builder;

use crate::error::{OperationError, OperationResult};
use crate::lines::{read_lines, LineRecord};

/// Read every line of `path`, closing the file before returning.
pub fn read_file_lines(path: &Path) -> OperationResult<Vec<LineRecord>> {
    let file = File::open(path).map_err(OperationError::io(path))?;
    let mut reader = BufReader::new(file);
    read_lines(&mut reader).map_err(OperationError::io(path))
}

/// Replace `path` with `contents` by persisting a fully written sibling temp file.
///
/// The temp file lives next to `path` so the final rename never crosses
/// filesystems; if anything fails before that, the old file is left untouched.
pub fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut staged = Builder::new().prefix(".mddoc").tempfile_in(dir)?;
    staged.write_all(contents.as_bytes())?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn replaces_existing_file_contents() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("doc.md");
        fs::write(&file_path, "stale").unwrap();

        atomic_write(&file_path, "fresh").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "fresh");
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().starts_with(".mddoc"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn parent_that_is_a_file_fails_without_touching_it() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "keep").unwrap();

        let err = atomic_write(&blocker.join("doc.md"), "body").unwrap_err();

        assert_ne!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "keep");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = read_file_lines(&dir.path().join("absent.md")).unwrap_err();
        assert!(matches!(err, OperationError::Io { .. }));
    }
}
