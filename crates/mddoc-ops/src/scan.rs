use std::path::Path;

use tracing::{debug, trace};

use crate::chapter::Chapter;
use crate::error::OperationResult;
use crate::fs::read_file_lines;
use crate::heading::chapter_title;
use crate::lines::LineRecord;

/// First pass: collect every level-1 heading across `paths`, in order.
pub fn scan_chapters<P: AsRef<Path>>(paths: &[P]) -> OperationResult<Vec<Chapter>> {
    let mut chapters = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let lines = read_file_lines(path)?;
        let before = chapters.len();
        scan_lines(&lines, &mut chapters);
        trace!(
            path = %path.display(),
            found = chapters.len() - before,
            "scanned content file"
        );
    }
    Ok(chapters)
}

/// Append one chapter per heading in `lines`, continuing the id sequence of `chapters`.
pub fn scan_lines(lines: &[LineRecord], chapters: &mut Vec<Chapter>) {
    for line in lines {
        if let Some(title) = chapter_title(&line.text, line.ending) {
            let chapter = Chapter::new(chapters.len() + 1, title);
            debug!(id = chapter.id, name = %chapter.name, "discovered chapter");
            chapters.push(chapter);
        }
    }
}
