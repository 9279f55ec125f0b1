use std::path::Path;

use tracing::debug;

use crate::chapter::{Chapter, ChapterIndex};
use crate::error::OperationResult;
use crate::fs::read_file_lines;
use crate::heading::{chapter_title, is_toc_marker};
use crate::lines::{LineEnding, LineRecord};

/// Counters describing what the assembly pass rewrote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssemblyStats {
    pub files: usize,
    pub linked_headings: usize,
    pub unlinked_headings: usize,
    pub toc_markers: usize,
}

/// Merged document text plus the rewrite counters.
#[derive(Clone, Debug)]
pub struct Assembly {
    pub document: String,
    pub stats: AssemblyStats,
}

/// Second pass: re-read `paths` and merge them, anchoring headings and expanding TOC markers.
pub fn assemble_document<P: AsRef<Path>>(
    paths: &[P],
    chapters: &[Chapter],
) -> OperationResult<Assembly> {
    let mut assembler = Assembler::new(chapters);
    for path in paths {
        let lines = read_file_lines(path.as_ref())?;
        assembler.push_file(&lines);
    }
    Ok(assembler.finish())
}

/// Incremental builder for the merged document, fed one content file at a time.
pub struct Assembler<'a> {
    chapters: &'a [Chapter],
    index: ChapterIndex<'a>,
    document: String,
    stats: AssemblyStats,
}

impl<'a> Assembler<'a> {
    pub fn new(chapters: &'a [Chapter]) -> Self {
        Self {
            chapters,
            index: ChapterIndex::new(chapters),
            document: String::new(),
            stats: AssemblyStats::default(),
        }
    }

    /// Append one content file followed by the newline that separates files.
    pub fn push_file(&mut self, lines: &[LineRecord]) {
        for line in lines {
            self.push_line(line);
        }
        self.document.push('\n');
        self.stats.files += 1;
    }

    pub fn finish(self) -> Assembly {
        Assembly {
            document: self.document,
            stats: self.stats,
        }
    }

    fn push_line(&mut self, line: &LineRecord) {
        if is_toc_marker(&line.text) {
            line.write_raw(&mut self.document);
            if line.ending == LineEnding::None {
                self.document.push('\n');
            }
            for chapter in self.chapters {
                self.document.push_str(&chapter.toc_entry());
            }
            self.stats.toc_markers += 1;
            return;
        }

        let Some(title) = chapter_title(&line.text, line.ending) else {
            line.write_raw(&mut self.document);
            return;
        };

        match self.index.resolve(title) {
            Some(chapter) => {
                self.document.push_str(&chapter.anchored_heading());
                self.stats.linked_headings += 1;
            }
            None => {
                debug!(line = line.number, title, "heading has no scanned chapter");
                line.write_raw(&mut self.document);
                self.stats.unlinked_headings += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::read_lines;
    use std::io::Cursor;

    fn lines(text: &str) -> Vec<LineRecord> {
        read_lines(&mut Cursor::new(text)).unwrap()
    }

    #[test]
    fn marker_without_terminator_still_starts_a_new_line() {
        let chapters = vec![Chapter::new(1, "Only")];
        let mut assembler = Assembler::new(&chapters);
        assembler.push_file(&lines("# Only\n<!-- toc -->"));

        let assembly = assembler.finish();
        assert_eq!(
            assembly.document,
            "# <a name=\"chapter-1\"></a>Only\n<!-- toc -->\n1. [Only](#chapter-1)\n\n"
        );
        assert_eq!(assembly.stats.toc_markers, 1);
    }

    #[test]
    fn unknown_heading_passes_through_unchanged() {
        let chapters = vec![Chapter::new(1, "Known")];
        let mut assembler = Assembler::new(&chapters);
        assembler.push_file(&lines("# Known\n# Stranger\r\n"));

        let assembly = assembler.finish();
        assert_eq!(
            assembly.document,
            "# <a name=\"chapter-1\"></a>Known\n# Stranger\r\n\n"
        );
        assert_eq!(assembly.stats.linked_headings, 1);
        assert_eq!(assembly.stats.unlinked_headings, 1);
    }

    #[test]
    fn empty_chapter_list_leaves_marker_alone() {
        let mut assembler = Assembler::new(&[]);
        assembler.push_file(&lines("<!-- toc -->\n"));

        assert_eq!(assembler.finish().document, "<!-- toc -->\n\n");
    }
}
