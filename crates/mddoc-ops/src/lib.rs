//! Scan and assembly pipeline for mddoc.
//!
//! A build runs in two passes over the manifest's content files: the scan pass
//! numbers every level-1 heading, and the assembly pass re-reads the files to
//! anchor those headings and expand `<!-- toc -->` markers into chapter links.

pub mod assemble;
pub mod chapter;
pub mod error;
pub mod fs;
pub mod heading;
pub mod images;
pub mod lines;
pub mod pipeline;
pub mod report;
pub mod scan;

pub use assemble::{assemble_document, Assembler, Assembly, AssemblyStats};
pub use chapter::{Chapter, ChapterIndex};
pub use error::{ExitCode, OperationError, OperationResult};
pub use heading::{chapter_title, is_toc_marker};
pub use pipeline::{build_document, check_contents, ImageOutcome, RunConfig, RunOutcome};
pub use report::{Progress, RecordingReporter, Reporter, SilentReporter};
pub use scan::{scan_chapters, scan_lines};
