use std::fmt;
use std::path::PathBuf;

/// Human-readable progress emitted while a document is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    CheckingContents { title: String },
    Checking { path: PathBuf },
    ContentOk,
    ContentMissing,
    ContentNotFile,
    Generating { title: String, output: PathBuf },
    CopyingImages { directory: PathBuf, output_dir: PathBuf },
    NoImageDirectory { path: PathBuf },
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Progress::CheckingContents { title } => {
                write!(f, "Check content files for '{title}'")
            }
            Progress::Checking { path } => write!(f, "  Checking {}", path.display()),
            Progress::ContentOk => f.write_str("    OK"),
            Progress::ContentMissing => f.write_str("    Not exist."),
            Progress::ContentNotFile => f.write_str("    Not file"),
            Progress::Generating { title, output } => {
                write!(f, "Generate '{title}', saved as '{}'", output.display())
            }
            Progress::CopyingImages {
                directory,
                output_dir,
            } => write!(
                f,
                "Copy image directory '{}' to '{}'",
                directory.display(),
                output_dir.display()
            ),
            Progress::NoImageDirectory { path } => {
                write!(f, "No image directory: '{}'", path.display())
            }
        }
    }
}

/// Sink for [`Progress`] events.
pub trait Reporter {
    fn report(&mut self, event: Progress);
}

/// Drops every event.
#[derive(Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&mut self, _event: Progress) {}
}

/// Keeps every event in order, for callers that render or assert on them later.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<Progress>,
}

impl RecordingReporter {
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: Progress) {
        self.events.push(event);
    }
}
