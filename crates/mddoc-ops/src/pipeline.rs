use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use mddoc_manifest::{ContentStatus, LoadOptions, Manifest};
use tracing::{debug, info};

use crate::assemble::{assemble_document, AssemblyStats};
use crate::chapter::Chapter;
use crate::error::{OperationError, OperationResult};
use crate::fs::atomic_write;
use crate::images::copy_tree;
use crate::report::{Progress, Reporter};
use crate::scan::scan_chapters;

/// Everything a single build needs. Relative paths resolve against `working_dir`.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub manifest_path: PathBuf,
    pub output_dir: PathBuf,
    pub working_dir: PathBuf,
}

impl RunConfig {
    pub fn new(
        manifest_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            output_dir: output_dir.into(),
            working_dir: working_dir.into(),
        }
    }

    /// Build a config rooted at the process working directory.
    pub fn from_current_dir(
        manifest_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> io::Result<Self> {
        Ok(Self::new(manifest_path, output_dir, env::current_dir()?))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.working_dir.join(path)
    }
}

/// What happened to the manifest's image directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageOutcome {
    Copied { files: usize },
    Missing,
    /// Output directory is the working directory; images are already in place.
    InPlace,
}

#[derive(Clone, Debug)]
pub struct RunOutcome {
    pub output_path: PathBuf,
    pub chapters: Vec<Chapter>,
    pub stats: AssemblyStats,
    pub images: ImageOutcome,
}

/// Load the manifest, validate its contents, then scan and assemble the document.
pub fn build_document(
    config: &RunConfig,
    reporter: &mut dyn Reporter,
) -> OperationResult<RunOutcome> {
    let manifest = Manifest::load_with(
        &config.manifest_path,
        LoadOptions::default().with_working_dir(&config.working_dir),
    )?;
    info!(title = %manifest.title, files = manifest.contents.len(), "loaded manifest");

    check_contents(config, &manifest, reporter)?;
    prepare_output_dir(config)?;

    let content_paths: Vec<PathBuf> = manifest
        .content_paths()
        .iter()
        .map(|path| config.resolve(path))
        .collect();
    let chapters = scan_chapters(&content_paths)?;
    debug!(chapters = chapters.len(), "scan pass complete");

    let output_path = config.output_dir.join(&manifest.output_file);
    reporter.report(Progress::Generating {
        title: manifest.title.clone(),
        output: output_path.clone(),
    });
    let assembly = assemble_document(&content_paths, &chapters)?;
    let resolved_output = config.resolve(&output_path);
    atomic_write(&resolved_output, &assembly.document)
        .map_err(OperationError::io(&resolved_output))?;
    debug!(stats = ?assembly.stats, "assembly pass complete");

    let images = copy_images(config, &manifest, reporter)?;

    Ok(RunOutcome {
        output_path,
        chapters,
        stats: assembly.stats,
        images,
    })
}

/// Verify every listed content path is a regular file, stopping at the first that is not.
pub fn check_contents(
    config: &RunConfig,
    manifest: &Manifest,
    reporter: &mut dyn Reporter,
) -> OperationResult<()> {
    reporter.report(Progress::CheckingContents {
        title: manifest.title.clone(),
    });

    for path in manifest.content_paths() {
        reporter.report(Progress::Checking { path: path.clone() });
        match ContentStatus::probe(&config.resolve(&path)) {
            ContentStatus::Ok => reporter.report(Progress::ContentOk),
            ContentStatus::Missing => {
                reporter.report(Progress::ContentMissing);
                return Err(OperationError::ContentMissing { path });
            }
            ContentStatus::NotFile => {
                reporter.report(Progress::ContentNotFile);
                return Err(OperationError::ContentNotFile { path });
            }
        }
    }

    Ok(())
}

fn prepare_output_dir(config: &RunConfig) -> OperationResult<()> {
    let output_dir = config.resolve(&config.output_dir);
    if !output_dir.exists() {
        fs::create_dir_all(&output_dir).map_err(OperationError::io(&output_dir))?;
        debug!(path = %output_dir.display(), "created output directory");
    }
    Ok(())
}

fn copy_images(
    config: &RunConfig,
    manifest: &Manifest,
    reporter: &mut dyn Reporter,
) -> OperationResult<ImageOutcome> {
    let output_dir = config.resolve(&config.output_dir);
    if is_same_dir(&output_dir, &config.working_dir) {
        return Ok(ImageOutcome::InPlace);
    }

    let source = manifest.image_source();
    let resolved_source = config.resolve(&source);
    if !resolved_source.is_dir() {
        reporter.report(Progress::NoImageDirectory { path: source });
        return Ok(ImageOutcome::Missing);
    }

    reporter.report(Progress::CopyingImages {
        directory: manifest.image_root_directory.clone(),
        output_dir: config.output_dir.clone(),
    });
    let files = copy_tree(
        &resolved_source,
        &output_dir.join(&manifest.image_root_directory),
    )?;
    Ok(ImageOutcome::Copied { files })
}

fn is_same_dir(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
