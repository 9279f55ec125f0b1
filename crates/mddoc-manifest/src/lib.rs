//! Manifest primitives and loader for mddoc.
//!
//! A manifest names the document title, the ordered list of markdown fragments
//! to stitch together, the output file name and the image directory that ships
//! alongside the document. Relative entries are resolved against the directory
//! holding the manifest itself.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Parsed manifest plus the location it was loaded from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Manifest {
    pub title: String,
    pub contents: Vec<PathBuf>,
    pub output_file: PathBuf,
    pub image_root_directory: PathBuf,
    source: PathBuf,
}

/// Serialization format of a manifest file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Toml,
}

impl ManifestFormat {
    /// `.toml` selects TOML; every other extension is treated as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ManifestFormat::Toml,
            _ => ManifestFormat::Yaml,
        }
    }
}

/// Errors surfaced while loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse manifest {path}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("failed to parse manifest {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ManifestError {
    pub fn path(&self) -> &Path {
        match self {
            ManifestError::Io { path, .. }
            | ManifestError::Yaml { path, .. }
            | ManifestError::Toml { path, .. } => path,
        }
    }
}

/// Options controlling how a manifest path is resolved on disk.
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub working_dir: Option<PathBuf>,
}

impl LoadOptions {
    pub fn with_working_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(path.into());
        self
    }
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    title: String,
    contents: Vec<PathBuf>,
    output_file: PathBuf,
    image_root_directory: PathBuf,
}

impl Manifest {
    /// Read and decode the manifest at `path`, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        Self::load_with(path, LoadOptions::default())
    }

    /// Like [`Manifest::load`], but reads a relative `path` from `options.working_dir`.
    ///
    /// The manifest keeps `path` as given, so resolved entries stay relative to the
    /// same base the caller used.
    pub fn load_with(path: impl AsRef<Path>, options: LoadOptions) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let on_disk = match &options.working_dir {
            Some(dir) => dir.join(path),
            None => path.to_path_buf(),
        };
        let contents = fs::read_to_string(&on_disk).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, ManifestFormat::from_path(path), path)
    }

    /// Decode manifest text as if it had been read from `source`.
    pub fn parse(
        contents: &str,
        format: ManifestFormat,
        source: impl Into<PathBuf>,
    ) -> Result<Self, ManifestError> {
        let source = source.into();
        let raw: RawManifest = match format {
            ManifestFormat::Yaml => {
                serde_yaml::from_str(contents).map_err(|err| ManifestError::Yaml {
                    path: source.clone(),
                    source: err,
                })?
            }
            ManifestFormat::Toml => toml::from_str(contents).map_err(|err| ManifestError::Toml {
                path: source.clone(),
                source: err,
            })?,
        };

        Ok(Manifest {
            title: raw.title,
            contents: raw.contents,
            output_file: raw.output_file,
            image_root_directory: raw.image_root_directory,
            source,
        })
    }

    /// Path the manifest was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Directory that relative manifest entries are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.source.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Content fragments resolved against [`Manifest::base_dir`], in manifest order.
    pub fn content_paths(&self) -> Vec<PathBuf> {
        self.contents
            .iter()
            .map(|entry| self.base_dir().join(entry))
            .collect()
    }

    /// Image directory resolved against [`Manifest::base_dir`].
    pub fn image_source(&self) -> PathBuf {
        self.base_dir().join(&self.image_root_directory)
    }
}

/// Result of probing a listed content path on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentStatus {
    Ok,
    Missing,
    NotFile,
}

impl ContentStatus {
    pub fn probe(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => ContentStatus::Ok,
            Ok(_) => ContentStatus::NotFile,
            Err(_) => ContentStatus::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_format_from_extension() {
        assert_eq!(
            ManifestFormat::from_path(Path::new("book.toml")),
            ManifestFormat::Toml
        );
        assert_eq!(
            ManifestFormat::from_path(Path::new("book.TOML")),
            ManifestFormat::Toml
        );
        assert_eq!(
            ManifestFormat::from_path(Path::new("book.yml")),
            ManifestFormat::Yaml
        );
        assert_eq!(
            ManifestFormat::from_path(Path::new("book")),
            ManifestFormat::Yaml
        );
    }

    #[test]
    fn bare_file_name_resolves_against_empty_base() {
        let manifest = Manifest::parse(
            "title: Doc\ncontents: [a.md]\noutput_file: out.md\nimage_root_directory: img\n",
            ManifestFormat::Yaml,
            "book.yml",
        )
        .unwrap();

        assert_eq!(manifest.base_dir(), Path::new(""));
        assert_eq!(manifest.content_paths(), vec![PathBuf::from("a.md")]);
        assert_eq!(manifest.image_source(), PathBuf::from("img"));
    }
}
