use std::io;
use std::path::PathBuf;

use mddoc_manifest::ManifestError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Failure = 1,
    InvalidManifest = 2,
    ContentMissing = 3,
    ContentNotFile = 4,
    Io = 5,
}

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("content file {path} does not exist")]
    ContentMissing { path: PathBuf },

    #[error("content path {path} is not a regular file")]
    ContentNotFile { path: PathBuf },

    #[error("i/o error on {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl OperationError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| OperationError::Io { path, source }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Manifest(_) => ExitCode::InvalidManifest,
            Self::ContentMissing { .. } => ExitCode::ContentMissing,
            Self::ContentNotFile { .. } => ExitCode::ContentNotFile,
            Self::Io { .. } | Self::Walk { .. } => ExitCode::Io,
        }
    }
}

pub type OperationResult<T> = Result<T, OperationError>;
