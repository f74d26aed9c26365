use std::path::{Path, PathBuf};
use thiserror::Error;

/// The scan root could not be used. Fatal for the whole scan.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("root not found: {path}: {source}")]
    RootNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("root is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

impl ScanError {
    pub fn root_not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::RootNotFound {
            path: path.into(),
            source,
        }
    }

    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::RootNotFound { path, .. } | Self::NotADirectory { path } => path,
        }
    }
}
