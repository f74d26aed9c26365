use std::path::PathBuf;
use thiserror::Error;

/// Size lookup failed for a single file. The scanner treats the file as
/// excluded and keeps going.
#[derive(Error, Debug)]
#[error("failed to stat '{path}': {source}")]
pub struct FileStatError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl FileStatError {
    pub fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}
