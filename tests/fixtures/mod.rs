#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Temporary directory tree for scan tests. Removed on drop.
pub struct Tree {
    dir: TempDir,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `size` bytes at `relative`, creating parent directories.
    pub fn file(&self, relative: &str, size: usize) -> &Self {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, vec![b'x'; size]).expect("Failed to write fixture file");
        self
    }

    pub fn dir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.root().join(relative)).expect("Failed to create dir");
        self
    }
}
