use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::discovery::filter::{classify_file, should_exclude_dir, FileVerdict};
use crate::error::{Result, ScanError};

/// Counters collected during one scan. They never influence the result list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub dirs_pruned: usize,
    pub files_seen: usize,
    pub unknown_suffix: usize,
    pub too_large: usize,
    pub stat_failures: usize,
    pub walk_errors: usize,
    pub non_utf8: usize,
}

#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Canonical form of the root that was walked.
    pub root: PathBuf,
    /// Root-relative, `/`-separated, sorted ascending.
    pub files: Vec<String>,
    pub stats: ScanStats,
}

/// Walks a directory tree and collects the files worth handing to a reviewer.
///
/// Excluded directories are pruned before descent, so nothing below
/// `node_modules/`, `target/` or any dot-directory is ever listed. Symlinked
/// directories are not followed. The walk always covers the whole pruned tree
/// and the bound is applied after sorting, so the first `max_files` paths in
/// lexicographic order are returned no matter how the filesystem orders
/// directory entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryScanner {
    max_files: Option<usize>,
}

impl DirectoryScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_files(mut self, max_files: Option<usize>) -> Self {
        self.max_files = max_files;
        self
    }

    pub fn max_files(&self) -> Option<usize> {
        self.max_files
    }

    pub fn scan(&self, root: &Path) -> Result<Vec<String>> {
        self.scan_with_stats(root).map(|outcome| outcome.files)
    }

    pub fn scan_with_stats(&self, root: &Path) -> Result<ScanOutcome> {
        let root = resolve_root(root)?;
        let mut stats = ScanStats::default();
        let mut files = Vec::new();

        let mut dirs_pruned = 0;
        let walker = WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let keep = keep_entry(entry);
                if !keep {
                    dirs_pruned += 1;
                }
                keep
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    stats.walk_errors += 1;
                    warn!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }
            if entry.path_is_symlink() && entry.path().is_dir() {
                debug!(path = %entry.path().display(), "Not following symlinked directory");
                continue;
            }

            stats.files_seen += 1;
            match classify_file(entry.path()) {
                Ok(FileVerdict::Include) => match relative_path(&root, entry.path()) {
                    Some(relative) => files.push(relative),
                    None => {
                        stats.non_utf8 += 1;
                        warn!(
                            path = %entry.path().display(),
                            "Skipping path that is not valid UTF-8"
                        );
                    }
                },
                Ok(FileVerdict::UnknownSuffix) => stats.unknown_suffix += 1,
                Ok(FileVerdict::TooLarge(size)) => {
                    stats.too_large += 1;
                    debug!(path = %entry.path().display(), size, "Skipping oversized file");
                }
                Err(e) => {
                    stats.stat_failures += 1;
                    debug!(error = %e, "Treating file as excluded");
                }
            }
        }
        stats.dirs_pruned = dirs_pruned;

        files.sort_unstable();
        debug_assert!(files.windows(2).all(|pair| pair[0] != pair[1]));
        if let Some(max_files) = self.max_files {
            files.truncate(max_files);
        }

        info!(
            root = %root.display(),
            included = files.len(),
            seen = stats.files_seen,
            pruned = stats.dirs_pruned,
            too_large = stats.too_large,
            stat_failures = stats.stat_failures,
            non_utf8 = stats.non_utf8,
            "Scan complete"
        );

        Ok(ScanOutcome { root, files, stats })
    }
}

/// Scans `root` with the default rules, returning at most `max_files` paths.
pub fn scan(root: &Path, max_files: Option<usize>) -> Result<Vec<String>> {
    DirectoryScanner::new().with_max_files(max_files).scan(root)
}

fn resolve_root(root: &Path) -> Result<PathBuf> {
    let resolved = root
        .canonicalize()
        .map_err(|e| ScanError::root_not_found(root, e))?;
    if !resolved.is_dir() {
        return Err(ScanError::not_a_directory(resolved));
    }
    Ok(resolved)
}

// The root is never pruned, even when its own name is hidden.
fn keep_entry(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    if should_exclude_dir(&name) {
        debug!(path = %entry.path().display(), "Pruning excluded directory");
        return false;
    }
    true
}

// None when any component is not valid UTF-8; a lossy conversion could map
// two distinct files onto the same string.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts = relative
        .components()
        .map(|component| component.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}
