use std::fs;
use std::path::Path;

use crate::discovery::config::{
    CODE_EXTENSION_SET, EXCLUDED_DIR_SET, HIDDEN_MARKER, MAX_FILE_SIZE,
};
use crate::error::FileStatError;

/// Outcome of testing a single file against the inclusion rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileVerdict {
    Include,
    UnknownSuffix,
    TooLarge(u64),
}

impl FileVerdict {
    pub fn is_included(self) -> bool {
        matches!(self, Self::Include)
    }
}

/// True when a directory with this bare name must not be descended into.
///
/// The named set and the hidden marker are checked independently.
pub fn should_exclude_dir(name: &str) -> bool {
    EXCLUDED_DIR_SET.contains(name) || name.starts_with(HIDDEN_MARKER)
}

/// Lower-cased text from the last `.` of `file_name` to its end, dot included.
///
/// A name made only of a suffix, like `.py`, yields that suffix.
pub fn suffix_of(file_name: &str) -> Option<String> {
    file_name
        .rfind('.')
        .map(|idx| file_name[idx..].to_lowercase())
}

pub fn has_code_suffix(file_name: &str) -> bool {
    suffix_of(file_name).is_some_and(|suffix| CODE_EXTENSION_SET.contains(suffix.as_str()))
}

/// Size in bytes, following symlinks.
pub fn file_size(path: &Path) -> Result<u64, FileStatError> {
    fs::metadata(path)
        .map(|metadata| metadata.len())
        .map_err(|e| FileStatError::new(path, e))
}

/// Applies the suffix rule, then the size ceiling. The file is only stat'ed
/// when its suffix is recognized.
pub fn classify_file(path: &Path) -> Result<FileVerdict, FileStatError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    if !has_code_suffix(&file_name) {
        return Ok(FileVerdict::UnknownSuffix);
    }

    let size = file_size(path)?;
    if size > MAX_FILE_SIZE {
        return Ok(FileVerdict::TooLarge(size));
    }

    Ok(FileVerdict::Include)
}

pub fn is_code_file(path: &Path) -> Result<bool, FileStatError> {
    classify_file(path).map(FileVerdict::is_included)
}
