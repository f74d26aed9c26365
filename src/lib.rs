//! Code Scan
//!
//! Lists the source files under a directory that are worth handing to a
//! review tool, skipping dependency caches, build output, hidden directories
//! and oversized files.
pub mod cli;
pub mod discovery;
pub mod error;
pub mod logging;

pub use discovery::{scan, DirectoryScanner, ScanOutcome, ScanStats};
pub use error::{FileStatError, ScanError};
