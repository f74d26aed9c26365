pub mod config;
pub mod filter;
pub mod scanner;

pub use filter::{classify_file, is_code_file, should_exclude_dir, FileVerdict};
pub use scanner::{scan, DirectoryScanner, ScanOutcome, ScanStats};
