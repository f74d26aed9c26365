use clap::Parser;
use std::num::IntErrorKind;
use std::path::PathBuf;

/// `scan <directory> [maxFiles]`. There are no flags, so any path is
/// accepted, including one that starts with `-`.
#[derive(Parser, Debug)]
#[command(name = "scan", disable_help_flag = true)]
#[command(about = "List reviewable source files under a directory", long_about = None)]
pub struct Args {
    /// Directory to scan
    #[arg(value_name = "DIRECTORY", allow_hyphen_values = true)]
    pub directory: PathBuf,

    /// Print at most this many paths (unbounded if omitted)
    #[arg(value_name = "MAX_FILES", value_parser = parse_max_files)]
    pub max_files: Option<usize>,
}

/// Positive integer. Values past `usize::MAX` saturate, which is unbounded in
/// practice.
pub fn parse_max_files(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(max_files) => Ok(max_files),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(usize::MAX),
        Err(_) => Err(format!("'{value}' is not a positive integer")),
    }
}

/// Prints the clap error with its usage line to stderr and exits with 1.
pub fn exit_on_parse_error(err: clap::Error) -> ! {
    let _ = err.print();
    std::process::exit(1)
}
