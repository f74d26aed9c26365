use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use code_scan::{cli, logging, DirectoryScanner};

fn main() -> Result<()> {
    let args = cli::Args::try_parse().unwrap_or_else(|err| cli::exit_on_parse_error(err));
    logging::init();

    let files = DirectoryScanner::new()
        .with_max_files(args.max_files)
        .scan(&args.directory)
        .with_context(|| format!("Cannot scan {}", args.directory.display()))?;

    match write_paths(&files) {
        // Reader went away, e.g. `scan . | head`.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result.context("Failed to write results"),
    }
}

fn write_paths(files: &[String]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for file in files {
        writeln!(stdout, "{file}")?;
    }
    stdout.flush()
}
