//! CLI tool to print the person records in a fixed-width data file.
//!
//! Usage:
//!   read-persons [persons.txt]
//!
//! Always exits with status 0; problems are reported on stdout.

use clap::Parser;
use cobol_lessons::{DEFAULT_PERSONS_FILE, init_logging, run_reader};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::error;

/// Read person records (44-column fixed-width lines) and display them.
#[derive(Parser)]
#[command(name = "read-persons")]
struct Cli {
    /// Person data file
    #[arg(default_value = DEFAULT_PERSONS_FILE)]
    file: PathBuf,

    /// Log progress and rejected lines on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut stdout = io::stdout().lock();
    run_reader(&cli.file, &mut stdout);
    if let Err(e) = stdout.flush() {
        error!(error = %e, "could not flush output");
    }
}
