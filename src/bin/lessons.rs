//! CLI tool to run one of the tutorial lesson programs.
//!
//! Usage:
//!   lessons <LESSON>
//!
//! Interactive lessons read their answers from stdin, one per line.

use clap::Parser;
use cobol_lessons::{Console, Lesson, init_logging, run_lesson};
use std::io::{self, Write};
use tracing::error;

/// Run a COBOL tutorial lesson.
#[derive(Parser)]
#[command(name = "lessons")]
struct Cli {
    /// Lesson to run
    #[arg(value_enum)]
    lesson: Lesson,

    /// Log lesson progress on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    run_lesson(cli.lesson, &mut console);
    if let Err(e) = console.into_output().flush() {
        error!(error = %e, "could not flush output");
    }
}
