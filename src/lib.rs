//! # cobol-lessons-rs
//!
//! Introductory COBOL tutorial programs, and a reader for fixed-width
//! person records.
//!
//! ## Overview
//!
//! The centrepiece is the sequential file reader. Each line of a person
//! file is one 44-column record:
//! - **Id**: columns 0-2, a number
//! - **Name**: columns 3-18
//! - **Surname**: columns 19-43
//!
//! Short lines are padded with spaces; lines that fail to decode produce a
//! warning and reading continues.
//!
//! The remaining modules reproduce the classic lesson programs (arithmetic,
//! conditions, loops and string handling) against any `BufRead`/`Write`
//! pair, see [`Lesson`].
//!
//! ## Example
//!
//! ```
//! use cobol_lessons::{Person, read_persons};
//! use std::io::Cursor;
//!
//! let p = Person::from_line("001John            Smith").unwrap();
//! assert_eq!(p.to_string(), "001 John             Smith                    ");
//!
//! let input = "002Jane            Doe\nABC\n";
//! let mut out = Vec::new();
//! let summary = read_persons(Cursor::new(input), &mut out).unwrap();
//! assert_eq!(summary.records, 1);
//! assert_eq!(summary.warnings, 1);
//! ```

pub mod arithmetic;
pub mod basic;
pub mod console;
pub mod control;
pub mod error;
pub mod lesson;
pub mod logging;
pub mod reader;
pub mod record;
pub mod strings;

pub use console::Console;
pub use error::{LessonError, ReadError, RecordError};
pub use lesson::{Lesson, run_lesson};
pub use logging::init_logging;
pub use reader::{
    COMPLETION_MESSAGE, DEFAULT_PERSONS_FILE, ReadSummary, read_person_file, read_persons,
    run_reader,
};
pub use record::{RECORD_WIDTH, Person};
