//! Error types for record decoding, file reading and the lesson programs.
//!
//! Every `#[error]` message here is the exact text a program prints, so the
//! binaries can write `{err}` straight to stdout.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while decoding or constructing a [`Person`](crate::Person).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The id column is blank or not a non-negative base-10 integer.
    #[error("invalid id field '{0}'")]
    InvalidId(String),

    /// The line is not valid UTF-8, so columns cannot be located.
    #[error("line is not valid UTF-8")]
    InvalidEncoding,

    /// The id does not fit the 3-digit column.
    #[error("id {0} does not fit in {width} digits", width = crate::record::ID_WIDTH)]
    IdOverflow(u32),

    /// A text field is wider than its column.
    #[error("{field} '{value}' exceeds {width} characters")]
    FieldTooLong {
        field: &'static str,
        value: String,
        width: usize,
    },
}

/// Errors that end a sequential file read.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Error: File '{}' not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading file: {0}")]
    Read(#[source] io::Error),

    /// Anything outside reading the input, such as a failed write to stdout.
    #[error("Unexpected error: {0}")]
    Unexpected(#[source] io::Error),
}

/// Errors raised by the interactive lesson programs.
#[derive(Debug, Error)]
pub enum LessonError {
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("EOF when reading a line")]
    EndOfInput,

    #[error("Result too large")]
    Overflow,

    #[error("Cannot divide by zero")]
    DivideByZero,

    #[error(transparent)]
    Io(#[from] io::Error),
}
