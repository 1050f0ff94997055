//! Sequential reader for person files.
//!
//! Reads one fixed-width record per line, prints each decoded person in
//! display form, and keeps going past lines that fail to decode. Only
//! failing to open or read the file ends the loop early.

use crate::error::{ReadError, RecordError};
use crate::record::Person;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, error, info};

/// Used when no path is given on the command line.
pub const DEFAULT_PERSONS_FILE: &str = "../SampleData/persons.txt";

pub const COMPLETION_MESSAGE: &str = "File reading completed successfully";

/// Counts from one pass over a person file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadSummary {
    /// Lines decoded and printed.
    pub records: usize,
    /// Lines that failed to decode.
    pub warnings: usize,
}

/// Read `path` and write every decoded record to `out`, followed by the
/// completion message.
///
/// The file is closed on every return path.
pub fn read_person_file<W: Write>(path: &Path, out: &mut W) -> Result<ReadSummary, ReadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ReadError::Read(e),
    })?;
    debug!(path = %path.display(), "opened person file");

    let summary = read_persons(BufReader::new(file), out)?;
    writeln!(out, "{COMPLETION_MESSAGE}").map_err(ReadError::Unexpected)?;

    info!(
        path = %path.display(),
        records = summary.records,
        warnings = summary.warnings,
        "person file read"
    );
    Ok(summary)
}

/// Decode every line of `input`, writing a record or a warning per line.
pub fn read_persons<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
) -> Result<ReadSummary, ReadError> {
    let mut summary = ReadSummary::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).map_err(ReadError::Read)? == 0 {
            break;
        }
        line_no += 1;

        let raw = strip_terminator(&buf);
        match decode_line(raw) {
            Ok(person) => {
                writeln!(out, "{person}").map_err(ReadError::Unexpected)?;
                summary.records += 1;
            }
            Err(e) => {
                debug!(line = line_no, error = %e, "could not parse line");
                writeln!(
                    out,
                    "Warning: Could not parse line: {}",
                    String::from_utf8_lossy(raw)
                )
                .map_err(ReadError::Unexpected)?;
                summary.warnings += 1;
            }
        }
    }

    Ok(summary)
}

/// Run a full read, reporting any failure on `out` instead of returning it.
///
/// Returns the summary when the whole file was processed.
pub fn run_reader<W: Write>(path: &Path, out: &mut W) -> Option<ReadSummary> {
    match read_person_file(path, out) {
        Ok(summary) => Some(summary),
        Err(e) => {
            debug!(error = ?e, "person file read failed");
            if let Err(write_err) = writeln!(out, "{e}") {
                error!(error = %write_err, "could not report read failure");
            }
            None
        }
    }
}

fn decode_line(raw: &[u8]) -> Result<Person, RecordError> {
    let line = std::str::from_utf8(raw).map_err(|_| RecordError::InvalidEncoding)?;
    Person::from_line(line)
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|b| *b != b'\n' && *b != b'\r')
        .map_or(0, |i| i + 1);
    &line[..end]
}
