//! Fixed-width person record.
//!
//! Layout of one input line (0-indexed columns, half-open):
//!
//! ```text
//! [0,3)    id       3 digits
//! [3,19)   name     16 characters
//! [19,44)  surname  25 characters
//! ```
//!
//! Columns count characters, not bytes. Short lines are padded with spaces
//! up to [`RECORD_WIDTH`]; anything past column 44 is ignored.

use crate::error::RecordError;
use std::fmt;

pub const ID_WIDTH: usize = 3;
pub const NAME_WIDTH: usize = 16;
pub const SURNAME_WIDTH: usize = 25;

/// Total width of a person record.
pub const RECORD_WIDTH: usize = ID_WIDTH + NAME_WIDTH + SURNAME_WIDTH;

const NAME_START: usize = ID_WIDTH;
const SURNAME_START: usize = NAME_START + NAME_WIDTH;

/// Largest id representable in the id column.
pub const MAX_ID: u16 = 999;

/// One decoded person entry.
///
/// A `Person` always fits the fixed-width layout; there is no way to build
/// one that would overflow a column when written back out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: u16,
    name: String,
    surname: String,
}

impl Person {
    /// Create a person, checking every field against its column width.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        surname: impl Into<String>,
    ) -> Result<Self, RecordError> {
        let id = u16::try_from(id)
            .ok()
            .filter(|id| *id <= MAX_ID)
            .ok_or(RecordError::IdOverflow(id))?;
        let name = check_width("name", name.into(), NAME_WIDTH)?;
        let surname = check_width("surname", surname.into(), SURNAME_WIDTH)?;
        Ok(Self { id, name, surname })
    }

    /// Decode a person from one line of the input file.
    ///
    /// The line should not include its terminator. Fails when the id column
    /// is not a non-negative integer.
    pub fn from_line(line: &str) -> Result<Self, RecordError> {
        let buf = normalize(line);

        let raw_id = field(&buf, 0, ID_WIDTH);
        // A sign is allowed, so `-0` and `-00` still read as zero.
        let id = raw_id
            .parse::<i16>()
            .ok()
            .and_then(|id| u16::try_from(id).ok())
            .ok_or_else(|| RecordError::InvalidId(raw_id.clone()))?;

        Self::new(
            u32::from(id),
            field(&buf, NAME_START, NAME_WIDTH),
            field(&buf, SURNAME_START, SURNAME_WIDTH),
        )
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Encode back into the 44-column input layout (no separators).
    pub fn to_record(&self) -> String {
        format!(
            "{:0id$}{:<name$}{:<surname$}",
            self.id,
            self.name,
            self.surname,
            id = ID_WIDTH,
            name = NAME_WIDTH,
            surname = SURNAME_WIDTH,
        )
    }
}

/// Display form: id zero-padded to 3, name padded to 16, surname padded
/// to 25, separated by single spaces.
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0id$} {:<name$} {:<surname$}",
            self.id,
            self.name,
            self.surname,
            id = ID_WIDTH,
            name = NAME_WIDTH,
            surname = SURNAME_WIDTH,
        )
    }
}

/// Copy the line into a space-filled buffer of exactly `RECORD_WIDTH`.
fn normalize(line: &str) -> [char; RECORD_WIDTH] {
    let mut buf = [' '; RECORD_WIDTH];
    for (slot, c) in buf.iter_mut().zip(line.chars()) {
        *slot = c;
    }
    buf
}

/// Extract a trimmed field from the normalized buffer.
fn field(buf: &[char; RECORD_WIDTH], pos: usize, len: usize) -> String {
    let raw: String = buf[pos..pos + len].iter().collect();
    raw.trim().to_string()
}

fn check_width(field: &'static str, value: String, width: usize) -> Result<String, RecordError> {
    if value.chars().count() > width {
        return Err(RecordError::FieldTooLong {
            field,
            value,
            width,
        });
    }
    Ok(value)
}
