//! Line-oriented console used by the interactive lessons.
//!
//! Wraps any `BufRead`/`Write` pair so lessons run the same against a
//! terminal, a pipe, or in-memory buffers in tests.

use crate::error::LessonError;
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output.
    pub fn say(&mut self, text: impl AsRef<str>) -> Result<(), LessonError> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Show `label` without a newline, then read one line of input.
    ///
    /// The returned text has its line terminator removed.
    pub fn prompt(&mut self, label: &str) -> Result<String, LessonError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(LessonError::EndOfInput);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    pub fn prompt_int(&mut self, label: &str) -> Result<i64, LessonError> {
        let text = self.prompt(label)?;
        text.trim()
            .parse()
            .map_err(|_| LessonError::InvalidNumber(text))
    }

    pub fn prompt_float(&mut self, label: &str) -> Result<f64, LessonError> {
        let text = self.prompt(label)?;
        text.trim()
            .parse()
            .map_err(|_| LessonError::InvalidNumber(text))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
