//! Lesson catalogue and dispatch.
//!
//! Every lesson runs against a [`Console`]; failures are turned into the
//! message the lesson prints rather than returned to the caller.

use crate::console::Console;
use crate::error::LessonError;
use crate::{arithmetic, basic, control, strings};
use clap::ValueEnum;
use std::io::{BufRead, Write};
use tracing::{debug, error};

/// One runnable lesson program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Lesson {
    /// Print "Hello world!"
    Hello,
    /// Print the GnuCOBOL motto
    Motto,
    /// Show a table of numeric display formats
    Variables,
    /// Add two numbers
    Add,
    /// Subtract the first number from the second
    Subtract,
    /// Multiply two numbers
    Multiply,
    /// Integer and decimal division with remainders
    Divide,
    /// Evaluate y = ax^2 + bx + c
    Compute,
    /// Comparison, sign, class and range conditions
    If,
    /// Paragraph performs and fall-through
    Loops,
    /// Join a surname and a name
    Concat,
    /// Split "name surname" into two fields
    Split,
}

impl Lesson {
    /// Name of the COBOL program this lesson follows.
    pub fn program_name(&self) -> &'static str {
        match self {
            Lesson::Hello => "HELLO-WORLD",
            Lesson::Motto => "MOTTO",
            Lesson::Variables => "VARIABLES",
            Lesson::Add => "ADDING",
            Lesson::Subtract => "SUBSTRACT",
            Lesson::Multiply => "MULTIPLY",
            Lesson::Divide => "DIVIDE",
            Lesson::Compute => "COMPUTE",
            Lesson::If => "IF",
            Lesson::Loops => "LOOPS",
            Lesson::Concat => "CONCATENATION",
            Lesson::Split => "SPLIT",
        }
    }

    fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Lesson::Add | Lesson::Subtract | Lesson::Multiply | Lesson::Divide | Lesson::Compute
        )
    }

    /// The line printed when this lesson fails with `err`.
    pub fn error_message(&self, err: &LessonError) -> String {
        match err {
            LessonError::InvalidNumber(_) if *self == Lesson::If => {
                "Error: Please enter valid numbers for num1 and num2".to_string()
            }
            LessonError::InvalidNumber(_) if self.is_arithmetic() => {
                "Error: Please enter valid numbers".to_string()
            }
            _ => format!("Error: {err}"),
        }
    }

    fn execute<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<(), LessonError> {
        match self {
            Lesson::Hello => basic::hello(console),
            Lesson::Motto => basic::motto(console),
            Lesson::Variables => basic::variables(console),
            Lesson::Add => arithmetic::add(console),
            Lesson::Subtract => arithmetic::subtract(console),
            Lesson::Multiply => arithmetic::multiply(console),
            Lesson::Divide => arithmetic::divide(console),
            Lesson::Compute => arithmetic::compute(console),
            Lesson::If => control::conditions(console),
            Lesson::Loops => control::loops(console),
            Lesson::Concat => strings::concat(console),
            Lesson::Split => strings::split(console),
        }
    }
}

/// Run `lesson`, printing its error message on failure.
///
/// Returns whether the lesson completed without error.
pub fn run_lesson<R: BufRead, W: Write>(lesson: Lesson, console: &mut Console<R, W>) -> bool {
    debug!(program = lesson.program_name(), "starting lesson");
    match lesson.execute(console) {
        Ok(()) => true,
        Err(e) => {
            debug!(program = lesson.program_name(), error = ?e, "lesson failed");
            if let Err(write_err) = console.say(lesson.error_message(&e)) {
                error!(error = %write_err, "could not report lesson failure");
            }
            false
        }
    }
}
