//! Output-only lessons: hello world, the motto and the number formats table.

use crate::console::Console;
use crate::error::LessonError;
use std::io::{BufRead, Write};

pub fn hello<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), LessonError> {
    console.say("Hello world!")
}

pub fn motto<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), LessonError> {
    console.say("GnuCOBOL")
}

/// Values shown in the variables table row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberFormats {
    pub lp: u8,
    pub number: u32,
    pub decimal: f64,
    pub currency: f64,
}

impl Default for NumberFormats {
    fn default() -> Self {
        Self {
            lp: 1,
            number: 3721,
            decimal: -317.21,
            currency: 317.21,
        }
    }
}

impl NumberFormats {
    /// `lp` as 2 digits, `number` right-aligned in 10, `decimal` signed in 10
    /// with 2 places, `currency` as `$` plus 9 columns with 2 places.
    pub fn row(&self) -> String {
        format!(
            "{:02}|{:>10}|{:>+10.2}|${:>9.2}",
            self.lp, self.number, self.decimal, self.currency
        )
    }
}

pub fn variables<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), LessonError> {
    console.say("lp|    number|   decimal|  currency")?;
    console.say("-".repeat(80))?;
    console.say(NumberFormats::default().row())
}
