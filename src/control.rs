//! Control-flow lessons: IF conditions and PERFORM loops.

use crate::console::Console;
use crate::error::LessonError;
use std::cmp::Ordering;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

/// Range a number must fall in to pass the range check.
pub const VALID_RANGE: RangeInclusive<i64> = 100..=9999;

/// Classification of free-form text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataClass {
    Numeric,
    Alphabetic,
    Mixed,
}

impl DataClass {
    pub fn of(data: &str) -> Self {
        if data.trim().parse::<f64>().is_ok() {
            Self::Numeric
        } else if !data.is_empty() && data.chars().all(char::is_alphabetic) {
            Self::Alphabetic
        } else {
            Self::Mixed
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Alphabetic => "alphabetic",
            Self::Mixed => "mixed or special characters",
        }
    }
}

fn range_line(label: &str, value: i64) -> String {
    let verdict = if VALID_RANGE.contains(&value) {
        "in"
    } else {
        "outside"
    };
    format!(
        "{label} ({value}) is {verdict} valid range [{}-{}]",
        VALID_RANGE.start(),
        VALID_RANGE.end()
    )
}

/// Read two numbers and some text, then print the outcome of each test.
pub fn conditions<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), LessonError> {
    let num1 = console.prompt_int("ENTER number 1: ")?;
    let num2 = console.prompt_int("ENTER number 2: ")?;
    let data = console.prompt("ENTER some data: ")?;

    let relation = match num1.cmp(&num2) {
        Ordering::Greater => "is greater than",
        Ordering::Equal => "is equal to",
        Ordering::Less => "is less than",
    };
    console.say(format!("num1 ({num1}) {relation} num2 ({num2})"))?;

    let sign = match num1.signum() {
        1 => "positive",
        -1 => "negative",
        _ => "zero",
    };
    console.say(format!("num1 ({num1}) is {sign}"))?;

    console.say(format!("data '{data}' is {}", DataClass::of(&data).describe()))?;

    console.say(range_line("num1", num1))?;
    console.say(range_line("num2", num2))?;
    if VALID_RANGE.contains(&num1) && VALID_RANGE.contains(&num2) {
        console.say("Both numbers are in valid range")
    } else {
        console.say("At least one number is outside valid range")
    }
}

/// Inline perform, a paragraph range performed twice, then fall-through
/// of every paragraph in order.
pub fn loops<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), LessonError> {
    const PARAGRAPHS: [&str; 5] = ["A", "B", "C", "D", "E"];

    console.say("HELLO WORLD")?;
    for _ in 0..2 {
        for name in &PARAGRAPHS[1..=3] {
            console.say(format!("{name}-PARAGRAPH"))?;
        }
    }
    console.say("=======")?;
    for name in PARAGRAPHS {
        console.say(format!("{name}-PARAGRAPH"))?;
    }
    Ok(())
}
