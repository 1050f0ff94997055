//! Arithmetic lessons: ADD, SUBTRACT, MULTIPLY, DIVIDE and COMPUTE.
//!
//! Each lesson prompts for its operands, then prints the result. Integer
//! lessons use `i64` and report overflow instead of wrapping.

use crate::console::Console;
use crate::error::LessonError;
use std::io::{BufRead, Write};

const FIRST: &str = "Enter number 1: ";
const SECOND: &str = "Enter number 2: ";

fn read_pair<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(i64, i64), LessonError> {
    let a = console.prompt_int(FIRST)?;
    let b = console.prompt_int(SECOND)?;
    Ok((a, b))
}

pub fn add<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), LessonError> {
    let (a, b) = read_pair(console)?;
    let result = a.checked_add(b).ok_or(LessonError::Overflow)?;
    console.say(format!("Result : {result}"))
}

/// Subtracts the first number from the second.
pub fn subtract<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), LessonError> {
    let (a, b) = read_pair(console)?;
    let result = b.checked_sub(a).ok_or(LessonError::Overflow)?;
    console.say(format!("Result : {result}"))
}

pub fn multiply<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), LessonError> {
    let (a, b) = read_pair(console)?;
    let result = a.checked_mul(b).ok_or(LessonError::Overflow)?;
    console.say(format!("Result : {result}"))
}

/// Integer and decimal division of the first number by the second.
pub fn divide<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), LessonError> {
    let (a, b) = read_pair(console)?;
    if b == 0 {
        return Err(LessonError::DivideByZero);
    }

    let (quotient, remainder) = floor_div_rem(a, b).ok_or(LessonError::Overflow)?;
    console.say("Divide as integers:")?;
    console.say(format!("Result : {quotient}"))?;
    console.say(format!("Reminder : {remainder}"))?;
    console.say("")?;

    let (quotient, remainder) = decimal_div_rem(a, b);
    console.say("Divide as decimals:")?;
    console.say(format!("Result : {quotient:.2}"))?;
    console.say(format!("Reminder : {remainder:.2}"))?;
    console.say("")
}

/// Floored division: the quotient rounds toward negative infinity and the
/// remainder takes the sign of the divisor.
pub fn floor_div_rem(a: i64, b: i64) -> Option<(i64, i64)> {
    let q = a.checked_div(b)?;
    let r = a.checked_rem(b)?;
    if r != 0 && (r < 0) != (b < 0) {
        Some((q - 1, r + b))
    } else {
        Some((q, r))
    }
}

/// Floating-point quotient, and what is left after taking its whole part
/// `b` times.
pub fn decimal_div_rem(a: i64, b: i64) -> (f64, f64) {
    let quotient = a as f64 / b as f64;
    let whole = quotient.trunc() as i128;
    let remainder = i128::from(a) - whole * i128::from(b);
    (quotient, remainder as f64)
}

/// Evaluate `y = ax^2 + bx + c`.
///
/// Only squaring a finite `x` past the float range is an error; overflow in
/// the products or sums yields the IEEE infinity or NaN.
pub fn quadratic(a: f64, b: f64, c: f64, x: f64) -> Result<f64, LessonError> {
    let square = x * x;
    if x.is_finite() && !square.is_finite() {
        return Err(LessonError::Overflow);
    }
    Ok(a * square + b * x + c)
}

/// Two decimal places, with `inf`, `-inf` and `nan` for non-finite values.
fn two_places(y: f64) -> String {
    if y.is_nan() {
        "nan".to_string()
    } else {
        format!("{y:.2}")
    }
}

pub fn compute<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), LessonError> {
    console.say("Calc result of quadratic formula y = ax^2 + bx + c")?;
    let a = console.prompt_float("a = ")?;
    let b = console.prompt_float("b = ")?;
    let c = console.prompt_float("c = ")?;
    let x = console.prompt_float("x = ")?;
    let y = quadratic(a, b, c, x)?;
    console.say(format!("y = {}", two_places(y)))
}
