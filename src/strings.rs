//! String lessons: STRING concatenation and UNSTRING splitting.

use crate::console::Console;
use crate::error::LessonError;
use std::io::{BufRead, Write};

/// Width of the name and surname input fields.
pub const FIELD_WIDTH: usize = 10;
/// Width of the concatenation result field.
pub const RESULT_WIDTH: usize = 20;
/// Width of the split lesson's input field.
pub const SPLIT_INPUT_WIDTH: usize = 20;

/// Keep at most `width` characters.
fn fit(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Outcome of concatenating a surname with a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concatenated {
    pub text: String,
    /// True when the joined text did not fit and was cut.
    pub overflowed: bool,
}

impl Concatenated {
    /// One-based position just past the last character written.
    pub fn pointer(&self) -> usize {
        self.text.chars().count() + 1
    }
}

/// The whole surname followed by the name up to its first space.
pub fn concatenate(name: &str, surname: &str) -> Concatenated {
    let name_part = name.split_whitespace().next().unwrap_or(name);
    let joined = format!("{surname}{name_part}");
    let overflowed = joined.chars().count() > RESULT_WIDTH;
    Concatenated {
        text: fit(&joined, RESULT_WIDTH),
        overflowed,
    }
}

pub fn concat<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), LessonError> {
    let name = fit(&console.prompt("Enter name: ")?, FIELD_WIDTH);
    let surname = fit(&console.prompt("Enter surname: ")?, FIELD_WIDTH);

    let result = concatenate(&name, &surname);
    if result.overflowed {
        console.say("String overflow!")?;
    }
    console.say(format!("Result: {}", result.text))?;
    console.say(format!("Position: {}", result.pointer()))
}

/// First and second whitespace-delimited tokens, empty when missing.
pub fn split_name(input: &str) -> (String, String) {
    let mut tokens = input.split_whitespace();
    let name = tokens.next().unwrap_or_default().to_string();
    let surname = tokens.next().unwrap_or_default().to_string();
    (name, surname)
}

pub fn split<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), LessonError> {
    console.say("Type your name and surname (use space as delimiter)")?;
    let input = fit(&console.prompt("")?, SPLIT_INPUT_WIDTH);

    let (name, surname) = split_name(&input);
    console.say(format!("Name: {name}"))?;
    console.say(format!("Surname: {surname}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn run(lesson: fn(&mut TestConsole) -> Result<(), LessonError>, input: &str) -> String {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        lesson(&mut console).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_concatenate() {
        let r = concatenate("John", "Smith");
        assert_eq!(r.text, "SmithJohn");
        assert!(!r.overflowed);
        assert_eq!(r.pointer(), 10);
    }

    #[test]
    fn test_concatenate_name_stops_at_space() {
        assert_eq!(concatenate("Mary Ann", "Lee").text, "LeeMary");
    }

    #[test]
    fn test_concatenate_blank_name() {
        assert_eq!(concatenate("  ", "Lee").text, "Lee  ");
    }

    #[test]
    fn test_concatenate_overflow() {
        let r = concatenate("ABCDEFGHIJKL", "0123456789");
        assert!(r.overflowed);
        assert_eq!(r.text, "0123456789ABCDEFGHIJ");
        assert_eq!(r.pointer(), 21);
    }

    #[test]
    fn test_concat_lesson() {
        let out = run(concat, "John\nSmith\n");
        assert_eq!(
            out,
            "Enter name: Enter surname: Result: SmithJohn\nPosition: 10\n"
        );
    }

    #[test]
    fn test_concat_lesson_limits_fields() {
        let out = run(concat, "Maximilianus\nWolfeschlegelstein\n");
        assert!(out.contains("Result: WolfeschleMaximilian\n"));
        assert!(!out.contains("String overflow!"));
        assert!(out.ends_with("Position: 21\n"));
    }

    #[test]
    fn test_split_name() {
        assert_eq!(split_name("John Smith"), ("John".into(), "Smith".into()));
        assert_eq!(split_name("  John   Smith  Jr "), ("John".into(), "Smith".into()));
        assert_eq!(split_name("Cher"), ("Cher".into(), String::new()));
        assert_eq!(split_name(""), (String::new(), String::new()));
    }

    #[test]
    fn test_split_lesson() {
        let out = run(split, "John Smith\n");
        assert_eq!(
            out,
            "Type your name and surname (use space as delimiter)\nName: John\nSurname: Smith\n"
        );
    }

    #[test]
    fn test_split_lesson_limits_input() {
        let out = run(split, "Alexandria-Catherine Montgomery\n");
        assert!(out.contains("Name: Alexandria-Catherine\n"));
        assert!(out.ends_with("Surname: \n"));
    }
}
