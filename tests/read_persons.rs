//! End-to-end runs of the `read-persons` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn data_file() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/persons.txt")
}

fn run(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_read-persons"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_reads_sample_file() {
    let output = run(&[data_file().as_path()]);
    assert!(output.status.success());

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "001 John             Doe                      ",
            "002 Jane             Smith                    ",
            "003 Bob              Jones                    ",
            "File reading completed successfully",
        ]
    );
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nonexistent.txt");

    let output = run(&[missing.as_path()]);
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.to_lowercase().contains("not found"), "got {out:?}");
    assert!(!out.contains("completed"));
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn test_bad_line_continues() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("persons.txt");
    fs::write(
        &path,
        "ABCBroken         Record\n001John            Smith\n002Jane\n",
    )
    .unwrap();

    let output = run(&[path.as_path()]);
    assert!(output.status.success());

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "Warning: Could not parse line: ABCBroken         Record"
    );
    assert_eq!(lines[1], "001 John             Smith                    ");
    assert_eq!(lines[2], format!("002 {:<16} {:<25}", "Jane", ""));
    assert_eq!(lines[3], "File reading completed successfully");
}

#[test]
fn test_empty_file() {
    let file = tempfile::NamedTempFile::new().unwrap();

    let output = run(&[file.path()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "File reading completed successfully\n");
}

#[test]
fn test_logs_stay_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_read-persons"))
        .arg("--verbose")
        .arg(data_file())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 4);
}

#[test]
fn test_default_path_without_argument() {
    let root = tempfile::tempdir().unwrap();
    let sample_dir = root.path().join("SampleData");
    let work_dir = root.path().join("work");
    fs::create_dir_all(&sample_dir).unwrap();
    fs::create_dir_all(&work_dir).unwrap();
    fs::copy(data_file(), sample_dir.join("persons.txt")).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_read-persons"))
        .current_dir(&work_dir)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "001 John             Doe                      ",
            "002 Jane             Smith                    ",
            "003 Bob              Jones                    ",
            "File reading completed successfully",
        ]
    );
}
