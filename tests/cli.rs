extern crate tempfile;

use std::ffi::OsStr;
use std::io::Write;
use std::process::{Command, Output};

fn run(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_adjlist"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn run_on(input: &str) -> Output { run_on_bytes(input.as_bytes()) }

fn run_on_bytes(input: &[u8]) -> Output {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(input).unwrap();
    file.flush().unwrap();
    run(&[file.path().as_os_str()])
}

fn stdout(output: &Output) -> String { String::from_utf8(output.stdout.clone()).unwrap() }

#[test]
fn test_example_graph() {
    let output = run_on("1 2\n3 1\n2 4\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1: 2 3 \n2: 1 4 \n3: 1 \n4: 2 \n");
}

#[test]
fn test_empty_input() {
    let output = run_on("");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1: \n");
}

#[test]
fn test_garbage_and_duplicates() {
    let output = run_on("3 1 junk\n1 3\n2\n2\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1: 3 3 \n2: 2 2 \n3: 1 1 \n");
}

#[test]
fn test_wrong_argument_count() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());

    let output = run(&[OsStr::new("a.txt"), OsStr::new("b.txt")]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&[dir.path().join("missing.txt").as_os_str()]);
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR"), "{}", stderr);
    assert!(stderr.contains("missing.txt"), "{}", stderr);
}

#[test]
fn test_directory_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&[dir.path().as_os_str()]);
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_utf8_is_skipped() {
    let output = run_on_bytes(b"1 2\n\xff\xfe junk\n3 1\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1: 2 3 \n2: 1 \n3: 1 \n");
}

#[test]
fn test_too_large_id() {
    let output = run_on("1 99999999999999999999 2\n");
    assert_eq!(output.status.code(), Some(4));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_vertex_out_of_range() {
    let output = run_on("1 2\n0 1\n");
    assert_eq!(output.status.code(), Some(5));
    assert!(output.stdout.is_empty());
}
