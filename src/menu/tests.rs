//! Unit tests for the interactive menu.

use std::io::{Cursor, Write};

use super::menu::{run_menu, write_menu, MenuChoice};
use crate::identifiers::identifiers::Language;

fn run_script(script: &str) -> String {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();

    run_menu(&mut input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_parse_choices() {
    assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AllLines));
    assert_eq!(MenuChoice::parse(" 8 "), Some(MenuChoice::CheckIdentifier(Language::Python)));
    assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
    assert_eq!(MenuChoice::parse("10"), None);
    assert_eq!(MenuChoice::parse(""), None);

    for choice in MenuChoice::ALL {
        assert_eq!(MenuChoice::parse(&choice.key().to_string()), Some(choice));
    }
}

#[test]
fn test_write_menu() {
    let mut output = Vec::new();
    write_menu(&mut output).unwrap();
    let text = String::from_utf8(output).unwrap();

    assert!(text.contains("CODE ANALYSIS TOOLKIT"));
    assert!(text.contains("3. Count comment lines in a C program"));
    assert!(text.contains("0. Exit"));
}

#[test]
fn test_exit() {
    let output = run_script("0\n");

    assert!(output.ends_with("Exiting program. Goodbye!\n"));
}

#[test]
fn test_end_of_input_stops_loop() {
    let output = run_script("");

    assert!(output.contains("Enter your choice (0-9): "));
    assert!(!output.contains("Goodbye"));
}

#[test]
fn test_invalid_choice() {
    let output = run_script("x\n\n0\n");

    assert!(output.contains("Invalid choice. Please enter a number between 0-9."));
    assert!(output.contains("Goodbye"));
}

#[test]
fn test_tokenize_snippet() {
    let output = run_script("6\na==b\n\n0\n");

    assert!(output.contains("Code Tokens:"));
    assert!(output.contains(&format!("{:<20} ==", "operator")));
}

#[test]
fn test_split_string() {
    let output = run_script("5\nhello  big world\n\n0\n");

    assert!(output.contains("1. hello\n2. big\n3. world\n"));
}

#[test]
fn test_identifier_checks() {
    let output = run_script("7\nint\n\n8\nmy_var\n\n9\n$ok\n\n0\n");

    assert!(output.contains("'int' is NOT a valid C identifier"));
    assert!(output.contains("'my_var' is a VALID Python variable name"));
    assert!(output.contains("'$ok' is a VALID Java identifier"));
}

#[test]
fn test_file_choices() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "int a; // one\n\n/* two\nthree */\nint b;\n").unwrap();
    let path = file.path().display().to_string();

    let script = format!("1\n{path}\n\n2\n{path}\n\n3\n{path}\n\n4\n{path}\n\n0\n");
    let output = run_script(&script);

    assert!(output.contains(&format!("Total lines in '{}': 5", path)));
    assert!(output.contains(&format!("Non-empty lines in '{}': 4", path)));
    assert!(output.contains(&format!("Comment lines in '{}': 3", path)));
    assert!(output.contains("Token Categories:"));
    assert!(!output.contains("three"));
}

#[test]
fn test_missing_file_keeps_running() {
    let output = run_script("1\n/no/such/file.c\n\n0\n");

    assert!(output.contains("Error: FileNotFound"));
    assert!(output.contains("-> /no/such/file.c"));
    assert!(output.contains("Goodbye"));
}
