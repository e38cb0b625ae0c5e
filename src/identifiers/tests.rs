//! Unit tests for identifier validation.

use super::identifiers::{
    is_valid_c_identifier, is_valid_java_identifier, is_valid_python_variable, Language,
    C_KEYWORDS, JAVA_KEYWORDS, PYTHON_KEYWORDS,
};

#[test]
fn test_keyword_set_sizes() {
    assert_eq!(C_KEYWORDS.len(), 32);
    assert_eq!(PYTHON_KEYWORDS.len(), 35);
    assert_eq!(JAVA_KEYWORDS.len(), 50);
}

#[test]
fn test_c_identifiers() {
    assert!(is_valid_c_identifier("count"));
    assert!(is_valid_c_identifier("_private"));
    assert!(is_valid_c_identifier("x1"));
    assert!(is_valid_c_identifier("bool"));

    assert!(!is_valid_c_identifier(""));
    assert!(!is_valid_c_identifier("1x"));
    assert!(!is_valid_c_identifier("my-var"));
    assert!(!is_valid_c_identifier("int"));
    assert!(!is_valid_c_identifier("register"));
    assert!(!is_valid_c_identifier("$cash"));
    assert!(!is_valid_c_identifier("name\n"));
}

#[test]
fn test_python_variables() {
    assert!(is_valid_python_variable("snake_case"));
    assert!(is_valid_python_variable("print"));
    assert!(is_valid_python_variable("none"));

    assert!(!is_valid_python_variable("None"));
    assert!(!is_valid_python_variable("lambda"));
    assert!(!is_valid_python_variable("await"));
    assert!(!is_valid_python_variable("2fast"));
    assert!(!is_valid_python_variable("with space"));
}

#[test]
fn test_java_identifiers() {
    assert!(is_valid_java_identifier("$cash"));
    assert!(is_valid_java_identifier("a$b"));
    assert!(is_valid_java_identifier("String"));

    assert!(!is_valid_java_identifier("class"));
    assert!(!is_valid_java_identifier("goto"));
    assert!(!is_valid_java_identifier("9lives"));
    assert!(!is_valid_java_identifier("a.b"));
}

#[test]
fn test_language_dispatch() {
    assert!(!Language::C.is_valid_identifier("while"));
    assert!(Language::Python.is_valid_identifier("switch"));
    assert!(!Language::Java.is_valid_identifier("switch"));
    assert!(Language::Java.is_valid_identifier("$"));

    assert_eq!(Language::Python.to_string(), "Python");
    assert_eq!(Language::Python.noun(), "variable name");
    assert!(Language::C.keywords().contains("auto"));
}
