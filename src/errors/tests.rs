//! Unit tests for error handling.

use std::path::PathBuf;

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::FileNotFound, PathBuf::from("missing.c"));

    assert_eq!(error.get_error_name(), "FileNotFound");
    assert!(error.is_not_found());
    assert_eq!(error.get_path(), PathBuf::from("missing.c").as_path());
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::FileNotFound, PathBuf::from("missing.c"));
    assert_eq!(error.to_string(), "missing.c: file not found");

    let error = Error::new(
        ErrorImpl::ReadFailed {
            message: "disk on fire".to_string(),
        },
        PathBuf::from("a.c"),
    );
    assert_eq!(error.to_string(), "a.c: read failed: disk on fire");
    assert!(!error.is_not_found());
}

#[test]
fn test_error_names() {
    let path = PathBuf::from("x");

    assert_eq!(Error::new(ErrorImpl::PermissionDenied, path.clone()).get_error_name(), "PermissionDenied");
    assert_eq!(Error::new(ErrorImpl::NotUtf8, path.clone()).get_error_name(), "NotUtf8");
    assert_eq!(
        Error::new(ErrorImpl::ReadFailed { message: String::new() }, path).get_error_name(),
        "ReadFailed"
    );
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::FileNotFound, PathBuf::from("main.c"));

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("main.c")),
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::ReadFailed {
            message: "interrupted".to_string(),
        },
        PathBuf::from("main.c"),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
