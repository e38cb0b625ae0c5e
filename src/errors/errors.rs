use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// A failure to read a source file, tagged with the path that was asked for.
#[derive(Error, Debug, Clone)]
#[error("{}: {internal_error}", .path.display())]
pub struct Error {
    internal_error: ErrorImpl,
    path: PathBuf,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, path: PathBuf) -> Self {
        Error {
            internal_error: error_impl,
            path,
        }
    }

    pub fn get_path(&self) -> &Path {
        &self.path
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::FileNotFound)
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::FileNotFound => "FileNotFound",
            ErrorImpl::PermissionDenied => "PermissionDenied",
            ErrorImpl::NotUtf8 => "NotUtf8",
            ErrorImpl::ReadFailed { .. } => "ReadFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::FileNotFound => ErrorTip::Suggestion(format!(
                "File `{}` not found, paths are relative to the current directory",
                self.path.display()
            )),
            ErrorImpl::PermissionDenied => ErrorTip::Suggestion(format!(
                "File `{}` is not readable, check its permissions",
                self.path.display()
            )),
            ErrorImpl::NotUtf8 => ErrorTip::Suggestion(String::from(
                "Only UTF-8 text files can be analysed",
            )),
            ErrorImpl::ReadFailed { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("file not found")]
    FileNotFound,
    #[error("permission denied")]
    PermissionDenied,
    #[error("file is not valid UTF-8 text")]
    NotUtf8,
    #[error("read failed: {message}")]
    ReadFailed { message: String },
}
