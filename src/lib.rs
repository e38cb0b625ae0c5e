#![allow(clippy::module_inception)]

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

pub mod comments;
pub mod errors;
pub mod identifiers;
pub mod lexer;
pub mod lines;
pub mod macros;
pub mod menu;
pub mod report;

pub use comments::comments::{count_comment_lines, count_comment_lines_in};
pub use identifiers::identifiers::Language;
pub use lexer::{
    lexer::{tokenize, tokenize_source},
    tokens::{Category, Token},
};

extern crate regex;

/// Byte range of a lexeme in the text it was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Reads the whole file at `path` as text.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("read {} bytes from {}", content.len(), path.display());
            Ok(content)
        }
        Err(err) => {
            let error_impl = match err.kind() {
                io::ErrorKind::NotFound => ErrorImpl::FileNotFound,
                io::ErrorKind::PermissionDenied => ErrorImpl::PermissionDenied,
                io::ErrorKind::InvalidData => ErrorImpl::NotUtf8,
                _ => ErrorImpl::ReadFailed {
                    message: err.to_string(),
                },
            };

            log::debug!("failed to read {}: {}", path.display(), err);
            Err(Error::new(error_impl, path.to_path_buf()))
        }
    }
}

pub fn display_error<W: Write>(error: &Error, output: &mut W) -> io::Result<()> {
    /*
        Error: FileNotFound (File `main.c` not found, ...)
        -> main.c
    */

    if let ErrorTip::None = error.get_tip() {
        writeln!(output, "Error: {}", error.get_error_name())?;
    } else {
        writeln!(output, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
    }
    writeln!(output, "-> {}", error.get_path().display())
}
