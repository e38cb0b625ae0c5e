//! Error types for file access.
//!
//! The analysers themselves never fail; the only errors come from reading
//! the file a user names. This module defines:
//!
//! - The `Error` structure carrying the requested path
//! - The `ErrorImpl` variants for each kind of read failure
//! - Helpful tips shown alongside the error name

pub mod errors;

#[cfg(test)]
mod tests;
