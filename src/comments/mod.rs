//! Comment line classification.
//!
//! Counts the physical lines of C-like source that are touched by a
//! comment, tracking whether the scan is inside a `/* */` block.

pub mod comments;
