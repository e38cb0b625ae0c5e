//! Human-readable rendering of analysis results.

pub mod report;
