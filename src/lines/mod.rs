//! Plain line and word metrics over in-memory text.

pub mod lines;
