//! Interactive text menu.
//!
//! The loop reads from any `BufRead` and writes to any `Write`, so the
//! binary wires it to stdin/stdout while tests script it in memory.

pub mod menu;

#[cfg(test)]
mod tests;
