//! Identifier validation for C, Python and Java.
//!
//! Each check is a pure function of one name against a fixed character
//! pattern and an immutable keyword set.

pub mod identifiers;

#[cfg(test)]
mod tests;
