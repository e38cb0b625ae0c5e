//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that splits source text into
//! a flat stream of classified tokens. It handles:
//!
//! - Tokenization through a priority-ordered table of anchored regex rules
//! - Recognition of keywords, identifiers, constants, literals and operators
//! - Byte spans for every emitted token
//! - Optional skipping of `//` and `/* */` comments for whole source files

pub mod lexer;
pub mod tokens;
