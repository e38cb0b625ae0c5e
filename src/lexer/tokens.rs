use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    /// Reserved words of the generic C-like dialect the lexer classifies.
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for word in [
            "if", "else", "while", "for", "return", "break", "continue",
            "int", "float", "double", "char", "void", "bool", "true", "false",
            "struct", "typedef", "enum", "union", "const", "static", "extern",
            "switch", "case", "default", "do", "goto", "sizeof", "volatile",
        ] {
            set.insert(word);
        }
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    Keyword,
    Identifier,
    IntegerConstant,
    FloatConstant,
    HexConstant,
    StringLiteral,
    Operator,
    Punctuation,
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Identifier => "identifier",
            Category::IntegerConstant => "integer_constant",
            Category::FloatConstant => "float_constant",
            Category::HexConstant => "hex_constant",
            Category::StringLiteral => "string",
            Category::Operator => "operator",
            Category::Punctuation => "punctuation",
            Category::Other => "other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: Category,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.category, self.value)
    }
}

impl Token {
    pub fn is(&self, category: Category, value: &str) -> bool {
        self.category == category && self.value == value
    }

    pub fn debug(&self) {
        log::trace!("{:?} {:?} at {}..{}", self.category, self.value, self.span.start, self.span.end);
    }
}
