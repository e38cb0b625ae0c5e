use std::{collections::HashSet, fmt::Display};

use lazy_static::lazy_static;
use regex::Regex;

fn keyword_set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

lazy_static! {
    static ref C_LIKE_NAME: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
    static ref JAVA_NAME: Regex = Regex::new("^[a-zA-Z_$][a-zA-Z0-9_$]*$").unwrap();

    pub static ref C_KEYWORDS: HashSet<&'static str> = keyword_set(&[
        "auto", "break", "case", "char", "const", "continue", "default", "do",
        "double", "else", "enum", "extern", "float", "for", "goto", "if",
        "int", "long", "register", "return", "short", "signed", "sizeof",
        "static", "struct", "switch", "typedef", "union", "unsigned", "void",
        "volatile", "while",
    ]);

    pub static ref PYTHON_KEYWORDS: HashSet<&'static str> = keyword_set(&[
        "False", "None", "True", "and", "as", "assert", "async", "await",
        "break", "class", "continue", "def", "del", "elif", "else", "except",
        "finally", "for", "from", "global", "if", "import", "in", "is",
        "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
        "while", "with", "yield",
    ]);

    pub static ref JAVA_KEYWORDS: HashSet<&'static str> = keyword_set(&[
        "abstract", "assert", "boolean", "break", "byte", "case", "catch",
        "char", "class", "const", "continue", "default", "do", "double",
        "else", "enum", "extends", "final", "finally", "float", "for",
        "goto", "if", "implements", "import", "instanceof", "int",
        "interface", "long", "native", "new", "package", "private",
        "protected", "public", "return", "short", "static", "strictfp",
        "super", "switch", "synchronized", "this", "throw", "throws",
        "transient", "try", "void", "volatile", "while",
    ]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Language {
    C,
    Python,
    Java,
}

impl Language {
    pub fn keywords(&self) -> &'static HashSet<&'static str> {
        match self {
            Language::C => &*C_KEYWORDS,
            Language::Python => &*PYTHON_KEYWORDS,
            Language::Java => &*JAVA_KEYWORDS,
        }
    }

    /// What the language calls a name, as used in verdict messages.
    pub fn noun(&self) -> &'static str {
        match self {
            Language::Python => "variable name",
            Language::C | Language::Java => "identifier",
        }
    }

    pub fn is_valid_identifier(&self, name: &str) -> bool {
        match self {
            Language::C => is_valid_c_identifier(name),
            Language::Python => is_valid_python_variable(name),
            Language::Java => is_valid_java_identifier(name),
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::C => write!(f, "C"),
            Language::Python => write!(f, "Python"),
            Language::Java => write!(f, "Java"),
        }
    }
}

pub fn is_valid_c_identifier(name: &str) -> bool {
    C_LIKE_NAME.is_match(name) && !C_KEYWORDS.contains(name)
}

pub fn is_valid_python_variable(name: &str) -> bool {
    C_LIKE_NAME.is_match(name) && !PYTHON_KEYWORDS.contains(name)
}

/// Java additionally allows `$` anywhere in a name.
pub fn is_valid_java_identifier(name: &str) -> bool {
    JAVA_NAME.is_match(name) && !JAVA_KEYWORDS.contains(name)
}
