use std::{fmt::Write, path::Path};

use crate::{identifiers::identifiers::Language, lexer::tokens::Token};

const CELL_WIDTH: usize = 20;
const RULE_WIDTH: usize = 40;

/// Column order of a token table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    /// `Token  Category`, used for whole files.
    TokenFirst,
    /// `Category  Token`, used for snippets.
    CategoryFirst,
}

fn push_row(table: &mut String, left: &str, right: &str) {
    let _ = writeln!(table, "{:<width$} {:<width$}", left, right, width = CELL_WIDTH);
}

pub fn render_token_table(tokens: &[Token], layout: TableLayout) -> String {
    let mut table = String::new();
    let rule = "-".repeat(RULE_WIDTH);

    table.push_str(match layout {
        TableLayout::TokenFirst => "Token Categories:\n",
        TableLayout::CategoryFirst => "Code Tokens:\n",
    });
    table.push_str(&rule);
    table.push('\n');

    match layout {
        TableLayout::TokenFirst => push_row(&mut table, "Token", "Category"),
        TableLayout::CategoryFirst => push_row(&mut table, "Category", "Token"),
    }
    table.push_str(&rule);
    table.push('\n');

    for token in tokens {
        let category = token.category.label();
        match layout {
            TableLayout::TokenFirst => push_row(&mut table, &token.value, category),
            TableLayout::CategoryFirst => push_row(&mut table, category, &token.value),
        }
    }

    table
}

pub fn render_count(label: &str, path: &Path, count: usize) -> String {
    format!("{} in '{}': {}", label, path.display(), count)
}

/// Numbered list, one word per line, starting at 1.
pub fn render_split(words: &[&str]) -> String {
    let mut list = String::from("Tokens:\n");

    for (index, word) in words.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(list, "{}. {}", index + 1, word);
    }

    list
}

pub fn render_verdict(language: Language, name: &str, valid: bool) -> String {
    if valid {
        format!("'{}' is a VALID {} {}", name, language, language.noun())
    } else {
        format!("'{}' is NOT a valid {} {}", name, language, language.noun())
    }
}
