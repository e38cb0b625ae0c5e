use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use crate::{
    comments::comments::count_comment_lines_in,
    display_error,
    identifiers::identifiers::Language,
    lexer::lexer::{tokenize, tokenize_source},
    lines::lines::{count_all_lines, count_non_empty_lines, split_whitespace_tokens},
    read_source,
    report::report::{render_count, render_split, render_token_table, render_verdict, TableLayout},
};

const BANNER_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AllLines,
    NonEmptyLines,
    CommentLines,
    TokenizeFile,
    SplitString,
    TokenizeSnippet,
    CheckIdentifier(Language),
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 10] = [
        MenuChoice::AllLines,
        MenuChoice::NonEmptyLines,
        MenuChoice::CommentLines,
        MenuChoice::TokenizeFile,
        MenuChoice::SplitString,
        MenuChoice::TokenizeSnippet,
        MenuChoice::CheckIdentifier(Language::C),
        MenuChoice::CheckIdentifier(Language::Python),
        MenuChoice::CheckIdentifier(Language::Java),
        MenuChoice::Exit,
    ];

    pub fn parse(choice: &str) -> Option<MenuChoice> {
        match choice.trim() {
            "1" => Some(MenuChoice::AllLines),
            "2" => Some(MenuChoice::NonEmptyLines),
            "3" => Some(MenuChoice::CommentLines),
            "4" => Some(MenuChoice::TokenizeFile),
            "5" => Some(MenuChoice::SplitString),
            "6" => Some(MenuChoice::TokenizeSnippet),
            "7" => Some(MenuChoice::CheckIdentifier(Language::C)),
            "8" => Some(MenuChoice::CheckIdentifier(Language::Python)),
            "9" => Some(MenuChoice::CheckIdentifier(Language::Java)),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn key(&self) -> char {
        match self {
            MenuChoice::AllLines => '1',
            MenuChoice::NonEmptyLines => '2',
            MenuChoice::CommentLines => '3',
            MenuChoice::TokenizeFile => '4',
            MenuChoice::SplitString => '5',
            MenuChoice::TokenizeSnippet => '6',
            MenuChoice::CheckIdentifier(Language::C) => '7',
            MenuChoice::CheckIdentifier(Language::Python) => '8',
            MenuChoice::CheckIdentifier(Language::Java) => '9',
            MenuChoice::Exit => '0',
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MenuChoice::AllLines => "Count all lines in a file",
            MenuChoice::NonEmptyLines => "Count non-empty lines in a file",
            MenuChoice::CommentLines => "Count comment lines in a C program",
            MenuChoice::TokenizeFile => "Tokenize and categorize program file",
            MenuChoice::SplitString => "Tokenize string using spaces",
            MenuChoice::TokenizeSnippet => "Tokenize code snippet",
            MenuChoice::CheckIdentifier(Language::C) => "Check valid C identifier",
            MenuChoice::CheckIdentifier(Language::Python) => "Check valid Python variable name",
            MenuChoice::CheckIdentifier(Language::Java) => "Check valid Java identifier",
            MenuChoice::Exit => "Exit",
        }
    }
}

pub fn write_menu<W: Write>(output: &mut W) -> io::Result<()> {
    let banner = "=".repeat(BANNER_WIDTH);

    writeln!(output, "\n{}", banner)?;
    writeln!(output, "{:^width$}", "CODE ANALYSIS TOOLKIT", width = BANNER_WIDTH)?;
    writeln!(output, "{}", banner)?;
    for choice in MenuChoice::ALL {
        writeln!(output, "{}. {}", choice.key(), choice.description())?;
    }
    writeln!(output, "{}", banner)
}

/// Prints `message` and reads one line. `None` means the input is exhausted.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Asks for a path and, when it reads, renders the file with `render`.
/// Returns `false` once the input is exhausted.
fn with_file<R, W, F>(input: &mut R, output: &mut W, message: &str, render: F) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
    F: FnOnce(&Path, &str) -> String,
{
    let Some(path) = prompt(input, output, message)? else {
        return Ok(false);
    };
    let path = Path::new(path.trim());

    match read_source(path) {
        Ok(text) => writeln!(output, "\n{}", render(path, &text))?,
        Err(error) => {
            writeln!(output)?;
            display_error(&error, output)?;
        }
    }

    Ok(true)
}

fn run_choice<R: BufRead, W: Write>(choice: MenuChoice, input: &mut R, output: &mut W) -> io::Result<bool> {
    match choice {
        MenuChoice::AllLines => with_file(input, output, "Enter file path: ", |path, text| {
            render_count("Total lines", path, count_all_lines(text))
        }),
        MenuChoice::NonEmptyLines => with_file(input, output, "Enter file path: ", |path, text| {
            render_count("Non-empty lines", path, count_non_empty_lines(text))
        }),
        MenuChoice::CommentLines => with_file(input, output, "Enter C file path: ", |path, text| {
            render_count("Comment lines", path, count_comment_lines_in(text))
        }),
        MenuChoice::TokenizeFile => with_file(input, output, "Enter file path: ", |path, text| {
            let tokens = tokenize_source(text);
            if tokens.is_empty() {
                format!("No tokens found in '{}'", path.display())
            } else {
                render_token_table(&tokens, TableLayout::TokenFirst)
            }
        }),
        MenuChoice::SplitString => {
            let Some(text) = prompt(input, output, "Enter string to tokenize: ")? else {
                return Ok(false);
            };
            writeln!(output, "\n{}", render_split(&split_whitespace_tokens(&text)))?;
            Ok(true)
        }
        MenuChoice::TokenizeSnippet => {
            let Some(code) = prompt(input, output, "Enter code snippet:\n")? else {
                return Ok(false);
            };
            writeln!(output, "\n{}", render_token_table(&tokenize(&code), TableLayout::CategoryFirst))?;
            Ok(true)
        }
        MenuChoice::CheckIdentifier(language) => {
            let message = match language {
                Language::Python => "Enter variable name to check: ",
                Language::C | Language::Java => "Enter identifier to check: ",
            };
            let Some(name) = prompt(input, output, message)? else {
                return Ok(false);
            };
            let valid = language.is_valid_identifier(&name);
            writeln!(output, "\n{}", render_verdict(language, &name, valid))?;
            Ok(true)
        }
        MenuChoice::Exit => Ok(false),
    }
}

/// Runs the interactive menu until the user exits or the input ends.
pub fn run_menu<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    loop {
        write_menu(output)?;

        let Some(line) = prompt(input, output, "\nEnter your choice (0-9): ")? else {
            break;
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Exit) => {
                writeln!(output, "Exiting program. Goodbye!")?;
                break;
            }
            Some(choice) => {
                log::debug!("menu choice {:?}", choice);
                if !run_choice(choice, input, output)? {
                    break;
                }
            }
            None => writeln!(output, "\nInvalid choice. Please enter a number between 0-9.")?,
        }

        if prompt(input, output, "\nPress Enter to continue...")?.is_none() {
            break;
        }
    }

    output.flush()
}
