use std::{io, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use codekit::{
    comments::comments::count_comment_lines_in,
    identifiers::identifiers::Language,
    lexer::lexer::{tokenize, tokenize_source},
    lines::lines::{count_all_lines, count_non_empty_lines, split_whitespace_tokens},
    menu::menu::run_menu,
    read_source,
    report::report::{render_count, render_split, render_token_table, render_verdict, TableLayout},
};

/// Line counting, comment detection, tokenizing and identifier checks for
/// C-like source code.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Debug)]
enum Command {
    /// Count all lines in a file
    Lines { path: PathBuf },
    /// Count non-empty lines in a file
    NonEmpty { path: PathBuf },
    /// Count comment lines in a C program
    Comments { path: PathBuf },
    /// Tokenize and categorize a program file, skipping comments
    TokenizeFile { path: PathBuf },
    /// Split a string on whitespace
    Split { text: String },
    /// Tokenize a code snippet
    Tokenize { code: String },
    /// Check whether a name is a valid identifier
    Check {
        #[arg(value_enum)]
        language: Language,
        name: String,
    },
    /// Run the interactive menu
    Menu,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Command::Lines { path } => {
                let text = read_source(&path)?;
                println!("{}", render_count("Total lines", &path, count_all_lines(&text)));
            }
            Command::NonEmpty { path } => {
                let text = read_source(&path)?;
                println!("{}", render_count("Non-empty lines", &path, count_non_empty_lines(&text)));
            }
            Command::Comments { path } => {
                let text = read_source(&path)?;
                println!("{}", render_count("Comment lines", &path, count_comment_lines_in(&text)));
            }
            Command::TokenizeFile { path } => {
                let text = read_source(&path)?;
                print!("{}", render_token_table(&tokenize_source(&text), TableLayout::TokenFirst));
            }
            Command::Split { text } => {
                print!("{}", render_split(&split_whitespace_tokens(&text)));
            }
            Command::Tokenize { code } => {
                print!("{}", render_token_table(&tokenize(&code), TableLayout::CategoryFirst));
            }
            Command::Check { language, name } => {
                let valid = language.is_valid_identifier(&name);
                println!("{}", render_verdict(language, &name, valid));
            }
            Command::Menu => {
                let stdin = io::stdin();
                let mut input = stdin.lock();
                let mut output = io::stdout().lock();
                run_menu(&mut input, &mut output)?;
            }
        }

        Ok(())
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    cli.command.unwrap_or(Command::Menu).run()
}
