use lazy_static::lazy_static;
use regex::Regex;

use crate::{Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Category, Token, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str);

/// One entry of the lexer's rule table: an anchored regex and the handler
/// that consumes its match.
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
    needs_block_close: bool,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> RegexPattern {
        // Anchored: a rule only applies when it matches at the cursor.
        let regex = Regex::new(&format!("^(?:{})", pattern))
            .unwrap_or_else(|err| panic!("invalid lexer pattern {:?}: {}", pattern, err));

        RegexPattern {
            regex,
            handler,
            needs_block_close: false,
        }
    }

    /// A rule that can only match when a `*/` lies ahead of the cursor.
    fn block_comment(pattern: &str, handler: RegexHandler) -> RegexPattern {
        RegexPattern {
            needs_block_close: true,
            ..RegexPattern::new(pattern, handler)
        }
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexerOptions {
    /// Consume `//` and `/* */` comments instead of lexing their contents.
    pub skip_comments: bool,
}

impl LexerOptions {
    pub fn snippet() -> Self {
        LexerOptions { skip_comments: false }
    }

    pub fn source_file() -> Self {
        LexerOptions { skip_comments: true }
    }
}

lazy_static! {
    static ref SNIPPET_PATTERNS: Vec<RegexPattern> = build_patterns(LexerOptions::snippet());
    static ref SOURCE_PATTERNS: Vec<RegexPattern> = build_patterns(LexerOptions::source_file());
}

/// Builds the rule table in priority order. The first rule that matches at
/// the cursor wins, so specific rules must precede general ones: hex before
/// number, quoted literals before the fallback, two-character operators
/// before single-character ones.
fn build_patterns(options: LexerOptions) -> Vec<RegexPattern> {
    let mut patterns = vec![
        RegexPattern::new(r"\s+", skip_handler),
        RegexPattern::new(r"0[xX][0-9a-fA-F]+", MK_DEFAULT_HANDLER!(Category::HexConstant)),
        RegexPattern::new(r"[0-9]+(\.[0-9]+)?", number_handler),
        // Quoted literals never span lines; an unclosed quote falls through
        // to the single-character fallback.
        RegexPattern::new(r#""[^"\n]*""#, MK_DEFAULT_HANDLER!(Category::StringLiteral)),
        RegexPattern::new(r"'[^'\n]*'", MK_DEFAULT_HANDLER!(Category::StringLiteral)),
    ];

    if options.skip_comments {
        patterns.push(RegexPattern::new(r"//[^\n]*", skip_handler));
        patterns.push(RegexPattern::block_comment(r"(?s)/\*.*?\*/", skip_handler));
    }

    patterns.extend([
        RegexPattern::new(r"[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new(r"\+\+|--|==|!=|<=|>=|&&|\|\||<<|>>", MK_DEFAULT_HANDLER!(Category::Operator)),
        RegexPattern::new(r"[-+*/%=<>!&|^~]", MK_DEFAULT_HANDLER!(Category::Operator)),
        RegexPattern::new(r"[\[\](){},.;:]", MK_DEFAULT_HANDLER!(Category::Punctuation)),
        RegexPattern::new(r"(?s).", MK_DEFAULT_HANDLER!(Category::Other)),
    ]);

    patterns
}

/// Returns the rule table used for the given options, in priority order.
pub fn patterns(options: LexerOptions) -> &'static [RegexPattern] {
    if options.skip_comments {
        &SOURCE_PATTERNS[..]
    } else {
        &SNIPPET_PATTERNS[..]
    }
}

pub struct Lexer<'a> {
    patterns: &'static [RegexPattern],
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    last_block_close: Option<usize>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, options: LexerOptions) -> Lexer<'a> {
        Lexer {
            patterns: patterns(options),
            tokens: vec![],
            source,
            pos: 0,
            last_block_close: source.rfind("*/"),
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        token.debug();
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Whether a `*/` starts after a `/*` opened at the cursor. The block
    /// comment rule cannot match otherwise.
    pub fn block_close_ahead(&self) -> bool {
        self.last_block_close
            .is_some_and(|close| close >= self.pos + 2)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    let category = if matched.contains('.') {
        Category::FloatConstant
    } else {
        Category::IntegerConstant
    };

    lexer.push(MK_TOKEN!(category, String::from(matched), Span { start: lexer.pos, end: lexer.pos + matched.len() }));
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let category = if RESERVED_LOOKUP.contains(matched) {
        Category::Keyword
    } else {
        Category::Identifier
    };

    lexer.push(MK_TOKEN!(category, String::from(matched), Span { start: lexer.pos, end: lexer.pos + matched.len() }));
    lexer.advance_n(matched.len());
}

pub fn tokenize_with(source: &str, options: LexerOptions) -> Vec<Token> {
    let mut lex = Lexer::new(source, options);

    while !lex.at_eof() {
        let patterns = lex.patterns;
        let remainder = lex.remainder();

        // The trailing `(?s).` rule matches any character, so some rule
        // always applies and every handler advances the cursor.
        for pattern in patterns {
            if pattern.needs_block_close && !lex.block_close_ahead() {
                continue;
            }

            if let Some(found) = pattern.regex.find(remainder) {
                if !found.is_empty() {
                    (pattern.handler)(&mut lex, found.as_str());
                    break;
                }
            }
        }
    }

    log::debug!(
        "tokenized {} bytes into {} tokens (skip_comments: {})",
        source.len(),
        lex.tokens.len(),
        options.skip_comments
    );
    lex.tokens
}

/// Tokenizes a code snippet. Comment markers are lexed as operators.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with(source, LexerOptions::snippet())
}

/// Tokenizes a whole source file, discarding `//` and `/* */` comments.
pub fn tokenize_source(source: &str) -> Vec<Token> {
    tokenize_with(source, LexerOptions::source_file())
}
