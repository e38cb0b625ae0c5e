//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler that emits the matched
//!   text under a fixed category

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$category` - The token Category
/// * `$value` - The lexeme
/// * `$span` - The byte span of the lexeme in the input
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(Category::IntegerConstant, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($category:expr, $value:expr, $span:expr) => {
        Token {
            category: $category,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a handler for patterns whose category does not depend on the
/// matched text.
///
/// The handler emits the whole match as one token and advances the lexer
/// past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern::new(r"[\[\](){},.;:]", MK_DEFAULT_HANDLER!(Category::Punctuation))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($category:expr) => {
        |lexer: &mut Lexer, matched: &str| {
            lexer.push($crate::MK_TOKEN!(
                $category,
                String::from(matched),
                Span {
                    start: lexer.pos,
                    end: lexer.pos + matched.len(),
                }
            ));
            lexer.advance_n(matched.len());
        }
    };
}
