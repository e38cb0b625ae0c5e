/// Comment markers of a C-like language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSyntax {
    pub line: &'static str,
    pub block_open: &'static str,
    pub block_close: &'static str,
}

pub const C_LIKE: CommentSyntax = CommentSyntax {
    line: "//",
    block_open: "/*",
    block_close: "*/",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Code,
    InBlockComment,
}

/// Line-by-line comment classifier. One scanner covers one input; its state
/// never outlives the scan.
#[derive(Debug, Clone)]
pub struct CommentScanner {
    syntax: CommentSyntax,
    state: ScanState,
    count: usize,
}

impl CommentScanner {
    pub fn new(syntax: CommentSyntax) -> Self {
        CommentScanner {
            syntax,
            state: ScanState::Code,
            count: 0,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Classifies one line (terminator optional) and returns whether it
    /// counts as a comment line.
    pub fn feed(&mut self, line: &str) -> bool {
        let line = line.trim();

        let is_comment = match self.state {
            ScanState::InBlockComment => {
                if line.contains(self.syntax.block_close) {
                    self.state = ScanState::Code;
                }
                true
            }
            ScanState::Code => {
                let line_marker = find_outside_quotes(line, self.syntax.line);
                let block_marker = find_outside_quotes(line, self.syntax.block_open);

                match (line_marker, block_marker) {
                    // A `//` that comes first hides any later `/*`.
                    (Some(line_at), Some(block_at)) if line_at < block_at => true,
                    (Some(_), None) => true,
                    (_, Some(_)) => {
                        if !line.contains(self.syntax.block_close) {
                            self.state = ScanState::InBlockComment;
                        }
                        true
                    }
                    (None, None) => false,
                }
            }
        };

        if is_comment {
            self.count += 1;
        }
        is_comment
    }

    pub fn finish(self) -> usize {
        if self.state == ScanState::InBlockComment {
            log::debug!("input ended inside a block comment after {} comment lines", self.count);
        }
        self.count
    }
}

/// Byte offset of the first `marker` that is not inside a `"..."` or
/// `'...'` literal. A backslash escapes the next character in a literal; an
/// unclosed literal runs to the end of the line.
fn find_outside_quotes(line: &str, marker: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (index, ch) in line.char_indices() {
        match quote {
            Some(open) => {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == open {
                    quote = None;
                }
            }
            None => {
                if line[index..].starts_with(marker) {
                    return Some(index);
                }
                if ch == '"' || ch == '\'' {
                    quote = Some(ch);
                }
            }
        }
    }

    None
}

/// Counts lines touched by a `//` or `/* */` comment.
pub fn count_comment_lines<I, S>(lines: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    count_comment_lines_with(lines, C_LIKE)
}

pub fn count_comment_lines_with<I, S>(lines: I, syntax: CommentSyntax) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = CommentScanner::new(syntax);

    for line in lines {
        scanner.feed(line.as_ref());
    }

    scanner.finish()
}

/// Splits `text` into physical lines and counts the comment lines.
pub fn count_comment_lines_in(text: &str) -> usize {
    count_comment_lines(text.lines())
}
