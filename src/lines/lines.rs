/// Number of physical lines. A last line without a terminator still counts.
pub fn count_all_lines(text: &str) -> usize {
    text.lines().count()
}

/// Number of lines with at least one non-whitespace character.
pub fn count_non_empty_lines(text: &str) -> usize {
    text.lines().filter(|line| !line.trim().is_empty()).count()
}

/// Splits on runs of whitespace, dropping empty pieces.
pub fn split_whitespace_tokens(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
