//! Char-based text splitting for working with cursor columns.

/// Split a line at a character column, returning `(before, after)`.
///
/// Columns past the end of the line clamp to the end. Splitting happens on
/// char boundaries, so multi-byte text never panics.
///
/// # Example
/// ```
/// use gotmpl_sense::base::split_at_char;
///
/// assert_eq!(split_at_char("{{ .Name }}", 5), ("{{ .N", "ame }}"));
/// assert_eq!(split_at_char("abc", 10), ("abc", ""));
/// ```
pub fn split_at_char(line: &str, column: usize) -> (&str, &str) {
    match line.char_indices().nth(column) {
        Some((byte, _)) => line.split_at(byte),
        None => (line, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_ascii() {
        assert_eq!(split_at_char("hello", 2), ("he", "llo"));
        assert_eq!(split_at_char("hello", 0), ("", "hello"));
        assert_eq!(split_at_char("hello", 5), ("hello", ""));
    }

    #[test]
    fn test_split_past_end_clamps() {
        assert_eq!(split_at_char("ab", 99), ("ab", ""));
        assert_eq!(split_at_char("", 3), ("", ""));
    }

    #[test]
    fn test_split_multibyte() {
        // 'é' is two bytes; splitting counts chars, not bytes
        assert_eq!(split_at_char("café latte", 4), ("café", " latte"));
    }
}
