//! Logos-based lexer for template tag delimiters.
//!
//! Two token sets, switched with [`logos::Lexer::morph`]: outside a tag only
//! the `{{` opener matters; inside a tag we collect whitespace-delimited
//! words until the `}}` closer.

use logos::Logos;

/// Tokens outside a tag. Everything except an opener is plain text.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    /// `{{` opener, with optional whitespace-trim marker.
    #[token("{{-")]
    #[token("{{")]
    TagOpen,

    #[regex(r"[^{]+")]
    Text,

    /// A lone `{` that did not start an opener.
    #[token("{")]
    Brace,
}

/// Tokens inside a tag body.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum TagToken {
    /// `}}` closer, with optional whitespace-trim marker.
    #[token("-}}")]
    #[token("}}")]
    TagClose,

    /// One whitespace-delimited token of the tag body.
    #[regex(r"[^ \t\r\n\f}]+")]
    Word,

    /// A lone `}` inside a tag body. The tag is malformed; the caller
    /// discards everything scanned so far and resumes outside.
    #[token("}")]
    StrayBrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos::Logos;

    #[test]
    fn test_raw_tokens() {
        let tokens: Vec<_> = RawToken::lexer("ab {{- cd {")
            .map(|t| t.unwrap())
            .collect();
        assert_eq!(
            tokens,
            vec![RawToken::Text, RawToken::TagOpen, RawToken::Text, RawToken::Brace]
        );
    }

    #[test]
    fn test_opener_prefers_trim_marker() {
        let mut lexer = RawToken::lexer("{{- x");
        assert_eq!(lexer.next(), Some(Ok(RawToken::TagOpen)));
        assert_eq!(lexer.slice(), "{{-");
    }

    #[test]
    fn test_tag_tokens() {
        let tokens: Vec<_> = TagToken::lexer("range .Items -}}")
            .map(|t| t.unwrap())
            .collect();
        assert_eq!(
            tokens,
            vec![TagToken::Word, TagToken::Word, TagToken::TagClose]
        );
    }

    #[test]
    fn test_stray_brace() {
        let tokens: Vec<_> = TagToken::lexer("a } b").map(|t| t.unwrap()).collect();
        assert_eq!(
            tokens,
            vec![TagToken::Word, TagToken::StrayBrace, TagToken::Word]
        );
    }
}
