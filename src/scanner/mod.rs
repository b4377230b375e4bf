//! Tag scanner: finds `{{ ... }}` control tags in a line of text.
//!
//! [`TagScanner`] walks one line and yields every well-delimited tag in
//! order of occurrence. A line may contain several tags (class attributes,
//! inline conditionals). Tags with no matching closer on the line are
//! silently skipped, never an error; the template is being edited and is
//! routinely malformed.
//!
//! The scanner is freshly constructed per line and keeps no state between
//! calls.

mod lexer;
mod tag;

pub use tag::{Tag, TagKeyword};

use lexer::{RawToken, TagToken};
use logos::Logos;
use smol_str::SmolStr;

/// Iterator over the tags of a single line.
pub struct TagScanner<'a> {
    raw: Option<logos::Lexer<'a, RawToken>>,
}

impl<'a> TagScanner<'a> {
    /// Scan `line` for tags. For the cursor's own line, pass the prefix up
    /// to the cursor column; tags after the cursor are not yet "seen".
    pub fn new(line: &'a str) -> Self {
        Self {
            raw: Some(RawToken::lexer(line)),
        }
    }
}

impl Iterator for TagScanner<'_> {
    type Item = Tag;

    fn next(&mut self) -> Option<Tag> {
        loop {
            let raw = self.raw.as_mut()?;
            match raw.next()? {
                Ok(RawToken::TagOpen) => {}
                _ => continue,
            }

            // Inside a tag: collect words until the closer.
            let mut body = self.raw.take()?.morph::<TagToken>();
            let mut words: Vec<SmolStr> = Vec::new();
            let mut closed = false;
            while let Some(token) = body.next() {
                match token {
                    Ok(TagToken::TagClose) => {
                        closed = true;
                        break;
                    }
                    Ok(TagToken::Word) => words.push(SmolStr::new(body.slice())),
                    // Stray `}` or lexing failure: the tag is malformed.
                    Ok(TagToken::StrayBrace) | Err(()) => break,
                }
            }
            self.raw = Some(body.morph());

            if closed && !words.is_empty() {
                let keyword = TagKeyword::from_word(&words[0]);
                return Some(Tag::new(keyword, words[1..].to_vec()));
            }
            // Malformed or empty tag: keep scanning the rest of the line.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(line: &str) -> Vec<Tag> {
        TagScanner::new(line).collect()
    }

    #[test]
    fn test_no_tags() {
        assert!(scan("plain text, no tags").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_single_range_tag() {
        let tags = scan("{{ range .Items }}");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].keyword, TagKeyword::Range);
        assert_eq!(tags[0].args, vec![SmolStr::new(".Items")]);
    }

    #[test]
    fn test_multiple_tags_on_one_line() {
        let tags = scan(r#"<li class="{{ if .Done }}done{{ end }}">"#);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].keyword, TagKeyword::If);
        assert_eq!(tags[1].keyword, TagKeyword::End);
    }

    #[test]
    fn test_trim_markers_stripped() {
        let tags = scan("{{- range $i, $v := .Rows -}}");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].keyword, TagKeyword::Range);
        assert_eq!(
            tags[0].args,
            vec![
                SmolStr::new("$i,"),
                SmolStr::new("$v"),
                SmolStr::new(":="),
                SmolStr::new(".Rows")
            ]
        );
    }

    #[test]
    fn test_repeated_whitespace_collapsed() {
        let tags = scan("{{  range   $x  :=    .Items  }}");
        assert_eq!(tags.len(), 1);
        assert_eq!(
            tags[0].args,
            vec![SmolStr::new("$x"), SmolStr::new(":="), SmolStr::new(".Items")]
        );
    }

    #[test]
    fn test_value_tag_is_other() {
        let tags = scan("{{ .Name }}");
        assert_eq!(tags[0].keyword, TagKeyword::Other(SmolStr::new(".Name")));
        assert!(tags[0].args.is_empty());
    }

    #[test]
    fn test_unclosed_tag_skipped() {
        assert!(scan("{{ range .Items").is_empty());
    }

    #[test]
    fn test_stray_brace_discards_tag() {
        assert!(scan("{{ a } b }}").is_empty());
    }

    #[test]
    fn test_tag_after_malformed_tag_still_found() {
        let tags = scan("{{ a } {{ end }}");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].keyword, TagKeyword::End);
    }

    #[test]
    fn test_empty_tag_skipped() {
        assert!(scan("{{ }}").is_empty());
        assert!(scan("{{}}").is_empty());
    }

    #[test]
    fn test_keyword_classification() {
        assert_eq!(TagKeyword::from_word("range"), TagKeyword::Range);
        assert_eq!(TagKeyword::from_word("if"), TagKeyword::If);
        assert_eq!(TagKeyword::from_word("block"), TagKeyword::Block);
        assert_eq!(TagKeyword::from_word("with"), TagKeyword::With);
        assert_eq!(TagKeyword::from_word("define"), TagKeyword::Define);
        assert_eq!(TagKeyword::from_word("end"), TagKeyword::End);
        assert!(matches!(
            TagKeyword::from_word("printf"),
            TagKeyword::Other(_)
        ));

        assert!(TagKeyword::If.opens_plain_block());
        assert!(TagKeyword::Define.opens_plain_block());
        assert!(!TagKeyword::Range.opens_plain_block());
        assert!(!TagKeyword::End.opens_plain_block());
    }
}
