//! Hover: context derivation and result selection.

use crate::base::{Position, split_at_char};
use crate::ide::scan::tag_path_start;
use crate::translate::{GoTypeDecl, SyntheticUnit, assemble};

/// How far the synthetic cursor moves back from "just after the trailing
/// dot" so it lands inside the final identifier. A trailing dot (or the
/// type literal's braces) breaks hover resolution.
const HOVER_SHIFT: usize = 2;
/// Shift for the header-line special case, where the resolved expression
/// ends in `{}` rather than an identifier character.
const HEADER_HOVER_SHIFT: usize = 3;

/// Build the synthetic unit for a hover request.
///
/// Unlike completion, the full expression under the cursor is already on
/// the line, straddling the cursor: the backward half is scanned with the
/// tag-argument anchor, the forward half is the identifier run at the
/// cursor. Hovering the `gotype` declaration itself resolves to the root
/// type. Returns `None` when no header or no expression can be derived.
pub fn hover_context(doc_text: &str, cursor: Position) -> Option<SyntheticUnit> {
    let decl = GoTypeDecl::parse(doc_text).ok()?;
    let line = doc_text.split('\n').nth(cursor.line)?;
    let (before_cursor, after_cursor) = split_at_char(line, cursor.column);

    let (current_path, back_shift) = if GoTypeDecl::parse(before_cursor).is_ok() {
        (decl.type_literal(), HEADER_HOVER_SHIFT)
    } else {
        let before = path_before_cursor(before_cursor)?;
        let after = ident_after_cursor(after_cursor)?;
        (format!("{before}{after}"), HOVER_SHIFT)
    };

    let mut unit = assemble(doc_text, cursor, &decl, &current_path);
    unit.cursor.column = unit.cursor.column.saturating_sub(back_shift);
    Some(unit)
}

/// The half of the hovered path before the cursor: the longest run of
/// non-whitespace, non-`}` characters ending at the cursor, anchored inside
/// an open tag. May be empty (cursor on the first char of the path).
fn path_before_cursor(prefix: &str) -> Option<String> {
    let chars: Vec<char> = prefix.chars().collect();
    let start = tag_path_start(&chars, chars.len())?;
    Some(chars[start..].iter().collect())
}

/// The half of the hovered path on and after the cursor: the longest run of
/// ASCII alphanumeric or `$` characters. Must be non-empty; hovering
/// whitespace or punctuation derives nothing.
fn ident_after_cursor(rest: &str) -> Option<String> {
    let ident: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '$')
        .collect();
    (!ident.is_empty()).then_some(ident)
}

/// Pick the hover payload to show: the first one the engine reports.
pub fn first_hover<T>(results: Vec<T>) -> Option<T> {
    results.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const DOC: &str = "gotype: example.com/m.Widget\n{{ range .Items }}\n<b>{{ .Name }}</b>\n{{ end }}";

    #[test]
    fn test_hover_mid_identifier() {
        // Cursor on the `m` of `.Name` (line 2, inside the tag)
        let unit = hover_context(DOC, Position::new(2, 9)).unwrap();
        assert!(unit.text.contains("foo := depth_1.Name."));
        // Cursor sits inside `Name`, not after the trailing dot
        let trailing = unit.text.split('\n').nth(unit.cursor.line).unwrap();
        assert_eq!(unit.cursor.column, trailing.chars().count() - 2);
    }

    #[rstest]
    #[case(7)] // on the `N`
    #[case(8)] // on the `a`
    #[case(10)] // on the `e`
    fn test_hover_same_path_across_identifier(#[case] column: usize) {
        let unit = hover_context(DOC, Position::new(2, column)).unwrap();
        assert!(
            unit.text.contains("foo := depth_1.Name."),
            "column {column} produced:\n{}",
            unit.text
        );
    }

    #[test]
    fn test_hover_header_line_resolves_root_type() {
        // Anywhere inside `Widget` on the gotype line
        let unit = hover_context(DOC, Position::new(0, 25)).unwrap();
        assert!(unit.text.contains("foo := Widget{}."));
        let trailing = unit.text.split('\n').nth(unit.cursor.line).unwrap();
        assert_eq!(unit.cursor.column, trailing.chars().count() - 3);
    }

    #[test]
    fn test_hover_outside_tag_yields_none() {
        // Cursor on the `<b>` text
        assert!(hover_context(DOC, Position::new(2, 1)).is_none());
    }

    #[test]
    fn test_hover_on_whitespace_yields_none() {
        // Cursor on the space right after `range`; forward scan finds no
        // identifier character
        assert!(hover_context(DOC, Position::new(1, 8)).is_none());
    }

    #[test]
    fn test_hover_without_header_yields_none() {
        assert!(hover_context("{{ .Name }}", Position::new(0, 4)).is_none());
    }

    #[test]
    fn test_first_hover() {
        assert_eq!(first_hover(vec!["a", "b"]), Some("a"));
        assert_eq!(first_hover(Vec::<&str>::new()), None);
    }
}
