//! The synthetic statement buffer.
//!
//! The translator never concatenates its output directly; it records one
//! [`Stmt`] per emitted statement, with indentation as metadata, and renders
//! to text once at the end. Self-balancing and cursor arithmetic work on the
//! records, independent of final rendering.

/// One synthetic Go statement with rendering metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    /// Leading tab count. Cosmetic only; keeps the unit legible when dumped.
    pub indent: usize,
    pub text: String,
}

impl Stmt {
    /// A block-opening statement (`for ... {`, `if (true) {`).
    pub fn open(indent: usize, text: impl Into<String>) -> Self {
        Self {
            indent,
            text: text.into(),
        }
    }

    /// A closing `}`.
    pub fn close(indent: usize) -> Self {
        Self {
            indent,
            text: "}".to_string(),
        }
    }
}

/// Render the statement buffer to the prefix block of the synthetic unit.
///
/// `$`-prefixed template variables survive into statement text, but Go
/// identifiers cannot start with `$`, so every `$` is rewritten to a safe
/// prefix here.
pub fn render_prefix(stmts: &[Stmt]) -> String {
    let mut out = String::new();
    for (i, stmt) in stmts.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for _ in 0..stmt.indent {
            out.push('\t');
        }
        out.push_str(&stmt.text.replace('$', "dollar_"));
    }
    out
}

/// Net count of blocks the buffer leaves open, counted over statement text
/// so that braces inside resolved expressions (normally balanced pairs like
/// `(Widget{})`, but arbitrary when the template is malformed) are accounted
/// for exactly.
pub fn open_block_count(stmts: &[Stmt]) -> usize {
    let mut balance: isize = 0;
    for stmt in stmts {
        for c in stmt.text.chars() {
            match c {
                '{' => balance += 1,
                '}' => balance -= 1,
                _ => {}
            }
        }
    }
    balance.max(0) as usize
}
