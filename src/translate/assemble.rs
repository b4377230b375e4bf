//! Synthetic unit assembly.
//!
//! Walks the document from its start through the cursor line, drives the tag
//! scanner, and converts the control tags it sees into a minimal Go function
//! body: one `for` per `range`, one vacuous `if` per depth-only construct,
//! one `}` per `end`. The point is not faithful template semantics but
//! correct *nesting* and correct *iteration-variable bindings*, so that the
//! trailing expression type-checks the way the template author expects.
//!
//! An earlier design translated only the cursor's line, but nested ranges
//! made variable scope tracking unreliable; translating the whole prefix and
//! letting the Go engine resolve scopes is simpler and exact.

use smol_str::SmolStr;

use super::header::GoTypeDecl;
use super::statement::{Stmt, open_block_count, render_prefix};
use crate::base::{Position, split_at_char};
use crate::scanner::{Tag, TagKeyword, TagScanner};

/// Fixed Go header lines before the emitted prefix block:
/// `package`, blank, `import`, blank, `func main() {`.
const HEADER_LINES: usize = 5;

/// The generated Go source plus the synthetic cursor that corresponds to the
/// real one. Written to a scratch file and handed to the semantic engine by
/// the integration layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticUnit {
    pub text: String,
    pub cursor: Position,
}

/// Stack of names the leading-dot path currently refers to, one entry per
/// open anonymous `range`. Bottom entry is the sentinel, a fresh value of
/// the declared root type. Never observed empty.
struct ScopeStack {
    names: Vec<SmolStr>,
    sentinel: SmolStr,
}

impl ScopeStack {
    fn new(decl: &GoTypeDecl) -> Self {
        let sentinel = decl.sentinel();
        Self {
            names: vec![sentinel.clone()],
            sentinel,
        }
    }

    fn top(&self) -> &str {
        match self.names.last() {
            Some(name) => name,
            None => &self.sentinel,
        }
    }

    fn push(&mut self, name: SmolStr) {
        self.names.push(name);
    }

    /// Pop and return the top entry, restoring the sentinel immediately if
    /// the stack would be left empty.
    fn pop(&mut self) -> SmolStr {
        let popped = self
            .names
            .pop()
            .unwrap_or_else(|| self.sentinel.clone());
        if self.names.is_empty() {
            self.names.push(self.sentinel.clone());
        }
        popped
    }

    /// Resolve a leading-dot path against the current scope: `.` is the top
    /// of the stack itself, `.Rest` substitutes the top for the leading dot,
    /// anything else passes through unchanged.
    fn resolve(&self, expr: &str) -> String {
        if expr == "." {
            self.top().to_string()
        } else if let Some(rest) = expr.strip_prefix('.') {
            format!("{}.{}", self.top(), rest)
        } else {
            expr.to_string()
        }
    }
}

/// Request-local translation state threaded through the structural pass.
struct Translation {
    depth: usize,
    last_scope_change_at_depth: usize,
    scope: ScopeStack,
    stmts: Vec<Stmt>,
}

impl Translation {
    fn new(decl: &GoTypeDecl) -> Self {
        Self {
            depth: 0,
            last_scope_change_at_depth: 0,
            scope: ScopeStack::new(decl),
            stmts: Vec::new(),
        }
    }

    fn apply(&mut self, tag: &Tag) {
        // Indent of an opening statement is the depth it opens.
        let indent = self.depth + 1;
        match &tag.keyword {
            TagKeyword::Range => {
                self.depth += 1;
                match tag.args.len() {
                    // `{{ range .Items }}`: no bound variable; the body's
                    // leading dot means the element, so bind a fresh name
                    // and make it the new scope.
                    1 => {
                        let var = SmolStr::new(format!("depth_{}", self.depth));
                        self.last_scope_change_at_depth = self.depth;
                        self.stmts.push(Stmt::open(
                            indent,
                            format!(
                                "for _, {} := range {} {{",
                                var,
                                self.scope.resolve(&tag.args[0])
                            ),
                        ));
                        self.scope.push(var);
                    }
                    // `{{ range $v := .Items }}`: explicit binding, the
                    // leading dot keeps its current meaning.
                    3 => {
                        self.stmts.push(Stmt::open(
                            indent,
                            format!(
                                "for _, {} := range {} {{",
                                tag.args[0],
                                self.scope.resolve(&tag.args[2])
                            ),
                        ));
                    }
                    // `{{ range $i, $v := .Items }}`: the comma travels
                    // inside the first token, producing valid Go as-is.
                    4 => {
                        self.stmts.push(Stmt::open(
                            indent,
                            format!(
                                "for {} {} := range {} {{",
                                tag.args[0],
                                tag.args[1],
                                self.scope.resolve(&tag.args[3])
                            ),
                        ));
                    }
                    // Malformed range: depth still advances so a later
                    // `{{ end }}` keeps the nesting consistent, and the
                    // vacuous block keeps the emitted braces in lockstep
                    // with it.
                    _ => {
                        self.stmts.push(Stmt::open(indent, "if (true) {"));
                    }
                }
            }
            keyword if keyword.opens_plain_block() => {
                self.depth += 1;
                // No loop semantics; a vacuous conditional keeps the block
                // structure aligned with the matching `{{ end }}`.
                self.stmts
                    .push(Stmt::open(indent, "if (true) {"));
            }
            TagKeyword::End => {
                // More ends than opens: emitting the close would unbalance
                // the unit, so clamp at zero, log, and keep going.
                if self.depth == 0 {
                    tracing::error!(
                        "template closes more blocks than it opens; clamping nesting depth at zero"
                    );
                    return;
                }
                self.depth -= 1;
                self.stmts.push(Stmt::close(self.depth + 1));
                if self.depth < self.last_scope_change_at_depth {
                    self.last_scope_change_at_depth = self.depth;
                    self.scope.pop();
                }
            }
            // Value lookups, pipelines, custom functions: no depth effect.
            _ => {}
        }
    }

    /// Resolve the caller-supplied in-progress path into the right-hand side
    /// of the trailing statement.
    fn resolve_current_path(&mut self, decl: &GoTypeDecl, current_path: &str) -> String {
        let rhs = if current_path.is_empty() {
            self.scope.pop().to_string()
        } else if current_path == "$" {
            decl.type_literal()
        } else if let Some(rest) = current_path.strip_prefix("$.") {
            format!("{}.{}", decl.type_literal(), rest)
        } else if current_path.starts_with('.') {
            format!("{}{}", self.scope.pop(), current_path)
        } else {
            current_path.to_string()
        };
        // `$` cannot start a Go identifier.
        match rhs.strip_prefix('$') {
            Some(rest) => format!("dollar_{rest}"),
            None => rhs,
        }
    }
}

/// Translate the document prefix up to `cursor` into a synthetic Go unit.
///
/// `current_path` is the expression the user is in the middle of typing
/// (derived by the ide layer; empty when unknown). The returned cursor sits
/// immediately after the forced trailing `.` of the final statement, ready
/// for a member-completion query; hover callers shift it back into the final
/// identifier.
///
/// Total for any input: malformed templates produce a best-effort but
/// structurally balanced unit, never an error.
pub fn assemble(
    doc_text: &str,
    cursor: Position,
    decl: &GoTypeDecl,
    current_path: &str,
) -> SyntheticUnit {
    let mut translation = Translation::new(decl);

    for (line_no, line) in doc_text.split('\n').take(cursor.line + 1).enumerate() {
        // Tags after the cursor are not yet "seen" by the user.
        let line = if line_no == cursor.line {
            split_at_char(line, cursor.column).0
        } else {
            line
        };
        for tag in TagScanner::new(line) {
            translation.apply(&tag);
        }
    }

    let prefix = render_prefix(&translation.stmts);

    let rhs = translation.resolve_current_path(decl, current_path);
    let mut trailing = String::new();
    for _ in 0..=translation.depth {
        trailing.push('\t');
    }
    trailing.push_str("foo := ");
    trailing.push_str(&rhs);
    trailing.push('.');

    // The template is truncated at the cursor, so its `end` tags are still
    // ahead of us; close every open block so the unit parses on its own.
    let open = open_block_count(&translation.stmts);
    let mut closers = String::new();
    for level in (1..=open).rev() {
        if !closers.is_empty() {
            closers.push('\n');
        }
        for _ in 0..level {
            closers.push('\t');
        }
        closers.push('}');
    }

    let text = format!(
        "package main\n\nimport . \"{}\"\n\nfunc main() {{\n{}\n{}\n{}\n}}",
        decl.module, prefix, trailing, closers
    );

    let synthetic_cursor = Position::new(
        HEADER_LINES + prefix.matches('\n').count() + 1,
        trailing.chars().count(),
    );
    tracing::trace!(
        line = synthetic_cursor.line,
        column = synthetic_cursor.column,
        "assembled synthetic unit:\n{text}"
    );
    SyntheticUnit {
        text,
        cursor: synthetic_cursor,
    }
}
