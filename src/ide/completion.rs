//! Member completion: context derivation and candidate filtering.

use smol_str::SmolStr;

use crate::base::{Position, split_at_char};
use crate::ide::scan::tag_path_start;
use crate::translate::{GoTypeDecl, SyntheticUnit, assemble};

/// Build the synthetic unit for a member-completion request.
///
/// The current path is whatever the user has typed before the triggering
/// `.` on this line; when none is found the path is empty and the trailing
/// expression falls back to the current scope. Returns `None` only when the
/// document has no usable `gotype` header.
pub fn completion_context(doc_text: &str, cursor: Position) -> Option<SyntheticUnit> {
    let decl = GoTypeDecl::parse(doc_text).ok()?;
    let line = doc_text.split('\n').nth(cursor.line)?;
    let prefix = split_at_char(line, cursor.column).0;
    let current_path = typed_path(prefix).unwrap_or_default();
    Some(assemble(doc_text, cursor, &decl, &current_path))
}

/// Extract the path being completed from the cursor-truncated line.
///
/// Finds the last `<word>.` that sits inside an open tag, right after
/// whitespace (the `.` the user just typed to trigger completion) and
/// returns `<word>` without the dot. The word may be empty (`{{ .` means
/// "complete on the current scope").
pub fn typed_path(prefix: &str) -> Option<String> {
    let chars: Vec<char> = prefix.chars().collect();
    for dot in (0..chars.len()).rev() {
        if chars[dot] != '.' {
            continue;
        }
        if let Some(start) = tag_path_start(&chars, dot) {
            return Some(chars[start..dot].iter().collect());
        }
    }
    None
}

/// Completion candidate kinds, numbered as in the LSP specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidateKind {
    Method,
    Function,
    Field,
    Variable,
    Struct,
    Module,
    Other,
}

impl CandidateKind {
    /// Convert from an LSP completion item kind number.
    pub fn from_lsp(kind: u32) -> Self {
        match kind {
            2 => CandidateKind::Method,
            3 => CandidateKind::Function,
            5 => CandidateKind::Field,
            6 => CandidateKind::Variable,
            22 => CandidateKind::Struct,
            9 => CandidateKind::Module,
            _ => CandidateKind::Other,
        }
    }

    /// Convert to an LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CandidateKind::Method => 2,
            CandidateKind::Function => 3,
            CandidateKind::Field => 5,
            CandidateKind::Variable => 6,
            CandidateKind::Struct => 22,
            CandidateKind::Module => 9,
            CandidateKind::Other => 1, // Text
        }
    }

    /// Whether this candidate is a structure member. Completing on a dotted
    /// path only ever means field access in a template, so everything else
    /// the engine suggests (package-level functions, keywords) is noise.
    pub fn is_member(&self) -> bool {
        matches!(self, CandidateKind::Field)
    }
}

/// A raw completion candidate as reported by the semantic engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub label: SmolStr,
    pub kind: CandidateKind,
}

impl Candidate {
    pub fn new(label: impl Into<SmolStr>, kind: CandidateKind) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }
}

/// Keep only the candidates that name structure members.
pub fn member_completions(candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.into_iter().filter(|c| c.kind.is_member()).collect()
}
