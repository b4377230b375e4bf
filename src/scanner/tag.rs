//! Tag values produced by the scanner.

use smol_str::SmolStr;

/// The leading keyword of a `{{ ... }}` tag.
///
/// Only `range` and `end` interact with the scope stack; `if`, `block`,
/// `with` and `define` affect nesting depth alone. Anything else (value
/// lookups, pipelines, custom functions) is carried as [`TagKeyword::Other`]
/// and treated as a no-op by the translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagKeyword {
    Range,
    If,
    Block,
    With,
    Define,
    End,
    Other(SmolStr),
}

impl TagKeyword {
    pub fn from_word(word: &str) -> Self {
        match word {
            "range" => TagKeyword::Range,
            "if" => TagKeyword::If,
            "block" => TagKeyword::Block,
            "with" => TagKeyword::With,
            "define" => TagKeyword::Define,
            "end" => TagKeyword::End,
            other => TagKeyword::Other(SmolStr::new(other)),
        }
    }

    /// Whether this keyword opens a synthetic block without loop semantics.
    pub fn opens_plain_block(&self) -> bool {
        matches!(
            self,
            TagKeyword::If | TagKeyword::Block | TagKeyword::With | TagKeyword::Define
        )
    }
}

/// One `{{ ... }}` occurrence: its keyword plus the remaining
/// whitespace-delimited argument tokens, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub keyword: TagKeyword,
    pub args: Vec<SmolStr>,
}

impl Tag {
    pub fn new(keyword: TagKeyword, args: Vec<SmolStr>) -> Self {
        Self { keyword, args }
    }
}
