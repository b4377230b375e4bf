/// A position in a document (0-indexed for LSP compatibility).
///
/// Used both for the real cursor in the template and for the synthetic
/// cursor in the generated Go unit. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}
