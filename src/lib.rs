//! # gotmpl-sense
//!
//! Translation core for Go template editor intelligence.
//!
//! Go templates have no type system of their own, so type-aware tooling
//! (hover, member completion, go-to-definition) cannot resolve member names
//! directly. This crate rewrites the template prefix up to the cursor into a
//! small synthetic Go compilation unit, together with the synthetic cursor
//! position that corresponds to the real one. An external semantic engine
//! (gopls or equivalent, not part of this crate) answers type queries against
//! the synthetic unit, and the answers map back to the template.
//!
//! The root data value is bound via a header line anywhere in the document:
//!
//! ```text
//! gotype: example.com/models.Widget
//! ```
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide        → request-level entry points (hover/completion context, result filters)
//!   ↓
//! translate  → header declaration, structural pass, synthetic unit assembly
//!   ↓
//! scanner    → Logos lexer and per-line tag iteration
//!   ↓
//! base       → primitives (Position, char-based line splitting)
//! ```
//!
//! Every translation is a pure function of (document text, cursor, header);
//! there is no shared or cross-request state.

/// Foundation types: cursor positions, char-based text splitting
pub mod base;

/// Tag scanner: Logos lexer, per-line `{{ ... }}` iteration
pub mod scanner;

/// Translator: header parsing, statement buffer, synthetic unit assembly
pub mod translate;

/// IDE entry points: hover/completion context derivation, result shaping
pub mod ide;

// Re-export commonly needed items
pub use base::Position;
pub use scanner::{Tag, TagKeyword, TagScanner};
pub use translate::{GoTypeDecl, HeaderError, SyntheticUnit, assemble};
