//! Translator: rewrites a template prefix into a synthetic Go unit.
//!
//! Given the document text up to the cursor, the declared root type and the
//! in-progress expression, [`assemble`] produces a self-contained Go source
//! file plus the synthetic cursor position that corresponds to the real one.
//! The output is meaningful only as input to a Go semantic engine; it is
//! never compiled or executed.
//!
//! Everything here is a pure function of its arguments: depth counter,
//! scope stack and statement buffer are request-local.

mod assemble;
mod header;
mod statement;

pub use assemble::{SyntheticUnit, assemble};
pub use header::{GoTypeDecl, HeaderError};
