//! IDE entry points: one function per editor request.
//!
//! This module sits between the translator and whatever integration layer
//! talks to the editor and the Go semantic engine.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No editor/LSP types**: Uses our own types, converted at the boundary
//! 3. **"No result" is `None`**: malformed input never raises
//!
//! ## Usage
//!
//! ```ignore
//! use gotmpl_sense::ide;
//!
//! let unit = ide::completion_context(doc_text, cursor)?;
//! // write unit.text to a scratch .go file, query the engine at
//! // unit.cursor, then shape the raw results:
//! let members = ide::member_completions(raw_candidates);
//! ```

mod completion;
mod goto;
mod hover;
mod scan;

pub use completion::{Candidate, CandidateKind, completion_context, member_completions, typed_path};
pub use goto::{Location, filter_scratch_locations};
pub use hover::{first_hover, hover_context};
