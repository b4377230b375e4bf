//! Foundation types for the translation core.
//!
//! This module provides the primitives used throughout the crate:
//! - [`Position`] - Line/column cursor positions
//! - Char-based line splitting for cursor truncation
//!
//! This module has NO dependencies on other gotmpl-sense modules.

mod position;
mod text;

pub use position::Position;
pub use text::split_at_char;
