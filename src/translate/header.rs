//! The `gotype` header declaration.
//!
//! A document binds its root data value by carrying, anywhere in its text, a
//! declaration of the form:
//!
//! ```text
//! gotype: example.com/models.Widget
//! ```
//!
//! The first occurrence wins. Both captures are whitespace-free: the module
//! path is everything up to the last usable `.`, the type name everything
//! after it.

use smol_str::SmolStr;
use thiserror::Error;

const HEADER_KEY: &str = "gotype: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("no `gotype: <module>.<Type>` declaration in document")]
    Missing,
}

/// The parsed `(module, type)` pair from a `gotype` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoTypeDecl {
    /// Import path of the Go module/package holding the root type.
    pub module: SmolStr,
    /// Name of the declared root type.
    pub type_name: SmolStr,
}

impl GoTypeDecl {
    /// Parse the first `gotype` declaration in `text`.
    pub fn parse(text: &str) -> Result<Self, HeaderError> {
        text.match_indices(HEADER_KEY)
            .find_map(|(at, _)| Self::parse_value(&text[at + HEADER_KEY.len()..]))
            .ok_or(HeaderError::Missing)
    }

    /// Parse the `<module>.<Type>` value immediately following the key.
    fn parse_value(rest: &str) -> Option<Self> {
        let end = rest
            .find(char::is_whitespace)
            .unwrap_or(rest.len());
        let value = &rest[..end];

        // Split at the rightmost dot that leaves both sides non-empty.
        for (dot, _) in value.match_indices('.').rev() {
            let (module, type_name) = (&value[..dot], &value[dot + 1..]);
            if !module.is_empty() && !type_name.is_empty() {
                return Some(Self {
                    module: SmolStr::new(module),
                    type_name: SmolStr::new(type_name),
                });
            }
        }
        None
    }

    /// The Go composite-literal form of the root type, e.g. `Widget{}`.
    pub fn type_literal(&self) -> String {
        format!("{}{{}}", self.type_name)
    }

    /// The sentinel scope entry: a parenthesized fresh value of the root
    /// type, usable as the receiver of a field access.
    pub fn sentinel(&self) -> SmolStr {
        SmolStr::new(format!("({}{{}})", self.type_name))
    }
}
