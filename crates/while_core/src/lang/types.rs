//! Base type vocabulary.
//!
//! The language has exactly two primitive types. Tuple types are structural and are built by the
//! frontend from these; they have no registry entry.

use super::keywords::KeywordId;

/// Stable identifier for a primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseTypeId {
    Int,
    Bool,
}

impl BaseTypeId {
    /// Surface spelling (`int` / `bool`).
    pub fn as_str(self) -> &'static str {
        super::keywords::as_str(self.keyword())
    }

    /// Keyword that names this type in source.
    pub fn keyword(self) -> KeywordId {
        match self {
            BaseTypeId::Int => KeywordId::Int,
            BaseTypeId::Bool => KeywordId::Bool,
        }
    }

    /// Single-letter tag used when mangling tuple types into flat identifiers.
    pub fn mangle_tag(self) -> char {
        match self {
            BaseTypeId::Int => 'i',
            BaseTypeId::Bool => 'b',
        }
    }
}
