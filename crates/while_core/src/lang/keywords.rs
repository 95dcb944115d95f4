//! Define the reserved keyword vocabulary for the While language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings
//! and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `and`, `or` and `not` are also "word operators". If you need their precedence, use
//!   [`crate::lang::operators`].
//!
//! ## Examples
//! ```rust
//! use while_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("if"), Some(KeywordId::If));
//! assert_eq!(keywords::from_str("If"), None);
//! assert_eq!(keywords::as_str(KeywordId::Return), "return");
//! ```

use super::operators::OperatorId;
use super::types::BaseTypeId;

/// Stable identifier for every reserved keyword.
///
/// ## Notes
/// - The discriminant doubles as the index into [`KEYWORDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow / statements
    If,
    Else,
    While,
    Return,

    // Base types
    Int,
    Bool,

    // Literals
    True,
    False,

    // Word operators
    And,
    Or,
    Not,
}

/// High-level grouping for documentation and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Type,
    Literal,
    Operator,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords, in [`KeywordId`] discriminant order.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    info(KeywordId::Int, "int", KeywordCategory::Type),
    info(KeywordId::Bool, "bool", KeywordCategory::Type),
    info(KeywordId::True, "true", KeywordCategory::Literal),
    info(KeywordId::False, "false", KeywordCategory::Literal),
    info(KeywordId::And, "and", KeywordCategory::Operator),
    info(KeywordId::Or, "or", KeywordCategory::Operator),
    info(KeywordId::Not, "not", KeywordCategory::Operator),
];

/// Return the full metadata entry for a keyword.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Resolve a spelling to a keyword id, if reserved.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Return the base type a type keyword names (`int`, `bool`).
pub fn base_type(id: KeywordId) -> Option<BaseTypeId> {
    match id {
        KeywordId::Int => Some(BaseTypeId::Int),
        KeywordId::Bool => Some(BaseTypeId::Bool),
        _ => None,
    }
}

/// Return the operator a word-operator keyword spells (`and`, `or`, `not`).
pub fn word_operator(id: KeywordId) -> Option<OperatorId> {
    match id {
        KeywordId::And => Some(OperatorId::And),
        KeywordId::Or => Some(OperatorId::Or),
        KeywordId::Not => Some(OperatorId::Not),
        _ => None,
    }
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
