//! Punctuation vocabulary.
//!
//! Delimiters and separators used by the lexer/parser. This module is vocabulary only; it does not
//! tokenize source text.
//!
//! ## Examples
//! ```rust
//! use while_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_char('{'), Some(PunctuationId::LBrace));
//! assert_eq!(punctuation::as_str(PunctuationId::Semicolon), ";");
//! ```

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: char,
    pub spelling: &'static str,
}

/// Registry of all punctuation tokens, in [`PunctuationId`] discriminant order.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Comma, ',', ","),
    info(PunctuationId::Semicolon, ';', ";"),
    info(PunctuationId::LParen, '(', "("),
    info(PunctuationId::RParen, ')', ")"),
    info(PunctuationId::LBrace, '{', "{"),
    info(PunctuationId::RBrace, '}', "}"),
];

pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    &PUNCTUATION[id as usize]
}

pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).spelling
}

/// Resolve a single character to punctuation, if it is one.
pub fn from_char(c: char) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == c).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: char, spelling: &'static str) -> PunctuationInfo {
    PunctuationInfo { id, canonical, spelling }
}
