//! Token types for the While lexer.
//!
//! Vocabulary tokens carry **registry-backed IDs**:
//! - `Keyword(KeywordId)` for reserved words (including the word operators `and`/`or`/`not`)
//! - `Operator(OperatorId)` for symbol operators
//! - `Punctuation(PunctuationId)` for delimiters and separators
//!
//! ## Notes
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::Span;
use crate::diagnostics::{CompileError, errors};
use while_core::lang::keywords::{self, KeywordId};
use while_core::lang::operators::{self, OperatorId};
use while_core::lang::punctuation::{self, PunctuationId};

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    Int(i64),

    // ========== Special ==========
    /// Characters no rule accepted; the span covers them.
    Error(LexError),
    Eof,
}

/// Reason a stretch of input could not be tokenized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("integer literal '{0}' out of range")]
    IntegerOutOfRange(String),
}

impl LexError {
    pub fn to_compile_error(&self, span: Span) -> CompileError {
        match self {
            LexError::UnexpectedChar(c) => errors::unexpected_char(*c, span),
            LexError::IntegerOutOfRange(digits) => errors::integer_out_of_range(digits, span),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "{}", keywords::as_str(*id)),
            TokenKind::Operator(id) => write!(f, "{}", operators::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "{}", punctuation::as_str(*id)),
            TokenKind::Ident(name) => write!(f, "{name}"),
            TokenKind::Int(v) => write!(f, "{v}"),
            TokenKind::Error(LexError::UnexpectedChar(c)) => write!(f, "{c}"),
            TokenKind::Error(LexError::IntegerOutOfRange(digits)) => write!(f, "{digits}"),
            TokenKind::Eof => write!(f, "<eof>"),
        }
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
