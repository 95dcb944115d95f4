//! While language vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `OperatorId`, `PunctuationId`, `BaseTypeId`) and look up
//! spellings/metadata via the registry tables instead of comparing strings.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings, precedence and metadata for shared use
//!   (diagnostics, formatting, rendering).
//!
//! ## Examples
//! ```rust
//! use while_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::as_str(KeywordId::While), "while");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod types;
