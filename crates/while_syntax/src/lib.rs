//! Shared syntax frontend for the While language: lexer, parser, AST, diagnostics.
//!
//! ## Notes
//! - This crate is "syntax-only": it does not resolve names or check types. It does hand out
//!   declaration ordinals ([`ast::DeclId`]) because they are fixed when a declaration is parsed.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `while_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use while_syntax::parser;
//!
//! let program = parser::parse("int x = 1; return x;").unwrap();
//! assert_eq!(program.body.stmts.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
