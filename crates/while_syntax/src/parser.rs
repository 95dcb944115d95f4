//! Parser for the While language
//!
//! Pulls tokens lazily from the lexer (one token of lookahead) and builds a [`Program`].
//! Expressions are parsed by precedence climbing over the binding powers in
//! `while_core::lang::operators`; statements by recursive descent.
//!
//! ## Examples
//!
//! ```rust
//! use while_syntax::parser;
//!
//! let ast = parser::parse("int x = 1 + 2 * 3; return x;").unwrap();
//! assert_eq!(ast.declarations().len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::{CompileError, errors};
use crate::lexer::{Lexer, Token, TokenKind};
use while_core::lang::keywords::{self, KeywordId};
use while_core::lang::operators::{self, OperatorId, Prec};
use while_core::lang::punctuation::{self, PunctuationId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
