#![forbid(unsafe_code)]
//! While Language Compiler
//!
//! A front end for a minimal imperative language with integers, booleans and structural tuples.
//! This crate provides the type checker and symbol table (frontend), the canonical/C/Python
//! emitters and the evaluator (backend), and tooling (formatter, CLI). Lexing and parsing live
//! in the `while_syntax` crate and are re-exported from [`frontend`].
//!
//! ## Pipeline
//!
//! ```rust
//! use whilec::backend::{self, Output, RenderMode, Value};
//! use whilec::{FormatConfig, parser, typechecker};
//!
//! let mut ast = parser::parse("int x = 1; while x < 3 { x = x + 1; } return x;").unwrap();
//! typechecker::check(&mut ast).unwrap();
//! let out = backend::run(&ast, RenderMode::Execute, &FormatConfig::default()).unwrap();
//! assert_eq!(out, Output::Value(Value::Int(3)));
//! ```
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod backend;
pub mod cli;
pub mod format;
pub mod frontend;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::symbols;
pub use frontend::typechecker;

pub use backend::{Output, RenderMode, Value};

pub use format::{FormatConfig, check_formatted, format_diff, format_source, format_source_with_config};
