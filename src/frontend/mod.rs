//! While Compiler Frontend
//!
//! This module contains all frontend components:
//! - `lexer`: tokenization of source code
//! - `parser`: parsing tokens into AST
//! - `ast`: abstract syntax tree definitions
//! - `diagnostics`: error reporting
//! - `symbols`: scope stack for name resolution
//! - `typechecker`: type checking and name resolution

// Syntax components are provided by the shared while_syntax crate.
pub use while_syntax::{ast, diagnostics, lexer, parser};

// Compiler-specific pieces remain local.
pub mod symbols;
pub mod typechecker;
