//! Type checker for the While programming language.
//!
//! Walks a parsed [`Program`] once, top-down for statements and bottom-up for expressions, and
//! annotates it in place: every expression gets its [`Type`] and every name reference gets the
//! [`DeclId`] it resolves to.
//!
//! ## Notes
//!
//! - **Error accumulation**: Errors are collected (not fatal) so the checker can report as many issues as possible in a
//!   single run.
//! - **No cascades**: a subtree that failed to type is given `Type::Error`, which is compatible with everything, so a
//!   single fault is reported once.
//! - **Scopes**: loop bodies, conditional branches and bare blocks each get their own scope. Redeclaring a name in the
//!   same scope is an error; shadowing an outer name is allowed.
//!
//! ## Examples
//!
//! ```rust
//! use whilec::frontend::{parser, typechecker};
//!
//! let mut ast = parser::parse("int x = 1; return x + 1;").unwrap();
//! typechecker::check(&mut ast).unwrap();
//! assert_eq!(ast.ret.ty.as_ref().map(|t| t.to_string()).as_deref(), Some("int"));
//! ```

mod check_expr;
mod check_stmt;

#[cfg(test)]
mod tests;

use crate::frontend::ast::*;
use crate::frontend::diagnostics::CompileError;
use crate::frontend::symbols::SymbolTable;

/// Type checker state.
///
/// A checker is good for one pass; [`check_program`](Self::check_program) starts from a fresh
/// root scope each time it is called.
#[derive(Debug, Default)]
pub struct TypeChecker {
    pub(crate) symbols: SymbolTable,
    pub(crate) errors: Vec<CompileError>,
}

impl TypeChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a whole program, annotating it in place.
    ///
    /// ## Errors
    /// Returns every diagnostic recorded during the pass.
    pub fn check_program(&mut self, program: &mut Program) -> Result<(), Vec<CompileError>> {
        self.symbols = SymbolTable::new();
        self.errors.clear();

        self.check_stmts(&mut program.body.stmts);
        self.check_expr(&mut program.ret);

        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(std::mem::take(&mut self.errors))
        }
    }
}

/// Type-check `program` in place.
///
/// ## Errors
/// Returns every type and name diagnostic found.
#[tracing::instrument(skip_all)]
pub fn check(program: &mut Program) -> Result<(), Vec<CompileError>> {
    TypeChecker::new().check_program(program)
}
