//! Symbol table and scope management for While
//!
//! Scopes form a stack: the bottom frame is the program's root scope, and every loop body,
//! conditional branch, or bare block pushes a fresh frame that is popped when the construct ends.
//! Symbols themselves live in an arena so a [`DeclId`] stays resolvable after its scope is gone.

use std::collections::HashMap;

use crate::frontend::ast::{DeclId, Span, Type};

/// Index into the symbol arena
pub type SymbolId = usize;

/// A declared variable
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub decl: DeclId,
    pub ty: Type,
    /// Span of the declared name.
    pub span: Span,
}

/// Kind of scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Program,
    Loop,
    Branch,
    Block,
}

#[derive(Debug)]
pub struct Scope {
    pub kind: ScopeKind,
    pub symbols: HashMap<String, SymbolId>,
}

impl Scope {
    pub fn new(kind: ScopeKind) -> Self {
        Self {
            kind,
            symbols: HashMap::new(),
        }
    }
}

/// Stack of scopes over an arena of symbols
#[derive(Debug)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    scopes: Vec<Scope>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Create a table holding only the root scope.
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
            scopes: vec![Scope::new(ScopeKind::Program)],
        }
    }

    pub fn enter_scope(&mut self, kind: ScopeKind) {
        tracing::trace!(?kind, depth = self.scopes.len(), "enter scope");
        self.scopes.push(Scope::new(kind));
    }

    /// Pop the innermost scope; the root scope is never popped.
    pub fn exit_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
        tracing::trace!(depth = self.scopes.len(), "exit scope");
    }

    /// Bind a symbol in the innermost scope.
    ///
    /// ## Errors
    /// Returns the id of the existing symbol if the name is already bound in this scope.
    pub fn define(&mut self, symbol: Symbol) -> Result<SymbolId, SymbolId> {
        if let Some(prev) = self.lookup_local(&symbol.name) {
            return Err(prev);
        }
        let id = self.symbols.len();
        tracing::debug!(name = %symbol.name, decl = %symbol.decl, ty = %symbol.ty, "bind");
        if let Some(scope) = self.scopes.last_mut() {
            scope.symbols.insert(symbol.name.clone(), id);
        }
        self.symbols.push(symbol);
        Ok(id)
    }

    /// Look up a name from the innermost scope outwards
    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.scopes.iter().rev().find_map(|s| s.symbols.get(name).copied())
    }

    /// Look up a name only in the innermost scope
    pub fn lookup_local(&self, name: &str) -> Option<SymbolId> {
        self.scopes.last().and_then(|s| s.symbols.get(name).copied())
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(name: &str, decl: u32, ty: Type) -> Symbol {
        Symbol {
            name: name.to_string(),
            decl: DeclId(decl),
            ty,
            span: Span::default(),
        }
    }

    #[test]
    fn test_inner_binding_invisible_after_exit() {
        let mut table = SymbolTable::new();
        table.enter_scope(ScopeKind::Loop);
        table.define(sym("y", 0, Type::INT)).unwrap();
        assert!(table.lookup("y").is_some());
        table.exit_scope();
        assert!(table.lookup("y").is_none());
    }

    #[test]
    fn test_shadowing_resolves_innermost_then_outer() {
        let mut table = SymbolTable::new();
        let outer = table.define(sym("x", 0, Type::INT)).unwrap();
        table.enter_scope(ScopeKind::Branch);
        let inner = table.define(sym("x", 1, Type::BOOL)).unwrap();
        assert_eq!(table.lookup("x"), Some(inner));
        table.exit_scope();
        assert_eq!(table.lookup("x"), Some(outer));
        assert_eq!(table.get(inner).map(|s| s.decl), Some(DeclId(1)));
    }

    #[test]
    fn test_redefinition_in_same_scope_returns_previous() {
        let mut table = SymbolTable::new();
        let first = table.define(sym("w", 0, Type::INT)).unwrap();
        assert_eq!(table.define(sym("w", 1, Type::INT)), Err(first));
        assert_eq!(table.get(first).map(|s| s.decl), Some(DeclId(0)));
        assert!(table.get(first + 1).is_none());
    }

    #[test]
    fn test_root_scope_survives_extra_exit() {
        let mut table = SymbolTable::new();
        table.exit_scope();
        let a = table.define(sym("a", 0, Type::INT)).unwrap();
        table.enter_scope(ScopeKind::Block);
        table.exit_scope();
        assert_eq!(table.lookup("a"), Some(a));
    }
}
