//! Statement checking: declarations, assignments, control flow.

use crate::frontend::ast::*;
use crate::frontend::diagnostics::errors;
use crate::frontend::symbols::{ScopeKind, Symbol};

use super::TypeChecker;

impl TypeChecker {
    // ========================================================================
    // Statements
    // ========================================================================

    pub(crate) fn check_stmts(&mut self, stmts: &mut [Stmt]) {
        for stmt in stmts {
            self.check_statement(stmt);
        }
    }

    pub(crate) fn check_statement(&mut self, stmt: &mut Stmt) {
        match &mut stmt.kind {
            StmtKind::Decl(decl) => self.check_declaration(decl),
            StmtKind::Assign(assign) => self.check_assignment(assign),
            StmtKind::Block(block) => self.check_body(block, ScopeKind::Block),
            StmtKind::While(w) => {
                self.check_condition(&mut w.cond, "a while");
                self.check_body(&mut w.body, ScopeKind::Loop);
            }
            StmtKind::If(i) => {
                self.check_condition(&mut i.cond, "an if");
                self.check_body(&mut i.body, ScopeKind::Branch);
            }
            StmtKind::IfElse(ie) => {
                self.check_condition(&mut ie.cond, "an if");
                self.check_body(&mut ie.body, ScopeKind::Branch);
                self.check_body(&mut ie.alt, ScopeKind::Branch);
            }
        }
    }

    /// Check a body in its own scope.
    fn check_body(&mut self, block: &mut Block, kind: ScopeKind) {
        self.symbols.enter_scope(kind);
        self.check_stmts(&mut block.stmts);
        self.symbols.exit_scope();
    }

    fn check_condition(&mut self, cond: &mut Expr, construct: &str) {
        let ty = self.check_expr(cond);
        if !ty.compatible(&Type::BOOL) {
            self.errors.push(errors::condition_not_bool(construct, &ty, cond.span));
        }
    }

    /// The name is bound even when the initializer mismatches, so later uses still resolve.
    fn check_declaration(&mut self, decl: &mut Declaration) {
        let init_ty = self.check_expr(&mut decl.init);
        if !decl.ty.node.compatible(&init_ty) {
            self.errors.push(errors::decl_mismatch(
                &decl.name.node,
                &decl.ty.node,
                &init_ty,
                decl.init.span,
            ));
        }

        if decl.name.node == ERROR_IDENT {
            return;
        }
        let symbol = Symbol {
            name: decl.name.node.clone(),
            decl: decl.id,
            ty: decl.ty.node.clone(),
            span: decl.name.span,
        };
        if let Err(prev) = self.symbols.define(symbol) {
            let prev_span = self.symbols.get(prev).map_or(decl.name.span, |s| s.span);
            self.errors
                .push(errors::redeclaration(&decl.name.node, decl.name.span, prev_span));
        }
    }

    fn check_assignment(&mut self, assign: &mut Assign) {
        let value_ty = self.check_expr(&mut assign.value);
        let name = assign.target.node.name.as_str();
        if name == ERROR_IDENT {
            return;
        }

        let Some(symbol) = self.symbols.lookup(name).and_then(|id| self.symbols.get(id)) else {
            self.errors.push(errors::not_found(name, assign.target.span));
            return;
        };
        assign.target.node.decl = Some(symbol.decl);
        if !symbol.ty.compatible(&value_ty) {
            self.errors.push(errors::assign_mismatch(
                name,
                &symbol.ty,
                &value_ty,
                assign.value.span,
                symbol.span,
            ));
        }
    }
}
