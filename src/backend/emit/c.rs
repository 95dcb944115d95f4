//! C-like target: prelude, tuple typedefs, `main` wrapper and `printf` of the result.

use std::collections::HashSet;

use crate::frontend::ast::*;
use while_core::lang::types::BaseTypeId;

use super::{Emitter, ShowPart, show_parts};
use crate::backend::naming::c_init_temp;

/// C spelling of a type. Tuples map to their typedef'd struct.
pub(super) fn c_type(ty: &Type) -> String {
    match ty {
        Type::Base(BaseTypeId::Int) | Type::Error => "int".to_string(),
        Type::Base(BaseTypeId::Bool) => "bool".to_string(),
        Type::Tuple(_) => format!("tuple_{}", ty.mangle()),
    }
}

/// Distinct tuple types in first-use order, nested types before the tuples containing them.
#[derive(Debug, Default)]
struct TupleTypes {
    seen: HashSet<String>,
    ordered: Vec<Type>,
}

impl TupleTypes {
    fn add(&mut self, ty: &Type) {
        let Type::Tuple(elems) = ty else {
            return;
        };
        for elem in elems {
            self.add(elem);
        }
        if self.seen.insert(ty.mangle()) {
            self.ordered.push(ty.clone());
        }
    }

    fn stmts(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            match &stmt.kind {
                StmtKind::Decl(decl) => {
                    self.add(&decl.ty.node);
                    self.expr(&decl.init);
                }
                StmtKind::Assign(assign) => self.expr(&assign.value),
                StmtKind::Block(block) => self.stmts(&block.stmts),
                StmtKind::While(w) => {
                    self.expr(&w.cond);
                    self.stmts(&w.body.stmts);
                }
                StmtKind::If(i) => {
                    self.expr(&i.cond);
                    self.stmts(&i.body.stmts);
                }
                StmtKind::IfElse(ie) => {
                    self.expr(&ie.cond);
                    self.stmts(&ie.body.stmts);
                    self.stmts(&ie.alt.stmts);
                }
            }
        }
    }

    fn expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Binary(lhs, _, rhs) => {
                self.expr(lhs);
                self.expr(rhs);
            }
            ExprKind::Unary(_, operand) => self.expr(operand),
            ExprKind::Tuple(elems) => {
                for elem in elems {
                    self.expr(elem);
                }
            }
            ExprKind::Bool(_) | ExprKind::Int(_) | ExprKind::Name(_) | ExprKind::Error => {}
        }
        self.add(expr.ty());
    }
}

/// Whether `expr` reads a declared variable spelled `name`.
fn reads_name(expr: &Expr, name: &str) -> bool {
    match &expr.kind {
        ExprKind::Name(name_ref) => name_ref.decl.is_some() && name_ref.name == name,
        ExprKind::Binary(lhs, _, rhs) => reads_name(lhs, name) || reads_name(rhs, name),
        ExprKind::Unary(_, operand) => reads_name(operand, name),
        ExprKind::Tuple(elems) => elems.iter().any(|e| reads_name(e, name)),
        ExprKind::Bool(_) | ExprKind::Int(_) | ExprKind::Error => false,
    }
}

fn typedef(ty: &Type) -> String {
    let Type::Tuple(elems) = ty else {
        return String::new();
    };
    let fields: String = elems
        .iter()
        .enumerate()
        .map(|(i, elem)| format!(" {} _{i};", c_type(elem)))
        .collect();
    format!("typedef struct {{{fields} }} {};", c_type(ty))
}

impl Emitter {
    pub(super) fn c_program(&mut self, program: &Program) {
        let mut tuples = TupleTypes::default();
        tuples.stmts(&program.body.stmts);
        tuples.expr(&program.ret);
        tracing::debug!(count = tuples.ordered.len(), "tuple typedefs");

        let spacing = self.writer.config().blank_lines_after_prelude;
        self.writer.writeln("#include <stdbool.h>");
        self.writer.writeln("#include <stdio.h>");
        if !tuples.ordered.is_empty() {
            self.writer.blank_lines(spacing);
            for ty in &tuples.ordered {
                self.writer.writeln(&typedef(ty));
            }
        }
        self.writer.blank_lines(spacing);

        self.writer.writeln("int main() {");
        self.writer.indent();
        self.stmts(&program.body.stmts);
        self.c_print_return(&program.ret);
        self.writer.writeln("return 0;");
        self.writer.dedent();
        self.writer.writeln("}");
    }

    /// `int _x = init;`. A C declarator is in scope inside its own initializer, so an
    /// initializer reading the shadowed outer `_x` is evaluated into a temporary first.
    pub(super) fn c_declaration(&mut self, decl: &Declaration, name: &str, init: &str) {
        let ty = c_type(&decl.ty.node);
        if reads_name(&decl.init, &decl.name.node) {
            let temp = c_init_temp(&decl.name.node, decl.id);
            self.writer.writeln(&format!("{ty} {temp} = {init};"));
            self.writer.writeln(&format!("{ty} {name} = {temp};"));
        } else {
            self.writer.writeln(&format!("{ty} {name} = {init};"));
        }
    }

    fn c_print_return(&mut self, ret: &Expr) {
        let value = self.expr(ret);
        let ty = ret.ty();
        let access = match ty {
            Type::Tuple(_) => {
                self.writer.writeln(&format!("{} ret = {value};", c_type(ty)));
                "ret".to_string()
            }
            _ => value,
        };

        let mut parts = Vec::new();
        show_parts(ty, &access, &|a, i| format!("{a}._{i}"), &mut parts);
        let mut spec = String::new();
        let mut args = Vec::new();
        for part in parts {
            match part {
                ShowPart::Lit(text) => spec.push_str(&text),
                ShowPart::Int(e) => {
                    spec.push_str("%i");
                    args.push(e);
                }
                ShowPart::Bool(e) => {
                    spec.push_str("%s");
                    args.push(format!("{e} ? \"true\" : \"false\""));
                }
            }
        }
        self.writer
            .writeln(&format!("printf(\"{spec}\\n\", {});", args.join(", ")));
    }
}
