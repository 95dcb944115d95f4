//! Helpers shared by the integration test crates.

use whilec::ast::{Block, Expr, ExprKind, Program, Span, StmtKind};

/// Reset every span, so two trees compare by shape, types and resolved declarations only.
pub fn erase_spans(program: &mut Program) {
    program.span = Span::default();
    erase_block(&mut program.body);
    erase_expr(&mut program.ret);
}

fn erase_block(block: &mut Block) {
    block.span = Span::default();
    for stmt in &mut block.stmts {
        stmt.span = Span::default();
        match &mut stmt.kind {
            StmtKind::Decl(decl) => {
                decl.ty.span = Span::default();
                decl.name.span = Span::default();
                erase_expr(&mut decl.init);
            }
            StmtKind::Assign(assign) => {
                assign.target.span = Span::default();
                erase_expr(&mut assign.value);
            }
            StmtKind::Block(inner) => erase_block(inner),
            StmtKind::While(w) => {
                erase_expr(&mut w.cond);
                erase_block(&mut w.body);
            }
            StmtKind::If(i) => {
                erase_expr(&mut i.cond);
                erase_block(&mut i.body);
            }
            StmtKind::IfElse(ie) => {
                erase_expr(&mut ie.cond);
                erase_block(&mut ie.body);
                erase_block(&mut ie.alt);
            }
        }
    }
}

fn erase_expr(expr: &mut Expr) {
    expr.span = Span::default();
    match &mut expr.kind {
        ExprKind::Binary(lhs, _, rhs) => {
            erase_expr(lhs);
            erase_expr(rhs);
        }
        ExprKind::Unary(_, operand) => erase_expr(operand),
        ExprKind::Tuple(elems) => elems.iter_mut().for_each(erase_expr),
        ExprKind::Bool(_) | ExprKind::Int(_) | ExprKind::Name(_) | ExprKind::Error => {}
    }
}
