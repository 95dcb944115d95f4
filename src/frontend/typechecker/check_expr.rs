//! Expression typing.
//!
//! Each `check_*` helper returns the expression's type and [`TypeChecker::check_expr`] records
//! it on the node. Operators report a mismatched operand and still yield their nominal result
//! type; only projection, whose result depends on the operand, falls back to `Type::Error`.

use crate::frontend::ast::*;
use crate::frontend::diagnostics::errors;

use super::TypeChecker;

impl TypeChecker {
    // ========================================================================
    // Expressions
    // ========================================================================

    pub(crate) fn check_expr(&mut self, expr: &mut Expr) -> Type {
        let ty = match &mut expr.kind {
            ExprKind::Bool(_) => Type::BOOL,
            ExprKind::Int(_) => Type::INT,
            ExprKind::Name(name_ref) => self.check_name(name_ref, expr.span),
            ExprKind::Tuple(elems) => Type::Tuple(elems.iter_mut().map(|e| self.check_expr(e)).collect()),
            ExprKind::Unary(op, operand) => self.check_unary(*op, operand),
            ExprKind::Binary(lhs, op, rhs) => self.check_binary(*op, lhs, rhs),
            ExprKind::Error => Type::Error,
        };
        expr.ty = Some(ty.clone());
        ty
    }

    fn check_name(&mut self, name_ref: &mut NameRef, span: Span) -> Type {
        match self.symbols.lookup(&name_ref.name).and_then(|id| self.symbols.get(id)) {
            Some(symbol) => {
                name_ref.decl = Some(symbol.decl);
                symbol.ty.clone()
            }
            None => {
                self.errors.push(errors::not_found(&name_ref.name, span));
                Type::Error
            }
        }
    }

    fn check_unary(&mut self, op: UnaryOp, operand: &mut Expr) -> Type {
        let expected = match op {
            UnaryOp::Not => Type::BOOL,
            UnaryOp::Plus | UnaryOp::Neg => Type::INT,
        };
        let ty = self.check_expr(operand);
        if !ty.compatible(&expected) {
            self.errors.push(errors::unary_operand_mismatch(
                &op.to_string(),
                &expected,
                &ty,
                operand.span,
            ));
        }
        expected
    }

    fn check_binary(&mut self, op: BinaryOp, lhs: &mut Expr, rhs: &mut Expr) -> Type {
        let (operand, result) = match op.class() {
            BinaryOpClass::Arithmetic => (Type::INT, Type::INT),
            BinaryOpClass::Relational => (Type::INT, Type::BOOL),
            BinaryOpClass::Logical => (Type::BOOL, Type::BOOL),
            BinaryOpClass::Projection => return self.check_projection(lhs, rhs),
        };
        let op_str = op.to_string();
        let expected = operand.to_string();
        for (side, e) in [("left-hand side", lhs), ("right-hand side", rhs)] {
            let ty = self.check_expr(e);
            if !ty.compatible(&operand) {
                self.errors
                    .push(errors::operand_mismatch(side, &op_str, &expected, &ty, e.span));
            }
        }
        result
    }

    /// `t(i)`: `t` must be a tuple and `i` an in-range integer literal.
    fn check_projection(&mut self, tuple: &mut Expr, index: &mut Expr) -> Type {
        let op_str = BinaryOp::Project.to_string();
        let tuple_ty = self.check_expr(tuple);
        let index_ty = self.check_expr(index);

        let literal = match index.kind {
            ExprKind::Int(i) => Some(i),
            _ => None,
        };
        let Some(i) = literal else {
            if index_ty.compatible(&Type::INT) {
                if !index_ty.is_error() {
                    self.errors.push(errors::tuple_index_not_literal(index.span));
                }
            } else {
                self.errors
                    .push(errors::operand_mismatch("right-hand side", &op_str, "int", &index_ty, index.span));
            }
            return Type::Error;
        };

        match tuple_ty {
            Type::Tuple(elems) => match usize::try_from(i).ok().and_then(|i| elems.get(i)) {
                Some(elem) => elem.clone(),
                None => {
                    let ty = Type::Tuple(elems.clone());
                    self.errors
                        .push(errors::tuple_index_out_of_range(i, &ty, elems.len(), index.span));
                    Type::Error
                }
            },
            Type::Error => Type::Error,
            other => {
                self.errors
                    .push(errors::operand_mismatch("left-hand side", &op_str, "tuple", &other, tuple.span));
                Type::Error
            }
        }
    }
}
