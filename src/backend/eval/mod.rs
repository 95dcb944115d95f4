//! Tree-walking evaluator
//!
//! Runs a checked program against one flat environment keyed by each declaration's execution
//! name (`name_N`), so shadowing declarations never collide even though scopes are gone at
//! runtime. Loops run until their condition is false; there is no iteration bound.

mod value;

pub use value::Value;

use std::collections::HashMap;
use std::fmt;

use crate::frontend::ast::*;

use super::RenderMode;
use super::naming::{decl_name, ref_name};

/// Failure to evaluate. Each variant is only reachable from a tree that did not pass checking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("unbound variable '{0}'")]
    Unbound(String),
    #[error("operator '{op}' cannot be applied to a value of kind {kind}")]
    BadOperand { op: String, kind: &'static str },
    #[error("tuple index {index} out of range for a tuple of {len} element(s)")]
    IndexOutOfRange { index: i64, len: usize },
    #[error("cannot evaluate an erroneous expression")]
    ErrorNode,
}

impl miette::Diagnostic for EvalError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self {
            EvalError::Unbound(_) => "while::runtime::unbound",
            EvalError::BadOperand { .. } => "while::runtime::operand",
            EvalError::IndexOutOfRange { .. } => "while::runtime::index",
            EvalError::ErrorNode => "while::runtime::error_node",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("only programs that pass the type checker are guaranteed to evaluate"))
    }
}

/// Execute `program` and return the value of its `return` expression.
///
/// ## Errors
/// See [`EvalError`]; a checked program does not fail.
#[tracing::instrument(skip_all)]
pub fn execute(program: &Program) -> Result<Value, EvalError> {
    let mut evaluator = Evaluator::default();
    evaluator.stmts(&program.body.stmts)?;
    let value = evaluator.expr(&program.ret)?;
    tracing::debug!(%value, "program result");
    Ok(value)
}

#[derive(Debug, Default)]
struct Evaluator {
    env: HashMap<String, Value>,
}

impl Evaluator {
    fn stmts(&mut self, stmts: &[Stmt]) -> Result<(), EvalError> {
        for stmt in stmts {
            self.stmt(stmt)?;
        }
        Ok(())
    }

    fn stmt(&mut self, stmt: &Stmt) -> Result<(), EvalError> {
        match &stmt.kind {
            StmtKind::Decl(decl) => {
                let value = self.expr(&decl.init)?;
                let name = decl_name(&decl.name.node, decl.id, RenderMode::Execute);
                tracing::trace!(%name, %value, "declare");
                self.env.insert(name, value);
            }
            StmtKind::Assign(assign) => {
                let value = self.expr(&assign.value)?;
                let name = ref_name(&assign.target.node, RenderMode::Execute);
                if !self.env.contains_key(&name) {
                    return Err(EvalError::Unbound(name));
                }
                tracing::trace!(%name, %value, "assign");
                self.env.insert(name, value);
            }
            StmtKind::Block(block) => self.stmts(&block.stmts)?,
            StmtKind::While(w) => {
                while self.condition(&w.cond)? {
                    self.stmts(&w.body.stmts)?;
                }
            }
            StmtKind::If(i) => {
                if self.condition(&i.cond)? {
                    self.stmts(&i.body.stmts)?;
                }
            }
            StmtKind::IfElse(ie) => {
                if self.condition(&ie.cond)? {
                    self.stmts(&ie.body.stmts)?;
                } else {
                    self.stmts(&ie.alt.stmts)?;
                }
            }
        }
        Ok(())
    }

    fn condition(&self, cond: &Expr) -> Result<bool, EvalError> {
        match self.expr(cond)? {
            Value::Bool(b) => Ok(b),
            other => Err(EvalError::BadOperand {
                op: "condition".to_string(),
                kind: other.kind(),
            }),
        }
    }

    fn expr(&self, expr: &Expr) -> Result<Value, EvalError> {
        match &expr.kind {
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Int(v) => Ok(Value::Int(*v)),
            ExprKind::Name(name_ref) => {
                let name = ref_name(name_ref, RenderMode::Execute);
                self.env.get(&name).cloned().ok_or(EvalError::Unbound(name))
            }
            ExprKind::Tuple(elems) => elems
                .iter()
                .map(|e| self.expr(e))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Tuple),
            ExprKind::Unary(op, operand) => unary(*op, self.expr(operand)?),
            ExprKind::Binary(lhs, op, rhs) => binary(*op, self.expr(lhs)?, self.expr(rhs)?),
            ExprKind::Error => Err(EvalError::ErrorNode),
        }
    }
}

fn unary(op: UnaryOp, value: Value) -> Result<Value, EvalError> {
    match (op, value) {
        (UnaryOp::Plus, Value::Int(v)) => Ok(Value::Int(v)),
        (UnaryOp::Neg, Value::Int(v)) => Ok(Value::Int(v.wrapping_neg())),
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (op, other) => Err(EvalError::BadOperand {
            op: op.to_string(),
            kind: other.kind(),
        }),
    }
}

/// Integer arithmetic wraps on overflow.
fn binary(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    use Value::{Bool, Int};

    Ok(match (op, lhs, rhs) {
        (BinaryOp::Add, Int(a), Int(b)) => Int(a.wrapping_add(b)),
        (BinaryOp::Sub, Int(a), Int(b)) => Int(a.wrapping_sub(b)),
        (BinaryOp::Mul, Int(a), Int(b)) => Int(a.wrapping_mul(b)),
        (BinaryOp::Eq, Int(a), Int(b)) => Bool(a == b),
        (BinaryOp::NotEq, Int(a), Int(b)) => Bool(a != b),
        (BinaryOp::Lt, Int(a), Int(b)) => Bool(a < b),
        (BinaryOp::LtEq, Int(a), Int(b)) => Bool(a <= b),
        (BinaryOp::Gt, Int(a), Int(b)) => Bool(a > b),
        (BinaryOp::GtEq, Int(a), Int(b)) => Bool(a >= b),
        (BinaryOp::And, Bool(a), Bool(b)) => Bool(a && b),
        (BinaryOp::Or, Bool(a), Bool(b)) => Bool(a || b),
        (BinaryOp::Project, Value::Tuple(mut elems), Int(index)) => {
            let len = elems.len();
            match usize::try_from(index) {
                Ok(i) if i < len => elems.swap_remove(i),
                _ => return Err(EvalError::IndexOutOfRange { index, len }),
            }
        }
        (op, lhs, _) => {
            return Err(EvalError::BadOperand {
                op: op.to_string(),
                kind: lhs.kind(),
            });
        }
    })
}
