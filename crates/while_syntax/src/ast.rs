//! Abstract Syntax Tree definitions for While
//!
//! One tree is shared by every pass: the parser builds it, the type checker annotates it in place
//! (expression types and resolved declarations), and the renderers/evaluator walk it read-only.

use std::fmt;

use while_core::lang::operators::{self, BindingPower, OperatorId};
use while_core::lang::types::BaseTypeId;

// ============================================================================
// Source locations
// ============================================================================

/// A point in the source: byte offset plus 1-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub offset: usize,
    pub row: u32,
    pub col: u32,
}

impl Pos {
    pub fn new(offset: usize, row: u32, col: u32) -> Self {
        Self { offset, row, col }
    }
}

impl Default for Pos {
    fn default() -> Self {
        Self { offset: 0, row: 1, col: 1 }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// Source location span, `start` inclusive and `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `pos`.
    pub fn point(pos: Pos) -> Self {
        Self { start: pos, end: pos }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

pub type Ident = String;

/// Name used in place of an identifier the parser could not find.
pub const ERROR_IDENT: &str = "<error>";

// ============================================================================
// Types
// ============================================================================

/// Structural type of a declaration or expression.
///
/// Derived equality is structural: tuples compare by arity and element-wise. Use
/// [`Type::compatible`] when an already-diagnosed `Error` should match anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Base(BaseTypeId),
    Tuple(Vec<Type>),
    Error,
}

impl Type {
    pub const INT: Type = Type::Base(BaseTypeId::Int);
    pub const BOOL: Type = Type::Base(BaseTypeId::Bool);

    /// Structural equality where `Error` on either side (at any depth) matches.
    pub fn compatible(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Error, _) | (_, Type::Error) => true,
            (Type::Base(a), Type::Base(b)) => a == b,
            (Type::Tuple(a), Type::Tuple(b)) => a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.compatible(y)),
            _ => false,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Type::Error)
    }

    /// Flat identifier-safe encoding, e.g. `(int (bool int))` becomes `t_i_t_b_i__`.
    pub fn mangle(&self) -> String {
        let mut out = String::new();
        self.mangle_into(&mut out);
        out
    }

    fn mangle_into(&self, out: &mut String) {
        match self {
            Type::Base(b) => out.push(b.mangle_tag()),
            Type::Tuple(elems) => {
                out.push('t');
                for elem in elems {
                    out.push('_');
                    elem.mangle_into(out);
                }
                out.push('_');
            }
            Type::Error => out.push('e'),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Base(b) => write!(f, "{}", b.as_str()),
            Type::Tuple(elems) => {
                write!(f, "(")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{elem}")?;
                }
                write!(f, ")")
            }
            Type::Error => write!(f, "<error>"),
        }
    }
}

// ============================================================================
// Declarations and name references
// ============================================================================

/// Ordinal of a declaration, unique within one parsed program.
///
/// Name references hold a `DeclId` as a non-owning handle; the declaration itself is owned by the
/// statement that introduced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeclId(pub u32);

impl DeclId {
    pub fn ordinal(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `ty name = init;`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub id: DeclId,
    pub ty: Spanned<Type>,
    pub name: Spanned<Ident>,
    pub init: Expr,
}

/// Use of a name; `decl` is filled in by the type checker.
#[derive(Debug, Clone, PartialEq)]
pub struct NameRef {
    pub name: Ident,
    pub decl: Option<DeclId>,
}

impl NameRef {
    pub fn unresolved(name: impl Into<Ident>) -> Self {
        Self {
            name: name.into(),
            decl: None,
        }
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Block,
    pub ret: Expr,
    pub span: Span,
}

impl Program {
    /// All declarations in source order, including those nested in bodies.
    pub fn declarations(&self) -> Vec<&Declaration> {
        let mut out = Vec::new();
        collect_decls(&self.body, &mut out);
        out
    }
}

fn collect_decls<'a>(block: &'a Block, out: &mut Vec<&'a Declaration>) {
    for stmt in &block.stmts {
        match &stmt.kind {
            StmtKind::Decl(decl) => out.push(decl),
            StmtKind::Assign(_) => {}
            StmtKind::Block(inner) => collect_decls(inner, out),
            StmtKind::While(w) => collect_decls(&w.body, out),
            StmtKind::If(i) => collect_decls(&i.body, out),
            StmtKind::IfElse(ie) => {
                collect_decls(&ie.body, out);
                collect_decls(&ie.alt, out);
            }
        }
    }
}

/// Ordered statement list. Bodies of loops and conditionals open a scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    Decl(Declaration),
    Assign(Assign),
    /// Bare `{ ... }` block.
    Block(Block),
    While(While),
    If(If),
    IfElse(IfElse),
}

/// `name = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    pub target: Spanned<NameRef>,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct While {
    pub cond: Expr,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub cond: Expr,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfElse {
    pub cond: Expr,
    pub body: Block,
    pub alt: Block,
}

// ============================================================================
// Expressions
// ============================================================================

/// Expression node. `ty` is `None` until the type checker has visited it.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    pub ty: Option<Type>,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span, ty: None }
    }

    pub fn error(span: Span) -> Self {
        Self::new(ExprKind::Error, span)
    }

    /// Checked type, or `Error` when the checker has not run.
    pub fn ty(&self) -> &Type {
        self.ty.as_ref().unwrap_or(&Type::Error)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Binary(Box<Expr>, BinaryOp, Box<Expr>),
    Unary(UnaryOp, Box<Expr>),
    Bool(bool),
    Int(i64),
    Name(NameRef),
    Tuple(Vec<Expr>),
    Error,
}

/// Binary operators, including tuple projection `t(i)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
    Project,
}

/// Operand/result typing class of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOpClass {
    /// `int x int -> int`
    Arithmetic,
    /// `int x int -> bool`
    Relational,
    /// `bool x bool -> bool`
    Logical,
    /// `tuple x int -> element`
    Projection,
}

impl BinaryOp {
    /// Map an infix operator token to its AST operator.
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        Some(match id {
            OperatorId::Plus => BinaryOp::Add,
            OperatorId::Minus => BinaryOp::Sub,
            OperatorId::Star => BinaryOp::Mul,
            OperatorId::EqEq => BinaryOp::Eq,
            OperatorId::NotEq => BinaryOp::NotEq,
            OperatorId::Lt => BinaryOp::Lt,
            OperatorId::LtEq => BinaryOp::LtEq,
            OperatorId::Gt => BinaryOp::Gt,
            OperatorId::GtEq => BinaryOp::GtEq,
            OperatorId::And => BinaryOp::And,
            OperatorId::Or => BinaryOp::Or,
            OperatorId::Eq | OperatorId::Not => return None,
        })
    }

    /// Registry operator this node was parsed from; `None` for projection.
    pub fn operator_id(self) -> Option<OperatorId> {
        Some(match self {
            BinaryOp::Add => OperatorId::Plus,
            BinaryOp::Sub => OperatorId::Minus,
            BinaryOp::Mul => OperatorId::Star,
            BinaryOp::Eq => OperatorId::EqEq,
            BinaryOp::NotEq => OperatorId::NotEq,
            BinaryOp::Lt => OperatorId::Lt,
            BinaryOp::LtEq => OperatorId::LtEq,
            BinaryOp::Gt => OperatorId::Gt,
            BinaryOp::GtEq => OperatorId::GtEq,
            BinaryOp::And => OperatorId::And,
            BinaryOp::Or => OperatorId::Or,
            BinaryOp::Project => return None,
        })
    }

    pub fn binding(self) -> BindingPower {
        self.operator_id()
            .and_then(operators::infix_binding)
            .unwrap_or(operators::PROJECTION)
    }

    pub fn class(self) -> BinaryOpClass {
        match self {
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul => BinaryOpClass::Arithmetic,
            BinaryOp::Eq | BinaryOp::NotEq | BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
                BinaryOpClass::Relational
            }
            BinaryOp::And | BinaryOp::Or => BinaryOpClass::Logical,
            BinaryOp::Project => BinaryOpClass::Projection,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator_id() {
            Some(id) => write!(f, "{}", operators::as_str(id)),
            None => write!(f, "()"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Neg,
    Not,
}

impl UnaryOp {
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        match id {
            OperatorId::Plus => Some(UnaryOp::Plus),
            OperatorId::Minus => Some(UnaryOp::Neg),
            OperatorId::Not => Some(UnaryOp::Not),
            _ => None,
        }
    }

    pub fn operator_id(self) -> OperatorId {
        match self {
            UnaryOp::Plus => OperatorId::Plus,
            UnaryOp::Neg => OperatorId::Minus,
            UnaryOp::Not => OperatorId::Not,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", operators::as_str(self.operator_id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_equality_is_structural() {
        let ib = Type::Tuple(vec![Type::INT, Type::BOOL]);
        assert_eq!(ib, Type::Tuple(vec![Type::INT, Type::BOOL]));
        assert_ne!(ib, Type::Tuple(vec![Type::INT, Type::BOOL, Type::INT]));
        assert_ne!(ib, Type::Tuple(vec![Type::BOOL, Type::INT]));
    }

    #[test]
    fn error_type_is_compatible_with_anything() {
        let nested = Type::Tuple(vec![Type::INT, Type::Tuple(vec![Type::BOOL])]);
        assert!(Type::Error.compatible(&nested));
        assert!(nested.compatible(&Type::Tuple(vec![Type::INT, Type::Error])));
        assert!(!nested.compatible(&Type::INT));
    }

    #[test]
    fn type_display_and_mangle() {
        let ty = Type::Tuple(vec![Type::INT, Type::Tuple(vec![Type::BOOL, Type::INT])]);
        assert_eq!(ty.to_string(), "(int, (bool, int))");
        assert_eq!(ty.mangle(), "t_i_t_b_i__");
    }

    #[test]
    fn span_merge_covers_both() {
        let a = Span::new(Pos::new(0, 1, 1), Pos::new(3, 1, 4));
        let b = Span::new(Pos::new(6, 2, 1), Pos::new(8, 2, 3));
        let m = a.merge(b);
        assert_eq!(m.start, a.start);
        assert_eq!(m.end, b.end);
        assert_eq!(m.len(), 8);
    }
}
