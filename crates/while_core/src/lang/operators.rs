//! Operator vocabulary.
//!
//! This module defines the canonical operator set (symbol operators like `+` and word operators
//! like `and`) along with the binding powers the expression parser climbs on.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Word operators (`and`, `or`, `not`) are lexed as keywords; their entries here have
//!   [`OperatorInfo::is_keyword_spelling`] set to `true`.
//! - Infix operators carry a `(left, right)` [`BindingPower`] pair. An operator continues the current
//!   expression while its left power is at least the caller's minimum; its right operand is then
//!   parsed at the right power. A right power one class above the left gives left associativity.
//!
//! ## Examples
//! ```rust
//! use while_core::lang::operators::{self, OperatorId, Prec};
//!
//! assert_eq!(operators::from_str("<="), Some(OperatorId::LtEq));
//! let bp = operators::infix_binding(OperatorId::Plus).unwrap();
//! assert_eq!((bp.left, bp.right), (Prec::Add, Prec::Mul));
//! ```

/// Precedence classes, lowest binding first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prec {
    /// Base level: a full expression.
    Bot,
    Or,
    And,
    Not,
    Rel,
    Add,
    Mul,
    Unary,
}

/// `(left, right)` binding pair of an infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingPower {
    pub left: Prec,
    pub right: Prec,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Assignment
    Eq,

    // Word operators
    And,
    Or,
    Not,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    /// Binding pair when used infix; `None` for prefix-only operators and `=`.
    pub infix: Option<BindingPower>,
    /// Operand precedence when used prefix.
    pub prefix: Option<Prec>,
    pub is_keyword_spelling: bool,
}

/// Binding pair of tuple projection `t(i)`.
///
/// Projection is spelled with an opening parenthesis in infix position, so it has no entry in
/// [`OPERATORS`]. It shares the additive class: `a + t(0)` groups as `(a + t)(0)`.
pub const PROJECTION: BindingPower = bp(Prec::Add, Prec::Mul);

/// Registry of all operators, in [`OperatorId`] discriminant order.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Plus, "+", Some(bp(Prec::Add, Prec::Mul)), Some(Prec::Unary), false),
    op(OperatorId::Minus, "-", Some(bp(Prec::Add, Prec::Mul)), Some(Prec::Unary), false),
    op(OperatorId::Star, "*", Some(bp(Prec::Mul, Prec::Unary)), None, false),
    op(OperatorId::EqEq, "==", Some(bp(Prec::Rel, Prec::Add)), None, false),
    op(OperatorId::NotEq, "!=", Some(bp(Prec::Rel, Prec::Add)), None, false),
    op(OperatorId::Lt, "<", Some(bp(Prec::Rel, Prec::Add)), None, false),
    op(OperatorId::LtEq, "<=", Some(bp(Prec::Rel, Prec::Add)), None, false),
    op(OperatorId::Gt, ">", Some(bp(Prec::Rel, Prec::Add)), None, false),
    op(OperatorId::GtEq, ">=", Some(bp(Prec::Rel, Prec::Add)), None, false),
    op(OperatorId::Eq, "=", None, None, false),
    op(OperatorId::And, "and", Some(bp(Prec::And, Prec::Not)), None, true),
    op(OperatorId::Or, "or", Some(bp(Prec::Or, Prec::And)), None, true),
    op(OperatorId::Not, "not", None, Some(Prec::Not), true),
];

/// Return the full metadata entry for an operator.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    &OPERATORS[id as usize]
}

/// Return the canonical spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the infix binding pair, if `id` can be used as a binary operator.
pub fn infix_binding(id: OperatorId) -> Option<BindingPower> {
    info_for(id).infix
}

/// Return the operand precedence, if `id` can be used as a prefix operator.
pub fn prefix_binding(id: OperatorId) -> Option<Prec> {
    info_for(id).prefix
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn bp(left: Prec, right: Prec) -> BindingPower {
    BindingPower { left, right }
}

const fn op(
    id: OperatorId,
    spelling: &'static str,
    infix: Option<BindingPower>,
    prefix: Option<Prec>,
    is_keyword_spelling: bool,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        infix,
        prefix,
        is_keyword_spelling,
    }
}
