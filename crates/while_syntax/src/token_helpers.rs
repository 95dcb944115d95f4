//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to fold the word
//! operators (lexed as keywords) into operator ids.

use crate::lexer::TokenKind;
use while_core::lang::keywords::{self, KeywordId};
use while_core::lang::operators::{self, OperatorId};
use while_core::lang::punctuation::PunctuationId;

impl TokenKind {
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Operator id for symbol operators and word-operator keywords.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            TokenKind::Keyword(kw) => keywords::word_operator(*kw),
            _ => None,
        }
    }

    /// Operator id if this token can continue an expression as a binary operator.
    pub fn binary_operator(&self) -> Option<OperatorId> {
        self.operator_id().filter(|id| operators::infix_binding(*id).is_some())
    }

    /// Operator id if this token can start a prefix expression.
    pub fn prefix_operator(&self) -> Option<OperatorId> {
        self.operator_id().filter(|id| operators::prefix_binding(*id).is_some())
    }

    /// Return `true` for `int`, `bool` and `(`, the tokens that can start a declaration type.
    pub fn starts_type(&self) -> bool {
        matches!(self, TokenKind::Keyword(kw) if keywords::base_type(*kw).is_some())
            || self.is_punctuation(PunctuationId::LParen)
    }
}
