/// Expression parsing methods.
///
/// Precedence climbing: [`Parser::expr`] parses one primary-or-unary operand, then keeps folding
/// binary operators whose left binding power is at least `min`, parsing each right operand at the
/// operator's right binding power. Classes from loosest to tightest:
/// `or` < `and` < `not` < relational < additive (and projection) < `*` < unary.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expr(&mut self, ctxt: &str, min: Prec) -> Expr {
        let mut lhs = self.primary_or_unary(ctxt);
        // Each fold puts the tree one level deeper.
        let mut folds = 0usize;

        loop {
            if let Some(id) = self.peek().kind.binary_operator() {
                let (Some(bp), Some(op)) = (operators::infix_binding(id), BinaryOp::from_operator(id)) else {
                    break;
                };
                if bp.left < min {
                    break;
                }
                if !self.descend() {
                    lhs = self.reject_chain(lhs);
                    break;
                }
                folds += 1;
                self.advance();
                let rhs = self.expr(&format!("right-hand side of operator '{op}'"), bp.right);
                let span = lhs.span.merge(rhs.span);
                lhs = Expr::new(ExprKind::Binary(Box::new(lhs), op, Box::new(rhs)), span);
            } else if self.check_punct(PunctuationId::LParen) {
                if operators::PROJECTION.left < min {
                    break;
                }
                if !self.descend() {
                    lhs = self.reject_chain(lhs);
                    break;
                }
                folds += 1;
                self.advance();
                let index = self.expr("tuple projection", Prec::Bot);
                self.expect_punct(PunctuationId::RParen, "tuple projection");
                let span = Span::new(lhs.span.start, self.prev_end);
                lhs = Expr::new(ExprKind::Binary(Box::new(lhs), BinaryOp::Project, Box::new(index)), span);
            } else {
                break;
            }
        }

        self.depth -= folds;
        lhs
    }

    /// Drop the rest of an operator chain that nests too deeply.
    fn reject_chain(&mut self, lhs: Expr) -> Expr {
        self.skip_nested(false);
        Expr::error(Span::new(lhs.span.start, self.prev_end))
    }

    fn primary_or_unary(&mut self, ctxt: &str) -> Expr {
        let nests = self.peek().kind.prefix_operator().is_some() || self.check_punct(PunctuationId::LParen);
        if !nests {
            return self.operand(ctxt);
        }
        let start = self.peek().span.start;
        if !self.descend() {
            self.skip_nested(true);
            return Expr::error(Span::new(start, self.prev_end));
        }
        let expr = self.operand(ctxt);
        self.ascend();
        expr
    }

    fn operand(&mut self, ctxt: &str) -> Expr {
        let start = self.peek().span.start;

        if let Some(id) = self.peek().kind.prefix_operator() {
            if let (Some(prec), Some(op)) = (operators::prefix_binding(id), UnaryOp::from_operator(id)) {
                self.advance();
                let operand = self.expr("unary expression", prec);
                let span = Span::new(start, operand.span.end);
                return Expr::new(ExprKind::Unary(op, Box::new(operand)), span);
            }
        }

        let kind = match &self.peek().kind {
            TokenKind::Keyword(KeywordId::True) => ExprKind::Bool(true),
            TokenKind::Keyword(KeywordId::False) => ExprKind::Bool(false),
            TokenKind::Int(value) => ExprKind::Int(*value),
            TokenKind::Ident(name) => ExprKind::Name(NameRef::unresolved(name.clone())),
            TokenKind::Punctuation(PunctuationId::LParen) => return self.parenthesized(ctxt),
            _ => {
                self.error_expected("primary or unary expression", ctxt);
                return Expr::error(Span::point(start));
            }
        };
        let token = self.advance();
        Expr::new(kind, token.span)
    }

    /// `(e)` groups, `(e,)` is a 1-tuple, `(e1, ..., ek)` with k-1 commas is a k-tuple.
    fn parenthesized(&mut self, ctxt: &str) -> Expr {
        let start = self.peek().span.start;
        self.advance();

        let mut elems = Vec::new();
        let mut commas = 0usize;
        if !self.check_punct(PunctuationId::RParen) {
            elems.push(self.expr(ctxt, Prec::Bot));
            while self.match_punct(PunctuationId::Comma) {
                commas += 1;
                if self.check_punct(PunctuationId::RParen) || self.check_punct(PunctuationId::Comma) {
                    continue;
                }
                elems.push(self.expr("tuple expression", Prec::Bot));
            }
        }
        self.expect_punct(PunctuationId::RParen, "parenthesized expression");
        let span = Span::new(start, self.prev_end);

        let n = elems.len();
        match (n, commas) {
            (1, 0) => elems.pop().unwrap_or_else(|| Expr::error(span)),
            (1, 1) => Expr::new(ExprKind::Tuple(elems), span),
            (n, c) if n > 1 && c == n - 1 => Expr::new(ExprKind::Tuple(elems), span),
            _ => {
                self.errors.push(errors::bad_tuple_commas(n, commas, span));
                Expr::error(span)
            }
        }
    }
}
