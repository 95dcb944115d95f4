/// Token-stream helpers and error reporting.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Pulling/consuming tokens (`pull`, `peek`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Recording "expected X, got Y" diagnostics
/// - Bounding nesting depth (`descend`, `ascend`, `skip_nested`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Fetch the next real token, reporting (and dropping) lexical error tokens.
    fn pull(&mut self) -> Token {
        loop {
            let token = self.lexer.next_token();
            match &token.kind {
                TokenKind::Error(e) => self.errors.push(e.to_compile_error(token.span)),
                _ => return token,
            }
        }
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    fn peek(&self) -> &Token {
        &self.ahead
    }

    /// Consume the lookahead and return it.
    fn advance(&mut self) -> Token {
        let next = self.pull();
        let token = std::mem::replace(&mut self.ahead, next);
        self.prev_end = token.span.end;
        token
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Record `expected {expected}, got '{ahead}' while parsing {ctxt}` at the lookahead.
    fn error_expected(&mut self, expected: &str, ctxt: &str) {
        let found = self.peek().to_string();
        let span = self.peek().span;
        self.errors.push(errors::unexpected_token(expected, &found, ctxt, span));
    }

    /// Consume the given keyword or report it missing.
    fn expect_keyword(&mut self, id: KeywordId, ctxt: &str) -> bool {
        if self.match_keyword(id) {
            return true;
        }
        self.error_expected(&format!("'{}'", keywords::as_str(id)), ctxt);
        false
    }

    /// Consume the given punctuation or report it missing.
    fn expect_punct(&mut self, id: PunctuationId, ctxt: &str) -> bool {
        if self.match_punct(id) {
            return true;
        }
        self.error_expected(&format!("'{}'", punctuation::as_str(id)), ctxt);
        false
    }

    fn expect_op(&mut self, id: OperatorId, ctxt: &str) -> bool {
        if self.peek().kind.is_operator(id) {
            self.advance();
            return true;
        }
        self.error_expected(&format!("'{}'", operators::as_str(id)), ctxt);
        false
    }

    /// Consume an identifier, substituting [`ERROR_IDENT`] when there is none.
    fn expect_ident(&mut self, ctxt: &str) -> Spanned<Ident> {
        if let TokenKind::Ident(_) = self.peek().kind {
            let token = self.advance();
            if let TokenKind::Ident(name) = token.kind {
                return Spanned::new(name, token.span);
            }
        }
        self.error_expected("identifier", ctxt);
        Spanned::new(ERROR_IDENT.to_string(), Span::point(self.peek().span.start))
    }

    // ========================================================================
    // Nesting
    // ========================================================================

    /// Enter one nesting level, or report the construct at the lookahead as too deep.
    fn descend(&mut self) -> bool {
        if self.depth < MAX_NESTING_DEPTH {
            self.depth += 1;
            return true;
        }
        let span = self.peek().span;
        self.errors.push(errors::nesting_too_deep(MAX_NESTING_DEPTH, span));
        false
    }

    fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Skip the rejected construct at the lookahead so its closing delimiters cannot cascade.
    ///
    /// Stops before a `;` or an unmatched `)`/`}` at the starting level, or at end of file. With
    /// `one_group`, also stops right after the first balanced `(...)`/`{...}` group closes.
    fn skip_nested(&mut self, one_group: bool) {
        let mut open = 0usize;
        loop {
            match &self.peek().kind {
                TokenKind::Eof => return,
                TokenKind::Punctuation(PunctuationId::LParen | PunctuationId::LBrace) => open += 1,
                TokenKind::Punctuation(PunctuationId::RParen | PunctuationId::RBrace) => {
                    if open == 0 {
                        return;
                    }
                    open -= 1;
                    if open == 0 && one_group {
                        self.advance();
                        return;
                    }
                }
                TokenKind::Punctuation(PunctuationId::Semicolon) if open == 0 => return,
                _ => {}
            }
            self.advance();
        }
    }
}
