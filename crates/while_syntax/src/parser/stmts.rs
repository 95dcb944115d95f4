/// Statement parsing.
///
/// ```text
/// Stmt       := DeclStmt | AssignStmt | WhileStmt | IfStmt | '{' Stmt* '}' | ';'
/// DeclStmt   := Type Identifier '=' Expr ';'
/// AssignStmt := Identifier '=' Expr ';'
/// WhileStmt  := 'while' Expr '{' Stmt* '}'
/// IfStmt     := 'if' Expr '{' Stmt* '}' ('else' '{' Stmt* '}')?
/// ```
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// Parse statements until a token that cannot start one. Stray `;` are empty statements.
    fn stmt_list(&mut self, start: Pos) -> Block {
        let mut stmts = Vec::new();
        loop {
            while self.match_punct(PunctuationId::Semicolon) {}
            let Some(stmt) = self.statement() else {
                break;
            };
            stmts.push(stmt);
        }
        let end = stmts.last().map_or(start, |s: &Stmt| s.span.end);
        Block {
            stmts,
            span: Span::new(start, end),
        }
    }

    fn statement(&mut self) -> Option<Stmt> {
        let start = self.peek().span.start;
        if self.peek().kind.starts_type() {
            let decl = self.declaration();
            return Some(Stmt::new(StmtKind::Decl(decl), Span::new(start, self.prev_end)));
        }
        let kind = match self.peek().kind {
            TokenKind::Ident(_) => StmtKind::Assign(self.assignment()),
            TokenKind::Keyword(KeywordId::While) => {
                self.advance();
                let cond = self.expr("while statement", Prec::Bot);
                let body = self.body("while statement");
                StmtKind::While(While { cond, body })
            }
            TokenKind::Keyword(KeywordId::If) => self.if_statement(),
            TokenKind::Punctuation(PunctuationId::LBrace) => StmtKind::Block(self.body("block statement")),
            _ => return None,
        };
        Some(Stmt::new(kind, Span::new(start, self.prev_end)))
    }

    fn declaration(&mut self) -> Declaration {
        let ty = self.parse_type("declaration statement");
        let name = self.expect_ident("declaration statement");
        self.expect_op(OperatorId::Eq, "declaration statement");
        let init = self.expr("declaration statement", Prec::Bot);
        self.expect_punct(PunctuationId::Semicolon, "declaration statement");
        let id = DeclId(self.next_decl);
        self.next_decl += 1;
        tracing::trace!(name = %name.node, ordinal = id.0, "declaration");
        Declaration { id, ty, name, init }
    }

    fn assignment(&mut self) -> Assign {
        let name = self.expect_ident("assignment statement");
        let target = Spanned::new(NameRef::unresolved(name.node), name.span);
        self.expect_op(OperatorId::Eq, "assignment statement");
        let value = self.expr("assignment statement", Prec::Bot);
        self.expect_punct(PunctuationId::Semicolon, "assignment statement");
        Assign { target, value }
    }

    fn if_statement(&mut self) -> StmtKind {
        self.advance();
        let cond = self.expr("if statement", Prec::Bot);
        let body = self.body("if statement");
        if self.match_keyword(KeywordId::Else) {
            let alt = self.body("else statement");
            StmtKind::IfElse(IfElse { cond, body, alt })
        } else {
            StmtKind::If(If { cond, body })
        }
    }

    /// `'{' Stmt* '}'`
    fn body(&mut self, ctxt: &str) -> Block {
        let start = self.peek().span.start;
        if !self.descend() {
            self.skip_nested(true);
            return Block {
                stmts: Vec::new(),
                span: Span::new(start, self.prev_end.max(start)),
            };
        }
        self.expect_punct(PunctuationId::LBrace, ctxt);
        let mut block = self.stmt_list(start);
        self.expect_punct(PunctuationId::RBrace, ctxt);
        block.span = Span::new(start, self.prev_end);
        self.ascend();
        block
    }
}
