/// Deepest nesting of parentheses, unary operators, operator chains, blocks and tuple types the
/// parser accepts. Every later pass recurses over the tree, so this also bounds their stack use.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parser core type and entrypoints.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`.
/// - Recovery is strictly local: a missing token is reported and treated as present, a missing
///   expression becomes [`ExprKind::Error`]. The parser never skips tokens to resynchronize.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// One-token lookahead.
    ahead: Token,
    /// End of the most recently consumed token.
    prev_end: Pos,
    errors: Vec<CompileError>,
    /// Ordinal handed to the next declaration.
    next_decl: u32,
    /// Current nesting depth, bounded by [`MAX_NESTING_DEPTH`].
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over `source`; the first token is pulled immediately.
    pub fn new(source: &'a str) -> Self {
        let mut parser = Self {
            lexer: Lexer::new(source),
            ahead: Token::new(TokenKind::Eof, Span::default()),
            prev_end: Pos::default(),
            errors: Vec::new(),
            next_decl: 0,
            depth: 0,
        };
        parser.ahead = parser.pull();
        parser
    }

    /// Parse a whole program, returning the tree together with every diagnostic.
    ///
    /// The tree is always complete; error nodes stand in for anything that failed to parse.
    pub fn parse_recovering(mut self) -> (Program, Vec<CompileError>) {
        let program = self.program();
        (program, self.errors)
    }

    /// Parse a whole program.
    ///
    /// ## Errors
    /// Returns every lexical and syntax diagnostic if any were recorded.
    pub fn parse(self) -> Result<Program, Vec<CompileError>> {
        let (program, errors) = self.parse_recovering();
        if errors.is_empty() { Ok(program) } else { Err(errors) }
    }

    /// `Program := Stmt* 'return' Expr ';' EOF`
    fn program(&mut self) -> Program {
        let start = self.peek().span.start;
        let body = self.stmt_list(start);
        self.expect_keyword(KeywordId::Return, "program");
        let ret = self.expr("return expression", Prec::Bot);
        self.expect_punct(PunctuationId::Semicolon, "return statement");
        if !self.is_at_end() {
            self.error_expected("end of file", "program");
        }
        Program {
            body,
            ret,
            span: Span::new(start, self.prev_end),
        }
    }
}
