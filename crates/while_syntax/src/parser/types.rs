/// Type parsing.
///
/// `Type := 'int' | 'bool' | '(' (Type ','?)* ')'`
///
/// Commas between tuple entries are optional separators, so `(int bool)` and `(int, bool)`
/// denote the same type.
impl<'a> Parser<'a> {
    fn parse_type(&mut self, ctxt: &str) -> Spanned<Type> {
        let start = self.peek().span.start;
        if let TokenKind::Keyword(kw) = self.peek().kind {
            if let Some(base) = keywords::base_type(kw) {
                self.advance();
                return Spanned::new(Type::Base(base), Span::new(start, self.prev_end));
            }
        }
        if self.check_punct(PunctuationId::LParen) {
            if !self.descend() {
                self.skip_nested(true);
                return Spanned::new(Type::Error, Span::new(start, self.prev_end));
            }
            self.advance();
            let mut elems = Vec::new();
            loop {
                if self.match_punct(PunctuationId::Comma) {
                    continue;
                }
                if !self.peek().kind.starts_type() {
                    break;
                }
                elems.push(self.parse_type("tuple type").node);
            }
            self.expect_punct(PunctuationId::RParen, "tuple type");
            self.ascend();
            return Spanned::new(Type::Tuple(elems), Span::new(start, self.prev_end));
        }
        self.error_expected("type", ctxt);
        Spanned::new(Type::Error, Span::point(start))
    }
}
