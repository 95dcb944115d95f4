//! Lexer for the While language
//!
//! Produces tokens lazily: the parser pulls one token at a time through [`Lexer::next_token`].
//! After the input is exhausted every further call returns another `Eof` token.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, LexError)

pub mod tokens;

pub use tokens::{LexError, Token, TokenKind, keyword_id};

use std::iter::Peekable;
use std::str::CharIndices;

use crate::ast::{Pos, Span};
use crate::diagnostics::CompileError;
use while_core::lang::operators::OperatorId;
use while_core::lang::punctuation;

/// Lexer for While source code.
///
/// Every rule is written in terms of one primitive, [`Lexer::accept_if`]: look at the next
/// character, and consume it only if it satisfies a predicate. A rejected character is left in
/// place for the next rule.
pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    pos: Pos,
    /// Set once the iterator adapter has yielded `Eof`.
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            pos: Pos::default(),
            finished: false,
        }
    }

    /// Current position (just past the last consumed character).
    pub fn pos(&self) -> Pos {
        self.pos
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    /// Consume the next character if `pred` accepts it.
    fn accept_if(&mut self, pred: impl FnOnce(char) -> bool) -> Option<char> {
        let &(_, c) = self.chars.peek()?;
        if !pred(c) {
            return None;
        }
        self.chars.next();
        self.pos.offset += c.len_utf8();
        if c == '\n' {
            self.pos.row += 1;
            self.pos.col = 1;
        } else {
            self.pos.col += 1;
        }
        Some(c)
    }

    fn accept(&mut self, expected: char) -> bool {
        self.accept_if(|c| c == expected).is_some()
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token {
        while self.accept_if(char::is_whitespace).is_some() {}

        let start = self.pos;
        let Some(c) = self.accept_if(|_| true) else {
            return Token::new(TokenKind::Eof, Span::point(start));
        };

        let kind = if let Some(id) = punctuation::from_char(c) {
            TokenKind::Punctuation(id)
        } else if let Some(kind) = self.scan_operator(c) {
            kind
        } else if c.is_ascii_digit() {
            self.scan_int(start)
        } else if c.is_ascii_alphabetic() {
            self.scan_identifier(start)
        } else {
            TokenKind::Error(LexError::UnexpectedChar(c))
        };

        let token = Token::new(kind, Span::new(start, self.pos));
        tracing::trace!(token = %token, span = %token.span, "token");
        token
    }

    fn scan_operator(&mut self, first: char) -> Option<TokenKind> {
        let id = match first {
            '+' => OperatorId::Plus,
            '-' => OperatorId::Minus,
            '*' => OperatorId::Star,
            '=' if self.accept('=') => OperatorId::EqEq,
            '=' => OperatorId::Eq,
            '<' if self.accept('=') => OperatorId::LtEq,
            '<' => OperatorId::Lt,
            '>' if self.accept('=') => OperatorId::GtEq,
            '>' => OperatorId::Gt,
            '!' if self.accept('=') => OperatorId::NotEq,
            '!' => return Some(TokenKind::Error(LexError::UnexpectedChar('!'))),
            _ => return None,
        };
        Some(TokenKind::Operator(id))
    }

    fn scan_int(&mut self, start: Pos) -> TokenKind {
        while self.accept_if(|c| c.is_ascii_digit()).is_some() {}
        let digits = &self.source[start.offset..self.pos.offset];
        match digits.parse::<i64>() {
            Ok(value) => TokenKind::Int(value),
            Err(_) => TokenKind::Error(LexError::IntegerOutOfRange(digits.to_string())),
        }
    }

    fn scan_identifier(&mut self, start: Pos) -> TokenKind {
        while self.accept_if(|c| c.is_ascii_alphanumeric()).is_some() {}
        let spelling = &self.source[start.offset..self.pos.offset];
        match keyword_id(spelling) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident(spelling.to_string()),
        }
    }
}

/// Yields every token up to and including the first `Eof`.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = matches!(token.kind, TokenKind::Eof);
        Some(token)
    }
}

/// Tokenize a whole source string.
///
/// ## Errors
/// Returns every lexical error if any character could not be tokenized. On success the token
/// stream always ends with an `Eof` token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    let tokens: Vec<Token> = Lexer::new(source).collect();
    let errors: Vec<CompileError> = tokens
        .iter()
        .filter_map(|t| match &t.kind {
            TokenKind::Error(e) => Some(e.to_compile_error(t.span)),
            _ => None,
        })
        .collect();
    if errors.is_empty() { Ok(tokens) } else { Err(errors) }
}
