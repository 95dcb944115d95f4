//! Diagnostics and error reporting for While
//!
//! Every phase reports problems as [`CompileError`] values and keeps going; the driver decides
//! what to do with them. Rendering goes through `miette` so the source line, the primary span and
//! any secondary spans (e.g. "previous declaration here") are shown together.

use std::fmt;

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource, SourceSpan};

use crate::ast::Span;

/// A secondary source location attached to a diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

/// A compile-time error with location information
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(kind: ErrorKind, message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind,
            labels: Vec::new(),
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn lexical(message: String, span: Span) -> Self {
        Self::new(ErrorKind::Lexical, message, span)
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self::new(ErrorKind::Syntax, message, span)
    }

    pub fn name_error(message: String, span: Span) -> Self {
        Self::new(ErrorKind::Name, message, span)
    }

    pub fn type_error(message: String, span: Span) -> Self {
        Self::new(ErrorKind::Type, message, span)
    }

    /// Point at a second location, e.g. a previous declaration.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label {
            span,
            message: message.into(),
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Name,
    Type,
}

impl ErrorKind {
    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Lexical => "while::lexical",
            ErrorKind::Syntax => "while::syntax",
            ErrorKind::Name => "while::name",
            ErrorKind::Type => "while::type",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Name => write!(f, "name error"),
            ErrorKind::Type => write!(f, "type error"),
        }
    }
}

fn source_span(span: Span) -> SourceSpan {
    SourceSpan::from((span.start.offset, span.len()))
}

impl Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.notes.is_empty() && self.hints.is_empty() {
            return None;
        }
        let lines: Vec<String> = self
            .notes
            .iter()
            .map(|n| format!("note: {n}"))
            .chain(self.hints.iter().map(|h| format!("hint: {h}")))
            .collect();
        Some(Box::new(lines.join("\n")))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let primary = std::iter::once(LabeledSpan::at(source_span(self.span), self.message.clone()));
        let secondary = self
            .labels
            .iter()
            .map(|l| LabeledSpan::at(source_span(l.span), l.message.clone()));
        Some(Box::new(primary.chain(secondary)))
    }
}

/// A diagnostic bundled with the source it points into, ready for `miette` rendering.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
struct WithSource<'a> {
    error: &'a CompileError,
    named: NamedSource<String>,
}

impl Diagnostic for WithSource<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.error.code()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.error.help()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.error.labels()
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.named)
    }
}

/// Render diagnostics with source context (no ANSI colors).
pub fn render(file_name: &str, source: &str, errors: &[CompileError]) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut out = String::new();
    for error in errors {
        let diag = WithSource {
            error,
            named: NamedSource::new(file_name, source.to_string()),
        };
        if handler.render_report(&mut out, &diag).is_err() {
            // Fall back to the one-line form; rendering only fails on a broken span.
            out.push_str(&format!("{}:{}: {}\n", file_name, error.span.start, error));
        }
        out.push('\n');
    }
    out
}

/// One line per diagnostic: `file:row:col: kind: message`.
pub fn render_short(file_name: &str, errors: &[CompileError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}:{}: {}\n", file_name, e.span.start, e))
        .collect()
}

// ============================================================================
// Error catalog
// ============================================================================

/// Constructors for the diagnostics each phase emits, so wording lives in one place.
pub mod errors {
    use super::*;
    use crate::ast::Type;

    pub fn unexpected_char(c: char, span: Span) -> CompileError {
        CompileError::lexical(format!("unexpected character '{c}'"), span)
    }

    pub fn integer_out_of_range(digits: &str, span: Span) -> CompileError {
        CompileError::lexical(format!("integer literal '{digits}' out of range"), span)
            .with_note(format!("integer literals must not exceed {}", i64::MAX))
    }

    pub fn unexpected_token(expected: &str, found: &str, ctxt: &str, span: Span) -> CompileError {
        CompileError::syntax(format!("expected {expected}, got '{found}' while parsing {ctxt}"), span)
    }

    pub fn bad_tuple_commas(elems: usize, commas: usize, span: Span) -> CompileError {
        CompileError::syntax(
            format!("malformed tuple expression: {elems} element(s) separated by {commas} comma(s)"),
            span,
        )
        .with_hint("write `(e,)` for a 1-tuple and `(e1, e2, ...)` with one comma between elements otherwise")
    }

    pub fn nesting_too_deep(limit: usize, span: Span) -> CompileError {
        CompileError::syntax(format!("nesting exceeds the maximum depth of {limit}"), span)
            .with_hint("split deeply nested expressions or blocks into separate declarations")
    }

    pub fn not_found(name: &str, span: Span) -> CompileError {
        CompileError::name_error(format!("identifier '{name}' not found"), span)
    }

    pub fn redeclaration(name: &str, span: Span, previous: Span) -> CompileError {
        CompileError::name_error(format!("redeclaration of '{name}' in the same scope"), span)
            .with_label(previous, "previous declaration here")
    }

    pub fn decl_mismatch(name: &str, declared: &Type, found: &Type, span: Span) -> CompileError {
        CompileError::type_error(
            format!("initialization of declaration statement is of type '{found}' but '{name}' is declared of type '{declared}'"),
            span,
        )
    }

    pub fn assign_mismatch(name: &str, declared: &Type, found: &Type, span: Span, decl_span: Span) -> CompileError {
        CompileError::type_error(
            format!("right-hand side of assignment statement is of type '{found}' but '{name}' is declared of type '{declared}'"),
            span,
        )
        .with_label(decl_span, "previous declaration here")
    }

    pub fn condition_not_bool(construct: &str, found: &Type, span: Span) -> CompileError {
        CompileError::type_error(
            format!("condition of {construct} statement must be of type `bool` but is of type '{found}'"),
            span,
        )
    }

    pub fn operand_mismatch(side: &str, op: &str, expected: &str, found: &Type, span: Span) -> CompileError {
        CompileError::type_error(
            format!("{side} of operator '{op}' must be of type '{expected}' but is of type '{found}'"),
            span,
        )
    }

    pub fn unary_operand_mismatch(op: &str, expected: &Type, found: &Type, span: Span) -> CompileError {
        CompileError::type_error(
            format!("operand of operator '{op}' must be of type '{expected}' but is of type '{found}'"),
            span,
        )
    }

    pub fn tuple_index_not_literal(span: Span) -> CompileError {
        CompileError::type_error("tuple index must be an integer literal".to_string(), span)
            .with_note("projection indices are resolved statically")
    }

    pub fn tuple_index_out_of_range(index: i64, tuple: &Type, arity: usize, span: Span) -> CompileError {
        CompileError::type_error(
            format!("tuple index {index} out of range for type '{tuple}' with {arity} element(s)"),
            span,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Pos;

    fn span(start: usize, end: usize) -> Span {
        Span::new(Pos::new(start, 1, start as u32 + 1), Pos::new(end, 1, end as u32 + 1))
    }

    #[test]
    fn display_includes_kind() {
        let e = errors::not_found("x", span(0, 1));
        assert_eq!(e.to_string(), "name error: identifier 'x' not found");
    }

    #[test]
    fn redeclaration_carries_previous_span() {
        let e = errors::redeclaration("w", span(20, 21), span(4, 5));
        assert_eq!(e.labels.len(), 1);
        assert_eq!(e.labels[0].span, span(4, 5));
        assert_eq!(e.labels().map(|it| it.count()), Some(2));
    }

    #[test]
    fn render_shows_source_and_labels() {
        let src = "int w = 1; int w = 2; return w;";
        let e = errors::redeclaration("w", span(15, 16), span(4, 5));
        let out = render("t.while", src, &[e]);
        assert!(out.contains("redeclaration of 'w' in the same scope"));
        assert!(out.contains("previous declaration here"));
        assert!(out.contains("t.while"));
    }

    #[test]
    fn render_short_has_position() {
        let e = errors::not_found("y", Span::point(Pos::new(7, 2, 3)));
        assert_eq!(
            render_short("a.while", &[e]),
            "a.while:2:3: name error: identifier 'y' not found\n"
        );
    }
}
