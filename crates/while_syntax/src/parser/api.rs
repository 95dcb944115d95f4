/// Parse source text into an AST [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Errors
/// Returns `Err(Vec<CompileError>)` with every lexical and syntax diagnostic if any occurred.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<Program, Vec<CompileError>> {
    Parser::new(source).parse()
}

/// Parse source text, always producing a tree (with error nodes where parsing failed).
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_recovering(source: &str) -> (Program, Vec<CompileError>) {
    Parser::new(source).parse_recovering()
}
