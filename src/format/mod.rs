//! While source formatter
//!
//! Formatting is canonical rendering: parse, then emit the tree in [`RenderMode::Canonical`].
//! Binary expressions come out fully parenthesized and every statement sits on its own line, so
//! formatting is idempotent and the output re-parses to the same tree.

mod config;
mod writer;

pub use config::FormatConfig;
pub use writer::FormatWriter;

use crate::backend::{RenderMode, render};
use crate::frontend::diagnostics::CompileError;
use crate::frontend::parser;

/// Format While source code with default settings
///
/// ## Errors
/// Returns the lexical and syntax diagnostics if the source does not parse.
pub fn format_source(source: &str) -> Result<String, Vec<CompileError>> {
    format_source_with_config(source, &FormatConfig::default())
}

/// Format While source code with custom configuration
///
/// ## Errors
/// Returns the lexical and syntax diagnostics if the source does not parse.
pub fn format_source_with_config(source: &str, config: &FormatConfig) -> Result<String, Vec<CompileError>> {
    let ast = parser::parse(source)?;
    Ok(render(&ast, RenderMode::Canonical, config))
}

/// Check if source code is already formatted
///
/// ## Errors
/// Returns the lexical and syntax diagnostics if the source does not parse.
pub fn check_formatted(source: &str) -> Result<bool, Vec<CompileError>> {
    let formatted = format_source(source)?;
    Ok(source == formatted)
}

/// Line diff between `source` and its formatted form, or `None` if already formatted.
///
/// ## Errors
/// Returns the lexical and syntax diagnostics if the source does not parse.
pub fn format_diff(source: &str) -> Result<Option<String>, Vec<CompileError>> {
    let formatted = format_source(source)?;

    if source == formatted {
        return Ok(None);
    }

    let mut diff = String::new();
    let original_lines: Vec<&str> = source.lines().collect();
    let formatted_lines: Vec<&str> = formatted.lines().collect();

    for i in 0..original_lines.len().max(formatted_lines.len()) {
        let orig = original_lines.get(i).copied();
        let fmt = formatted_lines.get(i).copied();
        if orig == fmt {
            continue;
        }
        if let Some(line) = orig {
            diff.push_str(&format!("-{:4} | {}\n", i + 1, line));
        }
        if let Some(line) = fmt {
            diff.push_str(&format!("+{:4} | {}\n", i + 1, line));
        }
    }

    Ok(Some(diff))
}
