//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value as Json, json};

use crate::backend::{self, Output, RenderMode};
use crate::format::{FormatConfig, format_diff, format_source};
use crate::frontend::ast::{Program, Span};
use crate::frontend::diagnostics::{self, CompileError};
use crate::frontend::lexer::{Lexer, TokenKind};
use crate::frontend::{parser, typechecker};

use super::{CliError, CliResult, DiagnosticFormat, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during compilation.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Extension of While source files.
const SOURCE_EXTENSION: &str = "while";

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

fn diagnostics_error(file_name: &str, source: &str, errs: &[CompileError]) -> CliError {
    let rendered = diagnostics::render(file_name, source, errs);
    CliError::failure(rendered.trim_end())
}

/// Parse and check, rendering any diagnostics into the error.
pub fn compile(file_name: &str, source: &str) -> CliResult<Program> {
    let mut ast = parser::parse(source).map_err(|errs| diagnostics_error(file_name, source, &errs))?;
    typechecker::check(&mut ast).map_err(|errs| diagnostics_error(file_name, source, &errs))?;
    Ok(ast)
}

/// Lex and display tokens.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let mut errors = Vec::new();
    for tok in Lexer::new(&source) {
        if let TokenKind::Error(e) = &tok.kind {
            errors.push(e.to_compile_error(tok.span));
        }
        println!("{:<8} {}", tok.span.start.to_string(), tok);
    }
    if errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(diagnostics_error(file_path, &source, &errors))
    }
}

/// Parse and display AST.
pub fn parse_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    match parser::parse(&source) {
        Ok(ast) => {
            println!("{:#?}", ast);
            Ok(ExitCode::SUCCESS)
        }
        Err(errs) => Err(diagnostics_error(file_path, &source, &errs)),
    }
}

/// Type check a file.
pub fn check_file(file_path: &str, format: DiagnosticFormat) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let errs = match parser::parse(&source) {
        Ok(mut ast) => typechecker::check(&mut ast).err().unwrap_or_default(),
        Err(errs) => errs,
    };

    match format {
        DiagnosticFormat::Json => {
            println!("{}", diagnostics_json(file_path, &errs));
            if errs.is_empty() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        DiagnosticFormat::Human if errs.is_empty() => {
            println!("✓ Type check passed!");
            Ok(ExitCode::SUCCESS)
        }
        DiagnosticFormat::Human => Err(diagnostics_error(file_path, &source, &errs)),
    }
}

fn span_json(span: Span) -> Json {
    json!({
        "start": { "offset": span.start.offset, "row": span.start.row, "col": span.start.col },
        "end": { "offset": span.end.offset, "row": span.end.row, "col": span.end.col },
    })
}

/// Machine-readable diagnostics for `check --format json`.
pub fn diagnostics_json(file_path: &str, errs: &[CompileError]) -> Json {
    let diagnostics: Vec<Json> = errs
        .iter()
        .map(|e| {
            json!({
                "code": e.kind.code(),
                "kind": e.kind.to_string(),
                "message": e.message,
                "span": span_json(e.span),
                "labels": e.labels.iter().map(|l| json!({
                    "message": l.message,
                    "span": span_json(l.span),
                })).collect::<Vec<_>>(),
                "notes": e.notes,
                "hints": e.hints,
            })
        })
        .collect();
    json!({
        "file": file_path,
        "ok": errs.is_empty(),
        "diagnostics": diagnostics,
    })
}

/// Render a checked file in another syntax.
pub fn emit_file(file_path: &str, mode: RenderMode) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let ast = compile(file_path, &source)?;
    print!("{}", backend::render(&ast, mode, &FormatConfig::default()));
    Ok(ExitCode::SUCCESS)
}

/// Check and execute a file.
pub fn run_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    run_source(file_path, &source)
}

/// Check and execute source text, printing the program's value.
pub fn run_source(file_name: &str, source: &str) -> CliResult<ExitCode> {
    let ast = compile(file_name, source)?;
    let output = backend::run(&ast, RenderMode::Execute, &FormatConfig::default())
        .map_err(|e| {
            let code = miette::Diagnostic::code(&e).map(|c| c.to_string()).unwrap_or_default();
            CliError::failure(format!("Runtime error [{}]: {}", code, e))
        })?;
    match output {
        Output::Value(value) => println!("{}", value),
        Output::Text(text) => print!("{}", text),
    }
    Ok(ExitCode::SUCCESS)
}

/// Format While source files.
pub fn format_files(path: &str, check_mode: bool, diff_mode: bool) -> CliResult<ExitCode> {
    let path = Path::new(path);
    let files = collect_source_files(path);

    if files.is_empty() {
        return Err(CliError::failure(format!("No .{} files found", SOURCE_EXTENSION)));
    }

    let mut needs_formatting = false;
    let mut formatted_count = 0;
    let mut error_count = 0;

    for file_path in &files {
        let source = match fs::read_to_string(file_path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error reading {}: {}", file_path.display(), e);
                error_count += 1;
                continue;
            }
        };

        match format_source(&source) {
            Ok(formatted) => {
                let changed = source != formatted;

                if diff_mode && changed {
                    println!("--- {}", file_path.display());
                    if let Ok(Some(diff)) = format_diff(&source) {
                        print!("{}", diff);
                    }
                    println!();
                }

                if check_mode || diff_mode {
                    if changed {
                        if check_mode {
                            println!("Would reformat: {}", file_path.display());
                        }
                        needs_formatting = true;
                    }
                } else if changed {
                    if let Err(e) = fs::write(file_path, &formatted) {
                        eprintln!("Error writing {}: {}", file_path.display(), e);
                        error_count += 1;
                    } else {
                        println!("Formatted: {}", file_path.display());
                        formatted_count += 1;
                    }
                }
            }
            Err(errs) => {
                let name = file_path.display().to_string();
                eprint!("{}", diagnostics::render_short(&name, &errs));
                error_count += 1;
            }
        }
    }

    if check_mode || diff_mode {
        if needs_formatting {
            let msg = if diff_mode { "need formatting" } else { "would be reformatted" };
            return Err(CliError::failure(format!("\n{} file(s) {}", files.len(), msg)));
        }
        println!("✓ {} file(s) already formatted", files.len());
    } else {
        println!("\n✓ {} file(s) formatted, {} error(s)", formatted_count, error_count);
    }

    if error_count > 0 {
        return Err(CliError::new("", ExitCode::FAILURE));
    }

    Ok(ExitCode::SUCCESS)
}

fn collect_source_files(path: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if path.is_file() {
        if path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
            files.push(path.to_path_buf());
        }
    } else if path.is_dir() {
        if let Ok(entries) = fs::read_dir(path) {
            for entry in entries.flatten() {
                let entry_path = entry.path();
                if entry_path.is_dir() {
                    let name = entry_path.file_name().and_then(|n| n.to_str()).unwrap_or("");
                    if !name.starts_with('.') && name != "target" {
                        files.extend(collect_source_files(&entry_path));
                    }
                } else if entry_path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
                    files.push(entry_path);
                }
            }
        }
    }

    files.sort();
    files
}
