//! CLI module for the While compiler
//!
//! ## Commands
//!
//! - `run <file>` / `run -c <code>` - Check and execute the program, printing its result
//! - `emit <file> --target while|c|python` - Render the checked program
//! - `check <file>` - Type check and report diagnostics (human or JSON)
//! - `fmt <file|dir>` - Format While source files
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use crate::backend::RenderMode;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Compiler and interpreter for the While language
#[derive(Parser, Debug)]
#[command(name = "whilec")]
#[command(version = VERSION)]
#[command(about = "Compiler and interpreter for the While language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to type check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Parse only (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check and execute the program, printing its result
    Run {
        /// Source file to run
        #[arg(value_name = "FILE", conflicts_with = "command")]
        file: Option<PathBuf>,
        /// Run inline source code
        #[arg(short = 'c', long = "command", value_name = "CODE")]
        command: Option<String>,
    },

    /// Render the checked program in another syntax
    Emit {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Output syntax
        #[arg(long, short = 't', value_enum, default_value_t = Target::While)]
        target: Target,
    },

    /// Type check and report diagnostics
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Diagnostic output format
        #[arg(long, value_enum, default_value_t = DiagnosticFormat::Human)]
        format: DiagnosticFormat,
    },

    /// Format While source files
    Fmt {
        /// File or directory to format
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
        /// Check formatting without modifying files
        #[arg(long)]
        check: bool,
        /// Show diff of formatting changes
        #[arg(long)]
        diff: bool,
    },
}

/// Text output syntax for `emit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// Canonical While syntax
    While,
    C,
    Python,
}

impl From<Target> for RenderMode {
    fn from(target: Target) -> Self {
        match target {
            Target::While => RenderMode::Canonical,
            Target::C => RenderMode::C,
            Target::Python => RenderMode::Python,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiagnosticFormat {
    Human,
    Json,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy());
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file.to_string_lossy());
    }

    match cli.command {
        Some(Command::Run { file, command }) => execute_run(file, command),
        Some(Command::Emit { file, target }) => commands::emit_file(&file.to_string_lossy(), target.into()),
        Some(Command::Check { file, format }) => commands::check_file(&file.to_string_lossy(), format),
        Some(Command::Fmt { path, check, diff }) => commands::format_files(&path.to_string_lossy(), check, diff),
        None => {
            // Default: type check the file if provided
            if let Some(file) = cli.file {
                commands::check_file(&file.to_string_lossy(), DiagnosticFormat::Human)
            } else {
                Err(CliError::failure("Error: no input file (try `whilec --help`)"))
            }
        }
    }
}

/// Handle the `run` subcommand with its various forms.
fn execute_run(file: Option<PathBuf>, code: Option<String>) -> CliResult<ExitCode> {
    if let Some(code) = code {
        if code.trim().is_empty() {
            return Err(CliError::failure("Error: -c/--command requires source code string"));
        }
        commands::run_source("<command>", &code)
    } else if let Some(file) = file {
        commands::run_file(&file.to_string_lossy())
    } else {
        Err(CliError::failure("Error: run requires a file path or -c \"code\""))
    }
}

// ============================================================================
// Tests
// ============================================================================
