//! While backend
//!
//! Everything after checking is one walk over the annotated tree, parameterized by a
//! [`RenderMode`] chosen once per run: the text emitters produce canonical, C-like or
//! Python-like source, and the evaluator executes the program directly.
//!
//! ## Module Organization
//!
//! - `emit/` - text emission (`mod.rs` shared walk, `c.rs` and `python.rs` target specifics)
//! - `eval/` - tree-walking evaluator and runtime values
//! - `naming.rs` - per-mode rendered identifiers
//!
//! ## Preconditions
//!
//! Every entry point expects a program that passed [`crate::frontend::typechecker::check`]. The
//! emitters read expression types (C typedefs, return printing) and the evaluator reads resolved
//! declarations; an unchecked tree yields [`EvalError`] or unspecified text, never a panic.

pub mod emit;
pub mod eval;
pub mod naming;

use std::fmt;

pub use emit::render;
pub use eval::{EvalError, Value, execute};

use crate::format::FormatConfig;
use crate::frontend::ast::Program;

/// Output form selected for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// The language's own surface syntax.
    Canonical,
    C,
    Python,
    /// Direct execution. As a text mode it renders canonical syntax with the evaluator's names.
    Execute,
}

impl RenderMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Canonical => "while",
            RenderMode::C => "c",
            RenderMode::Python => "python",
            RenderMode::Execute => "execute",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one backend run.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Text(String),
    Value(Value),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Text(text) => f.write_str(text),
            Output::Value(value) => writeln!(f, "{value}"),
        }
    }
}

/// Execute or render a checked program.
///
/// ## Errors
/// Only execution can fail, and only on a tree that did not pass checking.
pub fn run(program: &Program, mode: RenderMode, config: &FormatConfig) -> Result<Output, EvalError> {
    match mode {
        RenderMode::Execute => execute(program).map(Output::Value),
        text => Ok(Output::Text(render(program, text, config))),
    }
}
