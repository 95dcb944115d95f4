//! Text emission for every output syntax.
//!
//! [`Emitter`] walks the checked tree once. Statement layout and expression spelling are shared
//! and branch on the mode only where the targets differ; program framing and return printing
//! live in `c.rs` and `python.rs`.
//!
//! Expressions render to strings, fully parenthesized, so no target ever needs precedence
//! knowledge. Statements are written line by line through a [`FormatWriter`].

mod c;
mod python;

use crate::format::{FormatConfig, FormatWriter};
use crate::frontend::ast::*;
use while_core::lang::types::BaseTypeId;

use super::RenderMode;
use super::naming::{decl_name, ref_name};

/// Render `program` in `mode`.
pub fn render(program: &Program, mode: RenderMode, config: &FormatConfig) -> String {
    Emitter::new(mode, config.clone()).emit_program(program)
}

/// Stateful text emitter: the output mode plus the writer carrying the indentation level.
pub struct Emitter {
    mode: RenderMode,
    writer: FormatWriter,
}

impl Emitter {
    pub fn new(mode: RenderMode, config: FormatConfig) -> Self {
        Self {
            mode,
            writer: FormatWriter::new(config),
        }
    }

    #[tracing::instrument(skip_all, fields(mode = %self.mode))]
    pub fn emit_program(mut self, program: &Program) -> String {
        match self.mode {
            RenderMode::C => self.c_program(program),
            RenderMode::Python => self.python_program(program),
            RenderMode::Canonical | RenderMode::Execute => {
                self.stmts(&program.body.stmts);
                let ret = self.expr(&program.ret);
                self.writer.writeln(&format!("return {ret};"));
            }
        }
        self.writer.finish()
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn stmts(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.stmt(stmt);
        }
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Decl(decl) => self.declaration(decl),
            StmtKind::Assign(assign) => {
                let target = ref_name(&assign.target.node, self.mode);
                let value = self.expr(&assign.value);
                self.simple_line(&format!("{target} = {value}"));
            }
            StmtKind::Block(block) => {
                let header = match self.mode {
                    RenderMode::Python => "if True",
                    _ => "",
                };
                self.open(header);
                self.body(block);
                self.close();
            }
            StmtKind::While(w) => {
                self.open(&self.conditional("while", &w.cond));
                self.body(&w.body);
                self.close();
            }
            StmtKind::If(i) => {
                self.open(&self.conditional("if", &i.cond));
                self.body(&i.body);
                self.close();
            }
            StmtKind::IfElse(ie) => {
                self.open(&self.conditional("if", &ie.cond));
                self.body(&ie.body);
                match self.mode {
                    RenderMode::Python => self.writer.writeln("else:"),
                    _ => self.writer.writeln("} else {"),
                }
                self.body(&ie.alt);
                self.close();
            }
        }
    }

    fn declaration(&mut self, decl: &Declaration) {
        let name = decl_name(&decl.name.node, decl.id, self.mode);
        let init = self.expr(&decl.init);
        match self.mode {
            RenderMode::Python => self.writer.writeln(&format!("{name} = {init}")),
            RenderMode::C => self.c_declaration(decl, &name, &init),
            RenderMode::Canonical | RenderMode::Execute => {
                self.writer.writeln(&format!("{} {name} = {init};", decl.ty.node));
            }
        }
    }

    /// One statement line, with the target's terminator.
    fn simple_line(&mut self, text: &str) {
        match self.mode {
            RenderMode::Python => self.writer.writeln(text),
            _ => self.writer.writeln(&format!("{text};")),
        }
    }

    /// `while`/`if` header text. Binary conditions already carry their own parentheses.
    fn conditional(&self, keyword: &str, cond: &Expr) -> String {
        let cond_text = self.expr(cond);
        let wrapped = matches!(cond.kind, ExprKind::Binary(..));
        match self.mode {
            RenderMode::C if !wrapped => format!("{keyword} ({cond_text})"),
            _ => format!("{keyword} {cond_text}"),
        }
    }

    fn open(&mut self, header: &str) {
        match (self.mode, header.is_empty()) {
            (RenderMode::Python, _) => self.writer.writeln(&format!("{header}:")),
            (_, true) => self.writer.writeln("{"),
            (_, false) => self.writer.writeln(&format!("{header} {{")),
        }
    }

    fn close(&mut self) {
        if self.mode != RenderMode::Python {
            self.writer.writeln("}");
        }
    }

    fn body(&mut self, block: &Block) {
        self.writer.indent();
        self.stmts(&block.stmts);
        if block.stmts.is_empty() && self.mode == RenderMode::Python {
            self.writer.writeln("pass");
        }
        self.writer.dedent();
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub(crate) fn expr(&self, expr: &Expr) -> String {
        match &expr.kind {
            ExprKind::Binary(lhs, BinaryOp::Project, index) => {
                let lhs = self.expr(lhs);
                let index = self.expr(index);
                match self.mode {
                    RenderMode::C => format!("({lhs}._{index})"),
                    RenderMode::Python => format!("({lhs}[{index}])"),
                    RenderMode::Canonical | RenderMode::Execute => format!("({lhs}({index}))"),
                }
            }
            ExprKind::Binary(lhs, op, rhs) => {
                format!("({} {} {})", self.expr(lhs), self.binary_op(*op), self.expr(rhs))
            }
            ExprKind::Unary(op, operand) => {
                let op = match (self.mode, op) {
                    (RenderMode::C, UnaryOp::Not) => "!".to_string(),
                    _ => op.to_string(),
                };
                format!("{op}({})", self.expr(operand))
            }
            ExprKind::Bool(b) => match (self.mode, b) {
                (RenderMode::Python, true) => "True".to_string(),
                (RenderMode::Python, false) => "False".to_string(),
                _ => b.to_string(),
            },
            ExprKind::Int(v) => v.to_string(),
            ExprKind::Name(name_ref) => ref_name(name_ref, self.mode),
            ExprKind::Tuple(elems) => {
                let parts: Vec<String> = elems.iter().map(|e| self.expr(e)).collect();
                match self.mode {
                    RenderMode::C => format!("({}){{{}}}", c::c_type(expr.ty()), parts.join(", ")),
                    _ if parts.len() == 1 => format!("({},)", parts[0]),
                    _ => format!("({})", parts.join(", ")),
                }
            }
            ExprKind::Error => ERROR_IDENT.to_string(),
        }
    }

    fn binary_op(&self, op: BinaryOp) -> String {
        match (self.mode, op) {
            (RenderMode::C, BinaryOp::And) => "&".to_string(),
            (RenderMode::C, BinaryOp::Or) => "|".to_string(),
            _ => op.to_string(),
        }
    }
}

// ============================================================================
// Value display
// ============================================================================

/// One piece of a printed value: fixed text, or an int/bool expression to show.
#[derive(Debug, Clone, PartialEq)]
enum ShowPart {
    Lit(String),
    Int(String),
    Bool(String),
}

/// Flatten the display of a value of type `ty`, reachable as `access`, into parts.
///
/// Tuples print component-wise as `(a, b)`, 1-tuples as `(a,)`. `field` spells element access
/// in the target.
fn show_parts(ty: &Type, access: &str, field: &dyn Fn(&str, usize) -> String, out: &mut Vec<ShowPart>) {
    match ty {
        Type::Base(BaseTypeId::Bool) => out.push(ShowPart::Bool(access.to_string())),
        Type::Base(_) | Type::Error => out.push(ShowPart::Int(access.to_string())),
        Type::Tuple(elems) => {
            push_lit(out, "(");
            for (i, elem) in elems.iter().enumerate() {
                if i > 0 {
                    push_lit(out, ", ");
                }
                show_parts(elem, &field(access, i), field, out);
            }
            push_lit(out, if elems.len() == 1 { ",)" } else { ")" });
        }
    }
}

fn push_lit(out: &mut Vec<ShowPart>, text: &str) {
    if let Some(ShowPart::Lit(last)) = out.last_mut() {
        last.push_str(text);
    } else {
        out.push(ShowPart::Lit(text.to_string()));
    }
}
