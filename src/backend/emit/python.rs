//! Python-like target. Statements are flat apart from indentation; the result is printed with
//! the same display convention as the evaluator (lowercase booleans).

use crate::frontend::ast::*;
use while_core::lang::types::BaseTypeId;

use super::{Emitter, ShowPart, show_parts};

impl Emitter {
    pub(super) fn python_program(&mut self, program: &Program) {
        self.stmts(&program.body.stmts);
        self.python_print_return(&program.ret);
    }

    fn python_print_return(&mut self, ret: &Expr) {
        let value = self.expr(ret);
        match ret.ty() {
            Type::Base(BaseTypeId::Bool) => {
                self.writer.writeln(&format!("print(\"true\" if {value} else \"false\")"));
            }
            Type::Tuple(_) => {
                self.writer.writeln(&format!("ret = {value}"));
                let mut parts = Vec::new();
                show_parts(ret.ty(), "ret", &|a, i| format!("{a}[{i}]"), &mut parts);
                let pieces: Vec<String> = parts.into_iter().map(show_piece).collect();
                self.writer.writeln(&format!("print({})", pieces.join(" + ")));
            }
            Type::Base(BaseTypeId::Int) | Type::Error => self.writer.writeln(&format!("print({value})")),
        }
    }
}

fn show_piece(part: ShowPart) -> String {
    match part {
        ShowPart::Lit(text) => format!("\"{text}\""),
        ShowPart::Int(e) => format!("str({e})"),
        ShowPart::Bool(e) => format!("(\"true\" if {e} else \"false\")"),
    }
}
