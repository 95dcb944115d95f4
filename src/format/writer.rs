//! Output writer with indentation tracking
//!
//! Every renderer writes through a [`FormatWriter`]. Callers pair each [`FormatWriter::indent`]
//! with a [`FormatWriter::dedent`] on the same path; the emitter does so in `Emitter::body`.

use super::config::FormatConfig;

/// Writer that tracks indentation and builds formatted output
#[derive(Debug)]
pub struct FormatWriter {
    output: String,
    indent_level: usize,
    config: FormatConfig,
    at_line_start: bool,
}

impl FormatWriter {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
            at_line_start: true,
        }
    }

    /// Get the formatted output
    pub fn finish(self) -> String {
        self.output
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            let indent = " ".repeat(self.indent_level * self.config.indent_width);
            self.output.push_str(&indent);
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    pub fn blank_lines(&mut self, count: usize) {
        for _ in 0..count {
            self.newline();
        }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_writer() -> FormatWriter {
        FormatWriter::new(FormatConfig::default())
    }

    #[test]
    fn test_new_writer_empty_output() {
        assert_eq!(default_writer().finish(), "");
    }

    #[test]
    fn test_indent_applies_at_line_start_only() {
        let mut w = default_writer();
        w.writeln("while (x) {");
        w.indent();
        w.write("x = ");
        w.write("1;");
        w.newline();
        w.dedent();
        w.writeln("}");
        assert_eq!(w.finish(), "while (x) {\n    x = 1;\n}\n");
    }

    #[test]
    fn test_nested_levels_use_indent_width() {
        let mut w = FormatWriter::new(FormatConfig::new().with_indent_width(2));
        w.indent();
        w.writeln("a");
        w.indent();
        w.writeln("b");
        w.dedent();
        w.dedent();
        w.writeln("c");
        assert_eq!(w.finish(), "  a\n    b\nc\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut w = default_writer();
        w.dedent();
        w.indent();
        w.writeln("a");
        assert_eq!(w.finish(), "    a\n");
    }

    #[test]
    fn test_write_empty_does_not_indent() {
        let mut w = default_writer();
        w.indent();
        w.write("");
        w.newline();
        assert_eq!(w.finish(), "\n");
    }
}
