//! Rendering configuration shared by every text output.

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Blank lines between a C prelude (includes, typedefs) and `main`
    pub blank_lines_after_prelude: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            blank_lines_after_prelude: 1,
        }
    }
}

impl FormatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn with_blank_lines_after_prelude(mut self, count: usize) -> Self {
        self.blank_lines_after_prelude = count;
        self
    }
}
