//! Text formatting utilities for previews.
//!
//! Provides indentation management and section headers for plain-text output.

/// A writer that manages indentation.
pub struct IndentWriter {
    buffer: String,
    indent_str: String,
    current_indent: usize,
    at_line_start: bool,
}

impl IndentWriter {
    /// Create a new indent writer indenting `width` spaces per level.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            buffer: String::new(),
            indent_str: " ".repeat(width),
            current_indent: 0,
            at_line_start: true,
        }
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.current_indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        self.current_indent = self.current_indent.saturating_sub(1);
    }

    fn write_indent_if_needed(&mut self) {
        if self.at_line_start && self.current_indent > 0 {
            for _ in 0..self.current_indent {
                self.buffer.push_str(&self.indent_str);
            }
            self.at_line_start = false;
        }
    }

    /// Write a complete line (with newline at end).
    pub fn write_line(&mut self, s: &str) {
        self.write_indent_if_needed();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self.at_line_start = true;
    }

    /// Write a blank line.
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
        self.at_line_start = true;
    }

    /// Write a bulleted line.
    pub fn write_item(&mut self, item: &str) {
        self.write_line(&format!("- {}", item));
    }

    /// Write a heading underlined to its own width.
    pub fn write_heading(&mut self, title: &str) {
        self.write_line(title);
        self.write_line(&"=".repeat(title.chars().count()));
    }

    /// Write an underlined heading followed by `(count)`.
    pub fn write_counted_heading(&mut self, title: &str, count: usize) {
        self.write_heading(&format!("{} ({})", title, count));
    }

    /// Consume the writer and return the final string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Default for IndentWriter {
    fn default() -> Self {
        Self::new(2)
    }
}
