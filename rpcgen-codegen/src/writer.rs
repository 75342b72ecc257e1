//! Indentation-aware source builder.

const INDENT: &str = "    ";

/// Accumulates generated source line by line.
///
/// Blocks are opened with [`CodeWriter::block`], which writes the header,
/// indents everything the closure writes and closes the brace. Blank lines
/// never carry trailing whitespace.
#[derive(Debug, Default)]
pub struct CodeWriter {
    buf: String,
    depth: usize,
}

impl CodeWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes one line at the current indentation.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buf.push_str(INDENT);
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
        self
    }

    /// Writes an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    /// Writes `///` doc lines, one per line of `text`.
    pub fn doc(&mut self, text: impl AsRef<str>) -> &mut Self {
        for line in text.as_ref().lines() {
            if line.is_empty() {
                self.line("///");
            } else {
                self.line(format!("/// {line}"));
            }
        }
        self
    }

    /// Writes doc lines if a description is present.
    pub fn doc_opt(&mut self, text: Option<&str>) -> &mut Self {
        if let Some(text) = text {
            self.doc(text);
        }
        self
    }

    /// Writes `header {`, the indented body and `}`.
    pub fn block(&mut self, header: impl AsRef<str>, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.line(format!("{} {{", header.as_ref()));
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self.line("}")
    }

    /// Returns the accumulated source.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Formats a Rust string literal.
#[must_use]
pub fn string_literal(value: &str) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_blocks() {
        let mut w = CodeWriter::new();
        w.block("impl Foo", |w| {
            w.block("fn bar()", |w| {
                w.line("baz();");
            });
            w.blank();
        });

        assert_eq!(
            w.finish(),
            "impl Foo {\n    fn bar() {\n        baz();\n    }\n\n}\n"
        );
    }

    #[test]
    fn test_doc_lines() {
        let mut w = CodeWriter::new();
        w.block("mod m", |w| {
            w.doc("first\n\nsecond").doc_opt(None);
        });

        assert_eq!(w.finish(), "mod m {\n    /// first\n    ///\n    /// second\n}\n");
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("ANGX-0001"), "\"ANGX-0001\"");
        assert_eq!(string_literal("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }
}
