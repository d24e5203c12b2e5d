// src/sexpr.rs
//
// Low-level S-expression assembly shared by the symbol and footprint
// serializers. Output must be deterministic: KiCad parses these files
// strictly and generated libraries are kept under version control.

/// Formats a millimetre coordinate with fixed 4-decimal precision.
pub fn mm(value: f64) -> String {
    let text = format!("{:.4}", value);
    // -0.0000 and 0.0000 are the same coordinate.
    if text == "-0.0000" {
        "0.0000".to_string()
    } else {
        text
    }
}

/// Quotes a string field, escaping backslashes and embedded double quotes.
pub fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Builds an indented S-expression block, two spaces per nesting level.
pub struct SexprWriter {
    out: String,
    depth: usize,
}

impl SexprWriter {
    pub fn new() -> Self {
        Self::at_depth(0)
    }

    /// Starts writing at a given nesting level, for entries that get spliced
    /// into an enclosing library document.
    pub fn at_depth(depth: usize) -> Self {
        SexprWriter {
            out: String::new(),
            depth,
        }
    }

    /// Opens a nested node: `(head`.
    pub fn open(&mut self, head: &str) {
        self.put(&format!("({}", head));
        self.depth += 1;
    }

    /// Writes a complete single-line node: `(content)`.
    pub fn line(&mut self, content: &str) {
        self.put(&format!("({})", content));
    }

    /// Closes the innermost open node.
    pub fn close(&mut self) {
        self.depth -= 1;
        self.put(")");
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn put(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }
}

impl Default for SexprWriter {
    fn default() -> Self {
        Self::new()
    }
}
