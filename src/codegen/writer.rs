/// Indented line-oriented source buffer.
#[derive(Debug, Default)]
pub struct SourceWriter {
    out: String,
    depth: usize,
}

const INDENT: &str = "    ";

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current indentation. Embedded newlines are
    /// indented too.
    pub fn writeln(&mut self, line: &str) {
        for part in line.split('\n') {
            if !part.is_empty() {
                for _ in 0..self.depth {
                    self.out.push_str(INDENT);
                }
                self.out.push_str(part);
            }
            self.out.push('\n');
        }
    }

    pub fn blank(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// `header {`, then `body` one level deeper, then `}`.
    pub fn block(&mut self, header: &str, body: impl FnOnce(&mut Self)) {
        self.writeln(&format!("{header} {{"));
        self.indent();
        body(self);
        self.dedent();
        self.writeln("}");
    }

    pub fn finish(self) -> String {
        self.out
    }
}
