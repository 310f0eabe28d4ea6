/// Output buffer plus indentation bookkeeping.
///
/// Grounded on the teacher's `apollo-compiler::ast::serialize::State`: an
/// `Option<&str>` indent prefix doubles as the on/off switch for newlines
/// (`None` means "single line, spaces only"), rather than a separate bool.
pub(crate) struct State<'p> {
    indent_prefix: Option<&'p str>,
    indent_level: usize,
    output: String,
}

impl<'p> State<'p> {
    pub(crate) fn new(indent_prefix: Option<&'p str>) -> Self {
        Self {
            indent_prefix,
            indent_level: 0,
            output: String::new(),
        }
    }

    pub(crate) fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    pub(crate) fn newlines_enabled(&self) -> bool {
        self.indent_prefix.is_some()
    }

    /// A newline plus the current indent, or a single space when indentation
    /// is disabled.
    pub(crate) fn new_line_or_space(&mut self) {
        match self.indent_prefix {
            Some(prefix) => {
                self.output.push('\n');
                for _ in 0..self.indent_level {
                    self.output.push_str(prefix);
                }
            }
            None => self.output.push(' '),
        }
    }

    pub(crate) fn indent(&mut self) {
        self.indent_level += 1;
        self.new_line_or_space();
    }

    pub(crate) fn dedent(&mut self) {
        self.indent_level -= 1;
        self.new_line_or_space();
    }

    pub(crate) fn finish(self) -> String {
        self.output
    }
}
