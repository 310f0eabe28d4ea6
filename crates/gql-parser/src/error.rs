use std::fmt;

use crate::source::Source;

/// Coarse classification of an [`Error`], per the toolkit-wide error
/// taxonomy: lexer/parser failures are always `Syntax`; the other variants
/// are reserved for boundary code built on top of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    BadQuery,
    InvalidInput,
    Internal,
}

/// A single `(line, column)` pair attached to an error, used to render the
/// caret snippet and to let callers jump to the offending location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorLocation {
    pub line: usize,
    pub column: usize,
}

/// Structured error produced by the lexer or the parser.
///
/// `rune_offset` is the offset of the offending token in the position space
/// Tokens use (rune-indexed); `byte_offset` is the matching byte offset into
/// the `Source` body, used to resolve `(line, column)` and to slice the
/// offending line for display.
#[derive(Clone)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub(crate) byte_offset: usize,
    pub(crate) rune_offset: usize,
    pub(crate) source_name: Option<String>,
    pub(crate) locations: Vec<ErrorLocation>,
    pub(crate) snippet: Option<String>,
}

impl Error {
    pub(crate) fn syntax(message: impl Into<String>, byte_offset: usize, rune_offset: usize) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
            byte_offset,
            rune_offset,
            source_name: None,
            locations: Vec::new(),
            snippet: None,
        }
    }

    /// Resolve this error against its originating [`Source`], filling in the
    /// `(line, column)` list and a caret-annotated snippet, per spec.md §6.2
    /// / §7.
    pub(crate) fn with_source(mut self, source: &Source) -> Self {
        let pos = source.position(self.byte_offset);
        self.locations.push(ErrorLocation {
            line: pos.line,
            column: pos.column,
        });
        self.source_name = Some(source.name().to_string());
        self.snippet = Some(render_snippet(source, pos.line, pos.column));
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn rune_offset(&self) -> usize {
        self.rune_offset
    }

    pub fn locations(&self) -> &[ErrorLocation] {
        &self.locations
    }
}

fn escape_non_printable(line: &str) -> String {
    line.chars()
        .map(|c| {
            if (c as u32) < 0x20 && c != '\t' {
                format!("\\u{:04x}", c as u32)
            } else {
                c.to_string()
            }
        })
        .collect()
}

fn render_snippet(source: &Source, line: usize, column: usize) -> String {
    let mut out = String::new();
    if line > 1 {
        if let Some(prev) = source.line(line - 1) {
            out.push_str(&format!("{}: {}\n", line - 1, escape_non_printable(prev)));
        }
    }
    let current = source.line(line).unwrap_or("");
    out.push_str(&format!("{}: {}\n", line, escape_non_printable(current)));
    out.push_str(&format!(
        "{}  {}^\n",
        " ".repeat(line.to_string().len()),
        " ".repeat(column.saturating_sub(1))
    ));
    if let Some(next) = source.line(line + 1) {
        out.push_str(&format!("{}: {}\n", line + 1, escape_non_printable(next)));
    }
    out
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.source_name.as_deref().unwrap_or("<input>");
        if let Some(loc) = self.locations.first() {
            writeln!(
                f,
                "Syntax Error {} ({}:{}) {}",
                name, loc.line, loc.column, self.message
            )?;
        } else {
            writeln!(f, "Syntax Error {} {}", name, self.message)?;
        }
        if let Some(snippet) = &self.snippet {
            write!(f, "\n{snippet}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl std::error::Error for Error {}

impl miette::Diagnostic for Error {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(match self.kind {
            ErrorKind::Syntax => "gql::syntax",
            ErrorKind::BadQuery => "gql::bad_query",
            ErrorKind::InvalidInput => "gql::invalid_input",
            ErrorKind::Internal => "gql::internal",
        }))
    }
}
