/// The lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Eof,
    Bang,
    Dollar,
    ParenL,
    ParenR,
    Spread,
    Colon,
    Equals,
    At,
    BracketL,
    BracketR,
    BraceL,
    BraceR,
    Pipe,
    Amp,
    Name,
    Int,
    Float,
    String,
    Comment,
}

use std::borrow::Cow;

/// A single lexical token.
///
/// `start`/`end` are **rune offsets** into the source body, per spec.md §3.2;
/// only `Name`, `Int`, `Float`, `String` and `Comment` carry a `value`.
/// `value` is a `Cow` rather than a plain `&str` because `String` tokens
/// decode escape sequences (spec.md §4.2): a token with no escapes borrows
/// straight from the source, one with escapes owns its decoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub value: Option<Cow<'a, str>>,
    /// Byte offsets matching `start`/`end`, kept alongside the rune offsets
    /// spec.md §3.2 specifies so the parser can resolve `(line, column)`
    /// via `Source::position` (which works in bytes) without re-scanning
    /// the body. Not part of the public contract: only the rune-indexed
    /// `start`/`end` are.
    pub(crate) byte_start: usize,
    pub(crate) byte_end: usize,
}

impl<'a> Token<'a> {
    pub(crate) fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            end,
            value: None,
            byte_start: 0,
            byte_end: 0,
        }
    }

    pub(crate) fn with_value(
        kind: TokenKind,
        start: usize,
        end: usize,
        value: impl Into<Cow<'a, str>>,
    ) -> Self {
        Self {
            kind,
            start,
            end,
            value: Some(value.into()),
            byte_start: 0,
            byte_end: 0,
        }
    }

    pub(crate) fn with_bytes(mut self, byte_start: usize, byte_end: usize) -> Self {
        self.byte_start = byte_start;
        self.byte_end = byte_end;
        self
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}
