mod cursor;
mod token;

use std::borrow::Cow;

pub use token::{Token, TokenKind};

use crate::error::Error;
use cursor::Cursor;

const BOM: char = '\u{feff}';

/// Scans a source body into a stream of [`Token`]s, one call at a time.
///
/// Grounded on the teacher's cursor-driven `advance` loop
/// (`lexer/cursor.rs`/`lexer/mod.rs`), generalized to track rune offsets
/// alongside byte offsets (spec.md §4.2, §9).
pub struct Lexer<'a> {
    input: &'a str,
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: Cursor::new(input),
        }
    }

    /// Produce the next token, or a syntax error naming the offending rune
    /// offset. Does not attempt error recovery (spec.md §4.2).
    pub fn next_token(&mut self) -> Result<Token<'a>, Error> {
        self.skip_ignored();

        let start_byte = self.cursor.byte_pos();
        let start_rune = self.cursor.rune_pos();

        let Some(c) = self.cursor.bump() else {
            return Ok(Token::new(TokenKind::Eof, start_rune, start_rune).with_bytes(start_byte, start_byte));
        };

        let kind_or_value = match c {
            '!' => Ok(self.punct(TokenKind::Bang, start_rune)),
            '$' => Ok(self.punct(TokenKind::Dollar, start_rune)),
            '(' => Ok(self.punct(TokenKind::ParenL, start_rune)),
            ')' => Ok(self.punct(TokenKind::ParenR, start_rune)),
            ':' => Ok(self.punct(TokenKind::Colon, start_rune)),
            '=' => Ok(self.punct(TokenKind::Equals, start_rune)),
            '@' => Ok(self.punct(TokenKind::At, start_rune)),
            '[' => Ok(self.punct(TokenKind::BracketL, start_rune)),
            ']' => Ok(self.punct(TokenKind::BracketR, start_rune)),
            '{' => Ok(self.punct(TokenKind::BraceL, start_rune)),
            '}' => Ok(self.punct(TokenKind::BraceR, start_rune)),
            '|' => Ok(self.punct(TokenKind::Pipe, start_rune)),
            '&' => Ok(self.punct(TokenKind::Amp, start_rune)),
            '.' => self.spread(start_byte, start_rune),
            '"' => self.string(start_byte, start_rune),
            '#' => Ok(self.comment(start_byte, start_rune)),
            c if is_name_start(c) => Ok(self.name(start_byte, start_rune)),
            c if c == '-' || c.is_ascii_digit() => self.number(c, start_byte, start_rune),
            c => Err(Error::syntax(
                format!("Invalid character \\u{:04x}", c as u32),
                start_byte,
                start_rune,
            )),
        };

        let end_byte = self.cursor.byte_pos();
        kind_or_value.map(|t| t.with_bytes(start_byte, end_byte))
    }

    fn punct(&self, kind: TokenKind, start: usize) -> Token<'a> {
        Token::new(kind, start, start + 1)
    }

    /// Skip BOM, whitespace and the insignificant comma. Comments are not
    /// skipped here: they come back out as `Comment` tokens, and it is the
    /// parser's `KeepComments` mode (spec.md §4.3.1) that decides whether to
    /// discard or attribute them.
    fn skip_ignored(&mut self) {
        loop {
            match self.cursor.first() {
                c if c == BOM || is_whitespace(c) || c == ',' => {
                    self.cursor.bump();
                }
                _ => break,
            }
        }
    }

    fn spread(&mut self, start_byte: usize, start_rune: usize) -> Result<Token<'a>, Error> {
        if self.cursor.first() == '.' && self.cursor.second() == '.' {
            self.cursor.bump();
            self.cursor.bump();
            Ok(Token::new(TokenKind::Spread, start_rune, start_rune + 3))
        } else {
            Err(Error::syntax(
                "Unexpected character \".\"",
                start_byte,
                start_rune,
            ))
        }
    }

    fn name(&mut self, start_byte: usize, start_rune: usize) -> Token<'a> {
        self.cursor.eat_while(is_name_continue);
        let end_byte = self.cursor.byte_pos();
        let end_rune = self.cursor.rune_pos();
        let text = &self.cursor_input()[start_byte..end_byte];
        Token::with_value(TokenKind::Name, start_rune, end_rune, text)
    }

    fn number(
        &mut self,
        first: char,
        start_byte: usize,
        start_rune: usize,
    ) -> Result<Token<'a>, Error> {
        let mut is_float = false;

        let int_first = if first == '-' {
            self.expect_digit(start_byte, start_rune)?
        } else {
            first
        };

        if int_first == '0' {
            if self.cursor.first().is_ascii_digit() {
                return Err(Error::syntax(
                    "Invalid number, unexpected digit after 0",
                    start_byte,
                    start_rune,
                ));
            }
        } else {
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        if self.cursor.first() == '.' {
            is_float = true;
            self.cursor.bump();
            self.expect_digit(start_byte, start_rune)?;
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        if matches!(self.cursor.first(), 'e' | 'E') {
            is_float = true;
            self.cursor.bump();
            if matches!(self.cursor.first(), '+' | '-') {
                self.cursor.bump();
            }
            self.expect_digit(start_byte, start_rune)?;
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        let end_byte = self.cursor.byte_pos();
        let end_rune = self.cursor.rune_pos();
        let text = &self.cursor_input()[start_byte..end_byte];
        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        Ok(Token::with_value(kind, start_rune, end_rune, text))
    }

    /// Consume and require one ASCII digit, matching the "expected digit but
    /// got X"/"got EOF" messages spec.md §4.2 names. Returns the digit
    /// consumed.
    fn expect_digit(&mut self, start_byte: usize, start_rune: usize) -> Result<char, Error> {
        if self.cursor.is_eof() {
            return Err(Error::syntax(
                "Invalid number, expected digit but got EOF",
                start_byte,
                start_rune,
            ));
        }
        let c = self.cursor.first();
        if !c.is_ascii_digit() {
            return Err(Error::syntax(
                format!("Invalid number, expected digit but got {c:?}"),
                start_byte,
                start_rune,
            ));
        }
        self.cursor.bump();
        Ok(c)
    }

    fn string(&mut self, start_byte: usize, start_rune: usize) -> Result<Token<'a>, Error> {
        let mut decoded: Option<String> = None;
        let content_start_byte = self.cursor.byte_pos();

        loop {
            if self.cursor.is_eof() {
                return Err(Error::syntax("Unterminated string", start_byte, start_rune));
            }
            let c = self.cursor.first();
            match c {
                '"' => {
                    self.cursor.bump();
                    break;
                }
                '\n' | '\r' => {
                    return Err(Error::syntax("Unterminated string", start_byte, start_rune));
                }
                '\\' => {
                    let buf = decoded.get_or_insert_with(|| {
                        self.cursor_input()[content_start_byte..self.cursor.byte_pos()].to_string()
                    });
                    self.cursor.bump();
                    let escape_byte = self.cursor.byte_pos();
                    let escape_rune = self.cursor.rune_pos();
                    let esc = self
                        .cursor
                        .bump()
                        .ok_or_else(|| Error::syntax("Unterminated string", start_byte, start_rune))?;
                    match esc {
                        '"' => buf.push('"'),
                        '\\' => buf.push('\\'),
                        '/' => buf.push('/'),
                        'b' => buf.push('\u{8}'),
                        'f' => buf.push('\u{c}'),
                        'n' => buf.push('\n'),
                        'r' => buf.push('\r'),
                        't' => buf.push('\t'),
                        'u' => {
                            let mut code = 0u32;
                            for _ in 0..4 {
                                let d = self.cursor.bump().ok_or_else(|| {
                                    Error::syntax(
                                        "Invalid unicode escape sequence",
                                        escape_byte,
                                        escape_rune,
                                    )
                                })?;
                                let digit = d.to_digit(16).ok_or_else(|| {
                                    Error::syntax(
                                        "Invalid unicode escape sequence",
                                        escape_byte,
                                        escape_rune,
                                    )
                                })?;
                                code = code * 16 + digit;
                            }
                            let ch = char::from_u32(code).ok_or_else(|| {
                                Error::syntax(
                                    "Invalid unicode escape sequence",
                                    escape_byte,
                                    escape_rune,
                                )
                            })?;
                            buf.push(ch);
                        }
                        other => {
                            return Err(Error::syntax(
                                format!("Invalid character escape sequence: \\{other}"),
                                escape_byte,
                                escape_rune,
                            ));
                        }
                    }
                }
                c if (c as u32) < 0x20 && c != '\t' => {
                    return Err(Error::syntax(
                        "Invalid character within String",
                        self.cursor.byte_pos(),
                        self.cursor.rune_pos(),
                    ));
                }
                c => {
                    if let Some(buf) = decoded.as_mut() {
                        buf.push(c);
                    }
                    self.cursor.bump();
                }
            }
        }

        let end_byte = self.cursor.byte_pos();
        let end_rune = self.cursor.rune_pos();
        let content_end_byte = end_byte - 1; // before closing quote
        let value: Cow<'a, str> = match decoded {
            Some(s) => Cow::Owned(s),
            None => Cow::Borrowed(&self.cursor_input()[content_start_byte..content_end_byte]),
        };
        Ok(Token::with_value(TokenKind::String, start_rune, end_rune, value))
    }

    /// A comment (`#` to end of line), with surrounding whitespace trimmed.
    fn comment(&mut self, start_byte: usize, start_rune: usize) -> Token<'a> {
        self.cursor.eat_while(|c| c != '\n');
        let end_byte = self.cursor.byte_pos();
        let end_rune = self.cursor.rune_pos();
        let text = self.cursor_input()[start_byte + 1..end_byte].trim();
        Token::with_value(TokenKind::Comment, start_rune, end_rune, text)
    }

    fn cursor_input(&self) -> &'a str {
        self.input
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

pub(crate) fn is_name_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

pub(crate) fn is_name_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}
