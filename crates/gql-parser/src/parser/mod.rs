pub(crate) mod grammar;

use crate::ast::{Comment, CommentGroup, Document, Location};
use crate::error::Error;
use crate::lexer::{Lexer, Token, TokenKind};
use crate::source::Source;

/// Options accepted by [`crate::parse`], per spec.md §5/§6.1.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Elide the `Location.source` back-pointer from every node, so the
    /// resulting `Document` does not borrow from the `Source` it was
    /// parsed from.
    pub no_source: bool,
    /// Attach lead/line comment groups to the nodes they describe
    /// (spec.md §4.3.1). When `false`, comments are lexed but discarded.
    pub keep_comments: bool,
}

/// Parse a complete GraphQL document (executable operations and/or
/// type-system definitions) out of `source`.
///
/// Grounded on the teacher's `Parser::parse` (`parser/mod.rs`), generalized
/// to return a partial `Document` alongside any errors rather than
/// panicking or requiring the caller to unwrap a `SyntaxTree` — the
/// teacher's own documentation recommends checking `ast.errors()` before
/// trusting the tree, which this signature makes unavoidable to ignore.
pub fn parse(source: &Source, options: ParseOptions) -> (Document<'_>, Vec<Error>) {
    let mut parser = Parser::new(source, options);
    let document = grammar::document::document(&mut parser);
    (document, parser.errors)
}

/// Recursive-descent parser state: current token, the line the previous
/// significant token ended on (for comment attribution), and the
/// accumulated errors/comments (spec.md §4.3).
pub(crate) struct Parser<'s> {
    source: &'s Source,
    lexer: Lexer<'s>,
    current: Token<'s>,
    prev_end_line: usize,
    no_source: bool,
    keep_comments: bool,
    errors: Vec<Error>,
    comments: Vec<CommentGroup<'s>>,
    pending_line_comment: Option<CommentGroup<'s>>,
    pending_lead_comment: Option<CommentGroup<'s>>,
}

impl<'s> Parser<'s> {
    fn new(source: &'s Source, options: ParseOptions) -> Self {
        let mut parser = Self {
            source,
            lexer: Lexer::new(source.body()),
            current: Token::new(TokenKind::Eof, 0, 0),
            // 0 cannot equal any real 1-based line, so comments leading the
            // very first token are never mistaken for a line comment of a
            // token that does not exist.
            prev_end_line: 0,
            no_source: options.no_source,
            keep_comments: options.keep_comments,
            errors: Vec::new(),
            comments: Vec::new(),
            pending_line_comment: None,
            pending_lead_comment: None,
        };
        parser.advance();
        parser
    }

    fn loc_source(&self) -> Option<&'s Source> {
        if self.no_source {
            None
        } else {
            Some(self.source)
        }
    }

    fn line_of(&self, byte_offset: usize) -> usize {
        self.source.position(byte_offset).line
    }

    pub(crate) fn peek(&self) -> TokenKind {
        self.current.kind
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// True when the current token is a `Name` with this exact text.
    pub(crate) fn at_keyword(&self, keyword: &str) -> bool {
        self.current.kind == TokenKind::Name && self.current.value_str() == keyword
    }

    pub(crate) fn current(&self) -> &Token<'s> {
        &self.current
    }

    /// The `Location` spanning exactly one already-consumed token.
    pub(crate) fn loc(&self, tok: &Token<'s>) -> Location<'s> {
        Location::new(tok.start, tok.end, self.loc_source())
    }

    /// Consume the current token and return it, advancing to the next
    /// significant one and running the comment-attribution scan in between.
    pub(crate) fn bump(&mut self) -> Token<'s> {
        let consumed = std::mem::replace(&mut self.current, Token::new(TokenKind::Eof, 0, 0));
        self.advance();
        consumed
    }

    /// Consume the current token if it matches `kind`, else record a
    /// syntax error naming what was expected and what was found
    /// (spec.md §4.3.2's "Expected :, found (" style messages).
    pub(crate) fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token<'s>, ()> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            let found = self.describe_current();
            self.error(format!("Expected {what}, found {found}"));
            Err(())
        }
    }

    pub(crate) fn describe_current(&self) -> String {
        if self.current.is_eof() {
            "EOF".to_string()
        } else if let Some(value) = &self.current.value {
            value.to_string()
        } else {
            format!("{:?}", self.current.kind)
        }
    }

    /// Record a syntax error at the current token's position.
    pub(crate) fn error(&mut self, message: impl Into<String>) {
        let err = Error::syntax(message, self.current.byte_start, self.current.start);
        self.push_error(err);
    }

    pub(crate) fn push_error(&mut self, err: Error) {
        let err = if self.no_source {
            err
        } else {
            err.with_source(self.source)
        };
        self.errors.push(err);
    }

    /// The lead (doc) comment group, if any, immediately preceding the
    /// node about to be parsed. Consumed once so a later call does not
    /// re-attach a stale group to an unrelated node.
    pub(crate) fn take_lead_comment(&mut self) -> Option<CommentGroup<'s>> {
        self.pending_lead_comment.take()
    }

    /// The line comment group, if any, trailing the node whose last token
    /// was just consumed via [`bump`](Self::bump).
    pub(crate) fn take_line_comment(&mut self) -> Option<CommentGroup<'s>> {
        self.pending_line_comment.take()
    }

    /// Take the complete flat list of observed comment groups, leaving an
    /// empty list behind. Called once by `grammar::document::document` when
    /// assembling the final `Document`.
    pub(crate) fn take_comments(&mut self) -> Vec<CommentGroup<'s>> {
        std::mem::take(&mut self.comments)
    }

    /// Skip past the current token, discarding it: used for resynchronizing
    /// after a definition fails to parse so sibling top-level definitions
    /// still get a chance (spec.md §9 "parse errors together with a
    /// partial AST").
    pub(crate) fn skip(&mut self) {
        self.bump();
    }

    /// Advance `self.current` to the next significant token, scanning and
    /// classifying any interleaved comments per spec.md §4.3.1.
    fn advance(&mut self) {
        let prev_end_line = self.prev_end_line;
        let (line_comment, lead_comment, next) = self.scan_to_next_token(prev_end_line);
        self.pending_line_comment = line_comment;
        self.pending_lead_comment = lead_comment;
        self.prev_end_line = self.line_of(next.byte_start);
        self.current = next;
    }

    #[allow(clippy::type_complexity)]
    fn scan_to_next_token(
        &mut self,
        prev_end_line: usize,
    ) -> (Option<CommentGroup<'s>>, Option<CommentGroup<'s>>, Token<'s>) {
        // Each inner Vec is one maximal run of comments on consecutive
        // source lines (a candidate CommentGroup).
        let mut raw_groups: Vec<Vec<Token<'s>>> = Vec::new();
        let next;
        loop {
            match self.lexer.next_token() {
                Ok(tok) if tok.kind == TokenKind::Comment => {
                    let line = self.line_of(tok.byte_start);
                    let starts_new_group = match raw_groups.last().and_then(|g| g.last()) {
                        Some(last) => self.line_of(last.byte_start) + 1 != line,
                        None => false,
                    };
                    if starts_new_group || raw_groups.is_empty() {
                        raw_groups.push(vec![tok]);
                    } else {
                        raw_groups.last_mut().unwrap().push(tok);
                    }
                }
                Ok(tok) => {
                    next = tok;
                    break;
                }
                Err(err) => {
                    self.push_error(err);
                    next = Token::new(TokenKind::Eof, self.current.end, self.current.end)
                        .with_bytes(self.current.byte_end, self.current.byte_end);
                    break;
                }
            }
        }

        if !self.keep_comments {
            return (None, None, next);
        }

        let next_line = self.line_of(next.byte_start);
        let mut groups: Vec<CommentGroup<'s>> = raw_groups
            .into_iter()
            .map(|toks| self.build_group(toks))
            .collect();

        // Rule 5: every observed group lands in the flat list, whether or
        // not it ends up attached to anything.
        for g in &groups {
            self.comments.push(g.clone());
        }

        let mut line_comment = None;
        if let Some(first) = groups.first() {
            let first_line = self.group_start_line(first);
            if first_line == prev_end_line {
                let last_line = self.group_end_line(first);
                let group = groups.remove(0);
                if last_line != next_line {
                    line_comment = Some(group);
                }
                // else: trailing in-line comment butting against the next
                // token on the same line — discarded per rule 3.
            }
        }

        let mut lead_comment = None;
        if let Some(last) = groups.last() {
            let last_line = self.group_end_line(last);
            if last_line + 1 == next_line {
                lead_comment = groups.pop();
            }
        }

        (line_comment, lead_comment, next)
    }

    fn build_group(&self, toks: Vec<Token<'s>>) -> CommentGroup<'s> {
        let start = toks.first().unwrap().start;
        let end = toks.last().unwrap().end;
        let list: Vec<Comment<'s>> = toks
            .iter()
            .map(|t| Comment {
                location: Location::new(t.start, t.end, self.loc_source()),
                text: t.value_str().to_string(),
            })
            .collect();
        CommentGroup {
            location: Location::new(start, end, self.loc_source()),
            list,
        }
    }

    // `CommentGroup.location` is rune-indexed like `Token`, but line numbers
    // only depend on counting `\n` bytes, which are single-byte single-rune,
    // so the rune offset can be fed to `line_of` (which expects a byte
    // offset) directly: rune and byte offsets always agree on *line*, even
    // on a line containing multi-byte characters earlier in it.
    fn group_start_line(&self, group: &CommentGroup<'s>) -> usize {
        self.line_of(group.location.start)
    }

    fn group_end_line(&self, group: &CommentGroup<'s>) -> usize {
        self.line_of(group.location.end)
    }
}
