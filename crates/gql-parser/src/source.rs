use std::cell::OnceCell;

/// A named, immutable UTF-8 source body.
///
/// The line index used by [`Source::position`] is built lazily on first
/// query and is never invalidated afterwards, since `body` never changes
/// for the lifetime of a `Source`.
#[derive(Debug, PartialEq, Eq)]
pub struct Source {
    name: String,
    body: String,
    line_starts: OnceCell<Vec<usize>>,
}

/// A resolved position: a byte offset together with its 1-based line and
/// column (column counted in bytes from the start of the line).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Source {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            line_starts: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Resolve a byte offset into a [`Position`].
    ///
    /// Out-of-range offsets clamp to the last recorded line, as spec'd: this
    /// is used to report errors at EOF without a separate special case.
    pub fn position(&self, offset: usize) -> Position {
        let line_starts = self.line_starts();
        // Greatest index `i` such that line_starts[i] <= offset.
        let line_idx = match line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let line_start = line_starts[line_idx];
        Position {
            offset,
            line: line_idx + 1,
            column: offset.saturating_sub(line_start) + 1,
        }
    }

    /// The contents of a single 1-based line number, without its terminator.
    pub fn line(&self, line: usize) -> Option<&str> {
        let line_starts = self.line_starts();
        let start = *line_starts.get(line.checked_sub(1)?)?;
        let end = line_starts
            .get(line)
            .copied()
            .unwrap_or(self.body.len());
        let slice = self.body.get(start..end).unwrap_or("");
        Some(slice.trim_end_matches(['\n', '\r']))
    }

    pub fn line_count(&self) -> usize {
        self.line_starts().len()
    }

    fn line_starts(&self) -> &[usize] {
        self.line_starts
            .get_or_init(|| {
                let mut starts = vec![0];
                for (i, b) in self.body.bytes().enumerate() {
                    if b == b'\n' {
                        starts.push(i + 1);
                    }
                }
                starts
            })
            .as_slice()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn first_line_starts_at_one_one() {
        let src = Source::new("test", "abc\ndef");
        assert_eq!(
            src.position(0),
            Position {
                offset: 0,
                line: 1,
                column: 1
            }
        );
    }

    #[test]
    fn position_after_newline_is_next_line() {
        let src = Source::new("test", "abc\ndef");
        assert_eq!(
            src.position(4),
            Position {
                offset: 4,
                line: 2,
                column: 1
            }
        );
    }

    #[test]
    fn crlf_only_line_feed_counted_in_index() {
        // \r alone does not start a new index entry; only \n does.
        let src = Source::new("test", "abc\r\ndef");
        let pos = src.position(5);
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 1);
    }

    #[test]
    fn out_of_range_offset_clamps_to_last_line() {
        let src = Source::new("test", "abc\ndef");
        let pos = src.position(1000);
        assert_eq!(pos.line, 2);
    }

    #[test]
    fn multi_byte_column_counts_bytes() {
        let src = Source::new("test", "a: \"фы\"\nb");
        // 'ф' and 'ы' are each 2 bytes in UTF-8.
        let line2 = src.position(8);
        assert_eq!(line2.line, 2);
    }
}
