use super::Location;

/// A single `#`-to-end-of-line comment, with its text trimmed of leading
/// and trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment<'s> {
    pub location: Location<'s>,
    pub text: String,
}

/// A maximal run of [`Comment`]s on consecutive source lines with no
/// intervening non-comment token (spec.md §3.3, §3.4 invariant 3).
///
/// `list` is always non-empty and sorted by source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentGroup<'s> {
    pub location: Location<'s>,
    pub list: Vec<Comment<'s>>,
}

impl<'s> CommentGroup<'s> {
    /// Render the group as it would be attached as a lead (doc) comment:
    /// each line prefixed with `# `, matching the printer's rule in
    /// spec.md §4.4.
    pub fn text_lines(&self) -> impl Iterator<Item = &str> {
        self.list.iter().map(|c| c.text.as_str())
    }
}
