use super::super::Parser;
use super::{field, fragment};
use crate::ast::{Location, Selection};
use crate::lexer::TokenKind;

/// `SelectionSet := '{' Selection+ '}'`.
pub(crate) fn selection_set<'s>(p: &mut Parser<'s>) -> Result<(Vec<Selection<'s>>, Location<'s>), ()> {
    let open = p.expect(TokenKind::BraceL, "{")?;
    let mut selections = Vec::new();
    while !p.at(TokenKind::BraceR) && !p.at(TokenKind::Eof) {
        selections.push(selection(p)?);
    }
    let close = p.expect(TokenKind::BraceR, "}")?;
    Ok((selections, p.loc(&open).join(&p.loc(&close))))
}

/// `Selection := Field | FragmentSpread | InlineFragment`.
fn selection<'s>(p: &mut Parser<'s>) -> Result<Selection<'s>, ()> {
    if p.at(TokenKind::Spread) {
        fragment::fragment_selection(p)
    } else {
        field::field(p).map(Selection::Field)
    }
}
