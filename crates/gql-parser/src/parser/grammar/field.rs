use super::super::Parser;
use super::{argument, directive, name, selection};
use crate::ast::Field;
use crate::lexer::TokenKind;

/// `Field := Alias? Name Arguments? Directives? SelectionSet?`
/// `Alias := Name ':'`.
///
/// Aliasing needs one token of lookahead past the first `Name` to tell
/// whether it is the field's own name or an alias; since the parser only
/// exposes the current token, the first name is simply consumed eagerly and
/// reinterpreted as an alias once a following `:` is seen.
pub(crate) fn field<'s>(p: &mut Parser<'s>) -> Result<Field<'s>, ()> {
    let (first, first_loc) = name::name(p)?;
    let (alias, name, name_loc) = if p.at(TokenKind::Colon) {
        p.bump();
        let (real, real_loc) = name::name(p)?;
        (Some(first), real, real_loc)
    } else {
        (None, first, first_loc)
    };

    let mut loc = first_loc.join(&name_loc);

    let arguments = argument::arguments(p)?;
    if let Some(last) = arguments.last() {
        loc = loc.join(&last.location);
    }
    let directives = directive::directives(p)?;
    if let Some(last) = directives.last() {
        loc = loc.join(&last.location);
    }
    let selection_set = if p.at(TokenKind::BraceL) {
        let (sels, set_loc) = selection::selection_set(p)?;
        loc = loc.join(&set_loc);
        sels
    } else {
        Vec::new()
    };

    Ok(Field {
        location: loc,
        alias,
        name,
        arguments,
        directives,
        selection_set,
    })
}
