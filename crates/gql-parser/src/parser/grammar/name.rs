use super::super::Parser;
use crate::ast::Location;
use crate::lexer::TokenKind;

/// `Name := /[_A-Za-z][_0-9A-Za-z]*/`, rejecting the reserved literal
/// `null` wherever a name is expected (spec.md §4.3.2, §8.5).
pub(crate) fn name<'s>(p: &mut Parser<'s>) -> Result<(String, Location<'s>), ()> {
    if p.at(TokenKind::Name) && p.current().value_str() == "null" {
        p.error("Unexpected Name \"null\"");
        return Err(());
    }
    let tok = p.expect(TokenKind::Name, "Name")?;
    let loc = p.loc(&tok);
    Ok((tok.value_str().to_string(), loc))
}
