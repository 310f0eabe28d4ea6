use super::super::Parser;
use super::{name, value};
use crate::ast::Argument;
use crate::lexer::TokenKind;

/// `Arguments := '(' Argument+ ')'`, absent entirely when no `(` follows.
pub(crate) fn arguments<'s>(p: &mut Parser<'s>) -> Result<Vec<Argument<'s>>, ()> {
    if !p.at(TokenKind::ParenL) {
        return Ok(Vec::new());
    }
    p.bump();
    let mut args = Vec::new();
    while !p.at(TokenKind::ParenR) && !p.at(TokenKind::Eof) {
        args.push(argument(p)?);
    }
    p.expect(TokenKind::ParenR, ")")?;
    Ok(args)
}

/// `Argument := Name ':' Value`.
fn argument<'s>(p: &mut Parser<'s>) -> Result<Argument<'s>, ()> {
    let (name, name_loc) = name::name(p)?;
    p.expect(TokenKind::Colon, ":")?;
    let val = value::value(p)?;
    let loc = name_loc.join(val.location());
    Ok(Argument {
        location: loc,
        name,
        value: val,
    })
}
