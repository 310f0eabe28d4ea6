use super::super::Parser;
use super::{directive, name, ty, value};
use crate::ast::VariableDefinition;
use crate::lexer::TokenKind;

/// `VariableDefinitions := '(' VariableDefinition+ ')'`.
pub(crate) fn variable_definitions<'s>(p: &mut Parser<'s>) -> Result<Vec<VariableDefinition<'s>>, ()> {
    if !p.at(TokenKind::ParenL) {
        return Ok(Vec::new());
    }
    p.bump();
    let mut out = Vec::new();
    while !p.at(TokenKind::ParenR) && !p.at(TokenKind::Eof) {
        out.push(variable_definition(p)?);
    }
    p.expect(TokenKind::ParenR, ")")?;
    Ok(out)
}

/// `VariableDefinition := '$' Name ':' Type DefaultValue? Directives?`.
fn variable_definition<'s>(p: &mut Parser<'s>) -> Result<VariableDefinition<'s>, ()> {
    let dollar = p.expect(TokenKind::Dollar, "$")?;
    let (name, _) = name::name(p)?;
    p.expect(TokenKind::Colon, ":")?;
    let variable_ty = ty::ty(p)?;
    let default_value = if p.at(TokenKind::Equals) {
        p.bump();
        Some(value::value(p)?)
    } else {
        None
    };
    let directives = directive::directives(p)?;

    let mut loc = p.loc(&dollar).join(variable_ty.location());
    if let Some(dv) = &default_value {
        loc = loc.join(dv.location());
    }
    if let Some(last) = directives.last() {
        loc = loc.join(&last.location);
    }

    Ok(VariableDefinition {
        location: loc,
        name,
        ty: variable_ty,
        default_value,
        directives,
    })
}
