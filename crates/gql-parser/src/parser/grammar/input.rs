use super::super::Parser;
use super::{directive, name, ty, value};
use crate::ast::{InputObjectTypeDefinition, InputValueDefinition};
use crate::lexer::TokenKind;

/// `InputValueDefinition := Name ':' Type DefaultValue? Directives?`.
///
/// Shared by `ArgumentsDefinition` (directive/field arguments) and
/// `InputFieldsDefinition` (input-object fields); neither caller recurses
/// back into an argument list here, which is what makes an input-object
/// field forbid its own arguments (spec.md §4.3.2) — if a caller mistakenly
/// writes one, the following `expect(Colon)` simply fails with
/// `"Expected :, found ("`.
pub(crate) fn input_value_definition<'s>(p: &mut Parser<'s>) -> Result<InputValueDefinition<'s>, ()> {
    let doc = p.take_lead_comment();
    let (name, name_loc) = name::name(p)?;
    p.expect(TokenKind::Colon, ":")?;
    let field_ty = ty::ty(p)?;
    let default_value = if p.at(TokenKind::Equals) {
        p.bump();
        Some(value::value(p)?)
    } else {
        None
    };
    let directives = directive::directives(p)?;
    let comment = p.take_line_comment();

    let mut loc = name_loc.join(field_ty.location());
    if let Some(dv) = &default_value {
        loc = loc.join(dv.location());
    }
    if let Some(last) = directives.last() {
        loc = loc.join(&last.location);
    }

    Ok(InputValueDefinition {
        location: loc,
        name,
        ty: field_ty,
        default_value,
        directives,
        doc,
        comment,
    })
}

/// `ArgumentsDefinition := '(' InputValueDefinition+ ')'`.
pub(crate) fn arguments_definition<'s>(p: &mut Parser<'s>) -> Result<Vec<InputValueDefinition<'s>>, ()> {
    p.bump(); // '('
    let mut out = Vec::new();
    while !p.at(TokenKind::ParenR) && !p.at(TokenKind::Eof) {
        out.push(input_value_definition(p)?);
    }
    p.expect(TokenKind::ParenR, ")")?;
    Ok(out)
}

/// `InputFieldsDefinition := '{' InputValueDefinition+ '}'`.
pub(crate) fn input_fields_definition<'s>(p: &mut Parser<'s>) -> Result<Vec<InputValueDefinition<'s>>, ()> {
    p.bump(); // '{'
    let mut out = Vec::new();
    while !p.at(TokenKind::BraceR) && !p.at(TokenKind::Eof) {
        out.push(input_value_definition(p)?);
    }
    p.expect(TokenKind::BraceR, "}")?;
    Ok(out)
}

/// `InputObjectTypeDefinition := 'input' Name Directives?
/// InputFieldsDefinition?`.
pub(crate) fn input_object_type_definition<'s>(
    p: &mut Parser<'s>,
) -> Result<InputObjectTypeDefinition<'s>, ()> {
    let doc = p.take_lead_comment();
    let kw = p.bump(); // 'input'
    let (name, name_loc) = name::name(p)?;
    let directives = directive::directives(p)?;
    let fields = if p.at(TokenKind::BraceL) {
        input_fields_definition(p)?
    } else {
        Vec::new()
    };

    let mut loc = p.loc(&kw).join(&name_loc);
    if let Some(last) = directives.last() {
        loc = loc.join(&last.location);
    }
    if let Some(last) = fields.last() {
        loc = loc.join(&last.location);
    }

    Ok(InputObjectTypeDefinition {
        location: loc,
        name,
        directives,
        fields,
        doc,
    })
}
