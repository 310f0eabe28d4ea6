use super::super::Parser;
use super::{directive, name};
use crate::ast::{EnumTypeDefinition, EnumValueDefinition};
use crate::lexer::TokenKind;

/// `EnumTypeDefinition := 'enum' Name Directives? EnumValuesDefinition?`
/// `EnumValuesDefinition := '{' EnumValueDefinition+ '}'`.
pub(crate) fn enum_type_definition<'s>(p: &mut Parser<'s>) -> Result<EnumTypeDefinition<'s>, ()> {
    let doc = p.take_lead_comment();
    let kw = p.bump(); // 'enum'
    let (name, name_loc) = name::name(p)?;
    let directives = directive::directives(p)?;
    let values = if p.at(TokenKind::BraceL) {
        enum_values_definition(p)?
    } else {
        Vec::new()
    };

    let mut loc = p.loc(&kw).join(&name_loc);
    if let Some(last) = directives.last() {
        loc = loc.join(&last.location);
    }
    if let Some(last) = values.last() {
        loc = loc.join(&last.location);
    }

    Ok(EnumTypeDefinition {
        location: loc,
        name,
        directives,
        values,
        doc,
    })
}

fn enum_values_definition<'s>(p: &mut Parser<'s>) -> Result<Vec<EnumValueDefinition<'s>>, ()> {
    p.bump(); // '{'
    let mut out = Vec::new();
    while !p.at(TokenKind::BraceR) && !p.at(TokenKind::Eof) {
        out.push(enum_value_definition(p)?);
    }
    p.expect(TokenKind::BraceR, "}")?;
    Ok(out)
}

/// `EnumValueDefinition := EnumValue Directives?`, `EnumValue := Name`
/// excluding `true`/`false`/`null` (spec.md §4.3.2, reusing the same
/// reserved-literal rule as a value-position `Name`).
fn enum_value_definition<'s>(p: &mut Parser<'s>) -> Result<EnumValueDefinition<'s>, ()> {
    let doc = p.take_lead_comment();
    if p.at(TokenKind::Name) && matches!(p.current().value_str(), "true" | "false" | "null") {
        let found = p.current().value_str().to_string();
        p.error(format!("Unexpected Name \"{found}\""));
        return Err(());
    }
    let (value, value_loc) = name::name(p)?;
    let directives = directive::directives(p)?;
    let comment = p.take_line_comment();

    let mut loc = value_loc;
    if let Some(last) = directives.last() {
        loc = loc.join(&last.location);
    }

    Ok(EnumValueDefinition {
        location: loc,
        value,
        directives,
        doc,
        comment,
    })
}
