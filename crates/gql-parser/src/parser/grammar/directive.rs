use super::super::Parser;
use super::{argument, input, name};
use crate::ast::{Directive, DirectiveDefinition};
use crate::lexer::TokenKind;

/// `Directives := Directive*`.
pub(crate) fn directives<'s>(p: &mut Parser<'s>) -> Result<Vec<Directive<'s>>, ()> {
    let mut out = Vec::new();
    while p.at(TokenKind::At) {
        out.push(directive(p)?);
    }
    Ok(out)
}

/// `Directive := '@' Name Arguments?`.
fn directive<'s>(p: &mut Parser<'s>) -> Result<Directive<'s>, ()> {
    let at = p.expect(TokenKind::At, "@")?;
    let (name, name_loc) = name::name(p)?;
    let arguments = argument::arguments(p)?;
    let mut loc = p.loc(&at).join(&name_loc);
    if let Some(last) = arguments.last() {
        loc = loc.join(&last.location);
    }
    Ok(Directive {
        location: loc,
        name,
        arguments,
    })
}

/// `DirectiveDefinition := 'directive' '@' Name ArgumentsDefinition?
/// 'repeatable'? 'on' DirectiveLocations`
/// `DirectiveLocations := '|'? Name ('|' Name)*`.
pub(crate) fn directive_definition<'s>(p: &mut Parser<'s>) -> Result<DirectiveDefinition<'s>, ()> {
    let doc = p.take_lead_comment();
    let kw = p.bump(); // 'directive'
    p.expect(TokenKind::At, "@")?;
    let (name, _) = name::name(p)?;
    let arguments = if p.at(TokenKind::ParenL) {
        input::arguments_definition(p)?
    } else {
        Vec::new()
    };
    let repeatable = if p.at_keyword("repeatable") {
        p.bump();
        true
    } else {
        false
    };
    if !p.at_keyword("on") {
        p.error(format!("Expected \"on\", found {}", p.describe_current()));
        return Err(());
    }
    p.bump();
    if p.at(TokenKind::Pipe) {
        p.bump();
    }
    let mut locations = Vec::new();
    let mut last_loc = None;
    loop {
        if !p.at(TokenKind::Name) {
            break;
        }
        let (loc_name, loc_span) = name::name(p)?;
        locations.push(loc_name);
        last_loc = Some(loc_span);
        if p.at(TokenKind::Pipe) {
            p.bump();
            continue;
        }
        break;
    }
    if locations.is_empty() {
        p.error("Expected Name, found ".to_string() + &p.describe_current());
        return Err(());
    }

    let mut loc = p.loc(&kw);
    if let Some(last) = last_loc {
        loc = loc.join(&last);
    }

    Ok(DirectiveDefinition {
        location: loc,
        name,
        arguments,
        repeatable,
        locations,
        doc,
    })
}
