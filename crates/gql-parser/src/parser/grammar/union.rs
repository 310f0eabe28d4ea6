use super::super::Parser;
use super::{directive, name};
use crate::ast::UnionTypeDefinition;
use crate::lexer::TokenKind;

/// `UnionTypeDefinition := 'union' Name Directives? UnionMemberTypes?`
/// `UnionMemberTypes := '=' '|'? NamedType ('|' NamedType)*`.
pub(crate) fn union_type_definition<'s>(p: &mut Parser<'s>) -> Result<UnionTypeDefinition<'s>, ()> {
    let doc = p.take_lead_comment();
    let kw = p.bump(); // 'union'
    let (name, name_loc) = name::name(p)?;
    let directives = directive::directives(p)?;

    let mut members = Vec::new();
    if p.at(TokenKind::Equals) {
        p.bump();
        if p.at(TokenKind::Pipe) {
            p.bump();
        }
        loop {
            if !p.at(TokenKind::Name) {
                break;
            }
            let (member, _) = name::name(p)?;
            members.push(member);
            if p.at(TokenKind::Pipe) {
                p.bump();
                continue;
            }
            break;
        }
    }

    let comment = p.take_line_comment();

    let mut loc = p.loc(&kw).join(&name_loc);
    if let Some(last) = directives.last() {
        loc = loc.join(&last.location);
    }

    Ok(UnionTypeDefinition {
        location: loc,
        name,
        directives,
        members,
        doc,
        comment,
    })
}
