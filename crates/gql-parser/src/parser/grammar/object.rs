use super::super::Parser;
use super::{directive, input, name, ty};
use crate::ast::{FieldDefinition, ObjectTypeDefinition};
use crate::lexer::TokenKind;

/// `ImplementsInterfaces := 'implements' '&'? NamedType ('&' NamedType)*`,
/// parsed permissively: since `,` is lexed away as insignificant, and `&`
/// is optional between names, `implements A, B & C` and `implements A B &
/// C` are accepted identically (spec.md §4.3.2).
pub(crate) fn implements_interfaces<'s>(p: &mut Parser<'s>) -> Result<Vec<String>, ()> {
    if !p.at_keyword("implements") {
        return Ok(Vec::new());
    }
    p.bump();
    if p.at(TokenKind::Amp) {
        p.bump();
    }
    let mut out = Vec::new();
    loop {
        if !p.at(TokenKind::Name) {
            break;
        }
        let (n, _) = name::name(p)?;
        out.push(n);
        if p.at(TokenKind::Amp) {
            p.bump();
        }
        if !p.at(TokenKind::Name) {
            break;
        }
    }
    Ok(out)
}

/// `FieldsDefinition := '{' FieldDefinition+ '}'`, shared by object and
/// interface type definitions.
pub(crate) fn fields_definition<'s>(p: &mut Parser<'s>) -> Result<Vec<FieldDefinition<'s>>, ()> {
    p.bump(); // '{'
    let mut out = Vec::new();
    while !p.at(TokenKind::BraceR) && !p.at(TokenKind::Eof) {
        out.push(field_definition(p)?);
    }
    p.expect(TokenKind::BraceR, "}")?;
    Ok(out)
}

/// `FieldDefinition := Name ArgumentsDefinition? ':' Type Directives?`.
fn field_definition<'s>(p: &mut Parser<'s>) -> Result<FieldDefinition<'s>, ()> {
    let doc = p.take_lead_comment();
    let (name, name_loc) = name::name(p)?;
    let arguments = if p.at(TokenKind::ParenL) {
        input::arguments_definition(p)?
    } else {
        Vec::new()
    };
    p.expect(TokenKind::Colon, ":")?;
    let field_ty = ty::ty(p)?;
    let directives = directive::directives(p)?;
    let comment = p.take_line_comment();

    let mut loc = name_loc.join(field_ty.location());
    if let Some(last) = directives.last() {
        loc = loc.join(&last.location);
    }

    Ok(FieldDefinition {
        location: loc,
        name,
        arguments,
        ty: field_ty,
        directives,
        doc,
        comment,
    })
}

/// `ObjectTypeDefinition := 'type' Name ImplementsInterfaces? Directives?
/// FieldsDefinition?`. The leading `type` keyword has already been
/// confirmed by the caller.
pub(crate) fn object_type_definition<'s>(p: &mut Parser<'s>) -> Result<ObjectTypeDefinition<'s>, ()> {
    let doc = p.take_lead_comment();
    let kw = p.bump(); // 'type'
    let (name, name_loc) = name::name(p)?;
    let implements_interfaces = implements_interfaces(p)?;
    let directives = directive::directives(p)?;
    let fields = if p.at(TokenKind::BraceL) {
        fields_definition(p)?
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

    Ok(ObjectTypeDefinition {
        location: loc,
        name,
        implements_interfaces,
        directives,
        fields,
        doc,
    })
}

/// `TypeExtensionDefinition := 'extend' ObjectTypeDefinition` (spec.md
/// §3.3, §4.3.2); the leading `extend` keyword has already been confirmed
/// by the caller. A type extension carries no doc comment of its own (the
/// comment belongs to the original definition being extended).
pub(crate) fn type_extension<'s>(p: &mut Parser<'s>) -> Result<ObjectTypeDefinition<'s>, ()> {
    let extend_kw = p.bump(); // 'extend'
    let mut def = object_type_definition(p)?;
    def.location = p.loc(&extend_kw).join(&def.location);
    Ok(def)
}
