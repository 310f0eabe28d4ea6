use super::super::Parser;
use super::{directive, name, object};
use crate::ast::InterfaceTypeDefinition;
use crate::lexer::TokenKind;

/// `InterfaceTypeDefinition := 'interface' Name ImplementsInterfaces?
/// Directives? FieldsDefinition?` — identical shape to
/// `ObjectTypeDefinition` (interfaces can themselves implement other
/// interfaces), so field-list and implements-list parsing are shared with
/// `object.rs` rather than duplicated.
pub(crate) fn interface_type_definition<'s>(p: &mut Parser<'s>) -> Result<InterfaceTypeDefinition<'s>, ()> {
    let doc = p.take_lead_comment();
    let kw = p.bump(); // 'interface'
    let (name, name_loc) = name::name(p)?;
    let implements_interfaces = object::implements_interfaces(p)?;
    let directives = directive::directives(p)?;
    let fields = if p.at(TokenKind::BraceL) {
        object::fields_definition(p)?
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

    Ok(InterfaceTypeDefinition {
        location: loc,
        name,
        implements_interfaces,
        directives,
        fields,
        doc,
    })
}
