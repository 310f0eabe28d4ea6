use super::super::Parser;
use super::{directive, name};
use crate::ast::ScalarTypeDefinition;

/// `ScalarTypeDefinition := 'scalar' Name Directives?`.
pub(crate) fn scalar_type_definition<'s>(p: &mut Parser<'s>) -> Result<ScalarTypeDefinition<'s>, ()> {
    let doc = p.take_lead_comment();
    let kw = p.bump(); // 'scalar'
    let (name, name_loc) = name::name(p)?;
    let directives = directive::directives(p)?;

    let mut loc = p.loc(&kw).join(&name_loc);
    if let Some(last) = directives.last() {
        loc = loc.join(&last.location);
    }

    Ok(ScalarTypeDefinition {
        location: loc,
        name,
        directives,
        doc,
    })
}
