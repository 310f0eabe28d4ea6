use super::super::Parser;
use super::{directive, name, selection, variable};
use crate::ast::{OperationDefinition, OperationType};
use crate::lexer::TokenKind;

/// `OperationDefinition := OperationType Name? VariableDefinitions?
/// Directives? SelectionSet | SelectionSet` (the shorthand anonymous query
/// form, spec.md §4.3.2).
pub(crate) fn operation_definition<'s>(p: &mut Parser<'s>) -> Result<OperationDefinition<'s>, ()> {
    if p.at(TokenKind::BraceL) {
        let (selection_set, loc) = selection::selection_set(p)?;
        return Ok(OperationDefinition {
            location: loc,
            operation: OperationType::Query,
            name: None,
            variable_definitions: Vec::new(),
            directives: Vec::new(),
            selection_set,
        });
    }

    let operation = match p.current().value_str() {
        "query" => OperationType::Query,
        "mutation" => OperationType::Mutation,
        "subscription" => OperationType::Subscription,
        other => {
            p.error(format!("Unexpected Name \"{other}\""));
            return Err(());
        }
    };
    let op_token = p.bump();

    let op_name = if p.at(TokenKind::Name) {
        let (n, _) = name::name(p)?;
        Some(n)
    } else {
        None
    };

    let variable_definitions = variable::variable_definitions(p)?;
    let directives = directive::directives(p)?;
    let (selection_set, set_loc) = selection::selection_set(p)?;

    Ok(OperationDefinition {
        location: p.loc(&op_token).join(&set_loc),
        operation,
        name: op_name,
        variable_definitions,
        directives,
        selection_set,
    })
}
