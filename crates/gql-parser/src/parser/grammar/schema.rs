use super::super::Parser;
use super::{directive, name};
use crate::ast::{OperationType, SchemaDefinition};
use crate::lexer::TokenKind;

/// `SchemaDefinition := 'schema' Directives? '{' OperationTypeDefinition+ '}'`
/// `OperationTypeDefinition := OperationType ':' NamedType`.
pub(crate) fn schema_definition<'s>(p: &mut Parser<'s>) -> Result<SchemaDefinition<'s>, ()> {
    let doc = p.take_lead_comment();
    let kw = p.bump(); // 'schema'
    let directives = directive::directives(p)?;
    p.expect(TokenKind::BraceL, "{")?;
    let mut root_operations = Vec::new();
    while !p.at(TokenKind::BraceR) && !p.at(TokenKind::Eof) {
        root_operations.push(operation_type_definition(p)?);
    }
    let close = p.expect(TokenKind::BraceR, "}")?;

    Ok(SchemaDefinition {
        location: p.loc(&kw).join(&p.loc(&close)),
        directives,
        root_operations,
        doc,
    })
}

fn operation_type_definition<'s>(
    p: &mut Parser<'s>,
) -> Result<crate::ast::OperationTypeDefinition<'s>, ()> {
    let operation = match p.current().value_str() {
        "query" => OperationType::Query,
        "mutation" => OperationType::Mutation,
        "subscription" => OperationType::Subscription,
        other => {
            p.error(format!("Unexpected Name \"{other}\""));
            return Err(());
        }
    };
    let op_tok = p.bump();
    p.expect(TokenKind::Colon, ":")?;
    let (named_type, type_loc) = name::name(p)?;

    Ok(crate::ast::OperationTypeDefinition {
        location: p.loc(&op_tok).join(&type_loc),
        operation,
        named_type,
    })
}
