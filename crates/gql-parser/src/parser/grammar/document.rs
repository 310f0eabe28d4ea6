use super::super::Parser;
use super::{r#enum, fragment, input, interface, object, operation, scalar, schema, union};
use crate::ast::{Definition, Document};
use crate::lexer::TokenKind;

/// `Document := Definition+`, parsed until EOF.
///
/// A definition that fails to parse is skipped rather than aborting the
/// whole document: the parser resynchronizes by discarding tokens up to the
/// next plausible definition start (or EOF), so sibling definitions still
/// make it into the returned (partial) AST alongside the recorded error
/// (spec.md §4.3, §9 "parse errors together with a partial AST").
pub(crate) fn document<'s>(p: &mut Parser<'s>) -> Document<'s> {
    let mut definitions = Vec::new();
    while !p.at(TokenKind::Eof) {
        match definition(p) {
            Ok(def) => definitions.push(def),
            Err(()) => resynchronize(p),
        }
    }
    Document {
        definitions,
        comments: p.take_comments(),
    }
}

fn definition<'s>(p: &mut Parser<'s>) -> Result<Definition<'s>, ()> {
    if p.at(TokenKind::BraceL) {
        return operation::operation_definition(p).map(Definition::Operation);
    }

    if !p.at(TokenKind::Name) {
        p.error(format!(
            "Unexpected token, found {}",
            p.describe_current()
        ));
        return Err(());
    }

    match p.current().value_str() {
        "query" | "mutation" | "subscription" => {
            operation::operation_definition(p).map(Definition::Operation)
        }
        "fragment" => fragment::fragment_definition(p).map(Definition::Fragment),
        "schema" => schema::schema_definition(p).map(Definition::Schema),
        "scalar" => scalar::scalar_type_definition(p).map(Definition::Scalar),
        "type" => object::object_type_definition(p).map(Definition::Object),
        "interface" => interface::interface_type_definition(p).map(Definition::Interface),
        "union" => union::union_type_definition(p).map(Definition::Union),
        "enum" => r#enum::enum_type_definition(p).map(Definition::Enum),
        "input" => input::input_object_type_definition(p).map(Definition::InputObject),
        "directive" => {
            super::directive::directive_definition(p).map(Definition::Directive)
        }
        "extend" => object::type_extension(p).map(Definition::TypeExtension),
        other => {
            p.error(format!("Unexpected Name \"{other}\""));
            Err(())
        }
    }
}

/// Skip tokens until EOF or a token that plausibly starts a new top-level
/// definition, so a malformed definition does not swallow the rest of the
/// document.
fn resynchronize<'s>(p: &mut Parser<'s>) {
    loop {
        if p.at(TokenKind::Eof) || p.at(TokenKind::BraceL) {
            return;
        }
        if p.at(TokenKind::Name)
            && matches!(
                p.current().value_str(),
                "query"
                    | "mutation"
                    | "subscription"
                    | "fragment"
                    | "schema"
                    | "scalar"
                    | "type"
                    | "interface"
                    | "union"
                    | "enum"
                    | "input"
                    | "directive"
                    | "extend"
            )
        {
            return;
        }
        p.skip();
    }
}
