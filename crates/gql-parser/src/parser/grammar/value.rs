use std::collections::HashSet;

use super::super::Parser;
use super::name;
use crate::ast::{ObjectField, Value};
use crate::lexer::TokenKind;

/// `Value := Variable | IntValue | FloatValue | StringValue | BooleanValue
///          | EnumValue | ListValue | ObjectValue`.
///
/// `NullValue` is deliberately absent: `null` is rejected wherever a value
/// is expected, the same way it is rejected wherever a name is expected
/// (spec.md §3.3, §8.5).
pub(crate) fn value<'s>(p: &mut Parser<'s>) -> Result<Value<'s>, ()> {
    match p.peek() {
        TokenKind::Dollar => variable(p),
        TokenKind::Int => {
            let t = p.bump();
            Ok(Value::Int {
                location: p.loc(&t),
                value: t.value_str().to_string(),
            })
        }
        TokenKind::Float => {
            let t = p.bump();
            Ok(Value::Float {
                location: p.loc(&t),
                value: t.value_str().to_string(),
            })
        }
        TokenKind::String => {
            let t = p.bump();
            Ok(Value::String {
                location: p.loc(&t),
                value: t.value_str().to_string(),
            })
        }
        TokenKind::Name => match p.current().value_str() {
            "true" => {
                let t = p.bump();
                Ok(Value::Boolean {
                    location: p.loc(&t),
                    value: true,
                })
            }
            "false" => {
                let t = p.bump();
                Ok(Value::Boolean {
                    location: p.loc(&t),
                    value: false,
                })
            }
            "null" => {
                p.error("Unexpected Name \"null\"");
                Err(())
            }
            _ => {
                let t = p.bump();
                Ok(Value::Enum {
                    location: p.loc(&t),
                    value: t.value_str().to_string(),
                })
            }
        },
        TokenKind::BracketL => list_value(p),
        TokenKind::BraceL => object_value(p),
        _ => {
            p.error(format!("Expected Value, found {}", p.describe_current()));
            Err(())
        }
    }
}

/// `Variable := '$' Name`, shared between value position
/// (`Value::Variable`) and `VariableDefinition`'s own leading `$Name`.
pub(crate) fn variable_name<'s>(p: &mut Parser<'s>) -> Result<(String, crate::ast::Location<'s>), ()> {
    let dollar = p.expect(TokenKind::Dollar, "$")?;
    let (name, name_loc) = name::name(p)?;
    Ok((name, p.loc(&dollar).join(&name_loc)))
}

fn variable<'s>(p: &mut Parser<'s>) -> Result<Value<'s>, ()> {
    let (name, loc) = variable_name(p)?;
    Ok(Value::Variable { location: loc, name })
}

fn list_value<'s>(p: &mut Parser<'s>) -> Result<Value<'s>, ()> {
    let open = p.expect(TokenKind::BracketL, "[")?;
    let mut values = Vec::new();
    while !p.at(TokenKind::BracketR) && !p.at(TokenKind::Eof) {
        values.push(value(p)?);
    }
    let close = p.expect(TokenKind::BracketR, "]")?;
    Ok(Value::List {
        location: p.loc(&open).join(&p.loc(&close)),
        values,
    })
}

fn object_value<'s>(p: &mut Parser<'s>) -> Result<Value<'s>, ()> {
    let open = p.expect(TokenKind::BraceL, "{")?;
    let mut fields = Vec::new();
    let mut seen = HashSet::new();
    while !p.at(TokenKind::BraceR) && !p.at(TokenKind::Eof) {
        let (name, name_loc) = name::name(p)?;
        p.expect(TokenKind::Colon, ":")?;
        let val = value(p)?;
        if !seen.insert(name.clone()) {
            p.error(format!("Duplicate input object field {name}"));
            return Err(());
        }
        let loc = name_loc.join(val.location());
        fields.push(ObjectField {
            location: loc,
            name,
            value: val,
        });
    }
    let close = p.expect(TokenKind::BraceR, "}")?;
    Ok(Value::Object {
        location: p.loc(&open).join(&p.loc(&close)),
        fields,
    })
}
