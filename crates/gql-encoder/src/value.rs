use gql_parser::ast::{Argument, Directive, Type, Value};

use crate::state::State;

pub(crate) fn write_type(state: &mut State, ty: &Type) {
    match ty {
        Type::Named { name, .. } => state.write(name),
        Type::List { of_type, .. } => {
            state.write("[");
            write_type(state, of_type);
            state.write("]");
        }
        Type::NonNull { of_type, .. } => {
            write_type(state, of_type);
            state.write("!");
        }
    }
}

pub(crate) fn write_value(state: &mut State, value: &Value) {
    match value {
        Value::Variable { name, .. } => {
            state.write("$");
            state.write(name);
        }
        Value::Int { value, .. } | Value::Float { value, .. } | Value::Enum { value, .. } => {
            state.write(value)
        }
        Value::String { value, .. } => write_string_literal(state, value),
        Value::Boolean { value, .. } => state.write(if *value { "true" } else { "false" }),
        Value::List { values, .. } => {
            write_joined(state, "[", "]", values, |state, v| write_value(state, v))
        }
        Value::Object { fields, .. } => write_joined(state, "{", "}", fields, |state, f| {
            state.write(&f.name);
            state.write(": ");
            write_value(state, &f.value);
        }),
    }
}

/// Standard GraphQL double-quoted string escaping: `\" \\ \b \f \n \r \t` and
/// `\u00XX` for any other control character below 0x0020.
pub(crate) fn write_string_literal(state: &mut State, mut text: &str) {
    state.write("\"");
    loop {
        match text.find(|c: char| (c < ' ' && c != '\t') || c == '"' || c == '\\') {
            Some(i) => {
                let (plain, rest) = text.split_at(i);
                state.write(plain);
                // The matched character is always single-byte ASCII.
                match rest.as_bytes()[0] {
                    b'\x08' => state.write("\\b"),
                    b'\n' => state.write("\\n"),
                    b'\x0c' => state.write("\\f"),
                    b'\r' => state.write("\\r"),
                    b'"' => state.write("\\\""),
                    b'\\' => state.write("\\\\"),
                    byte => state.write(&format!("\\u{byte:04X}")),
                }
                text = &rest[1..];
            }
            None => {
                state.write(text);
                break;
            }
        }
    }
    state.write("\"");
}

pub(crate) fn write_directives(state: &mut State, directives: &[Directive]) {
    for directive in directives {
        state.write(" @");
        state.write(&directive.name);
        write_arguments(state, &directive.arguments);
    }
}

pub(crate) fn write_arguments(state: &mut State, arguments: &[Argument]) {
    if !arguments.is_empty() {
        write_joined(state, "(", ")", arguments, |state, arg| {
            state.write(&arg.name);
            state.write(": ");
            write_value(state, &arg.value);
        })
    }
}

/// `open`, then every item separated by `", "`, then `close`. Used for
/// argument lists, list/object values, and implements/union member lists —
/// spec.md §4.4 specifies a flat `", "` join with no line-wrapping.
pub(crate) fn write_joined<T>(
    state: &mut State,
    open: &str,
    close: &str,
    items: &[T],
    mut write_one: impl FnMut(&mut State, &T),
) {
    state.write(open);
    let mut first = true;
    for item in items {
        if !first {
            state.write(", ");
        }
        first = false;
        write_one(state, item);
    }
    state.write(close);
}
