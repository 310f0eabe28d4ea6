use gql_parser::ast::{
    CommentGroup, DirectiveDefinition, EnumTypeDefinition, EnumValueDefinition, FieldDefinition,
    InputObjectTypeDefinition, InputValueDefinition, InterfaceTypeDefinition,
    ObjectTypeDefinition, OperationTypeDefinition, ScalarTypeDefinition, SchemaDefinition,
    UnionTypeDefinition,
};

use crate::state::State;
use crate::value::{write_directives, write_joined, write_type, write_value};

/// Emits each line of a lead (doc) comment group prefixed with `# `,
/// immediately followed by a newline into the node it annotates — spec.md
/// §3.4 invariant 4, no blank line in between.
fn write_doc(state: &mut State, doc: &Option<CommentGroup>) {
    if let Some(group) = doc {
        for line in group.text_lines() {
            state.write("# ");
            state.write(line);
            state.new_line_or_space();
        }
    }
}

/// Emits a trailing line comment after the node's declaration, on the same
/// line (spec.md §3.4 invariant 5).
fn write_trailing_comment(state: &mut State, comment: &Option<CommentGroup>) {
    if let Some(group) = comment {
        let mut lines = group.text_lines();
        if let Some(first) = lines.next() {
            state.write(" # ");
            state.write(first);
        }
        for line in lines {
            state.new_line_or_space();
            state.write("# ");
            state.write(line);
        }
    }
}

fn write_arguments_definition(state: &mut State, arguments: &[InputValueDefinition]) {
    if !arguments.is_empty() {
        write_joined(state, "(", ")", arguments, |state, arg| {
            write_input_value_definition(state, arg)
        });
    }
}

fn write_input_value_definition(state: &mut State, input: &InputValueDefinition) {
    write_doc(state, &input.doc);
    state.write(&input.name);
    state.write(": ");
    write_type(state, &input.ty);
    if let Some(default) = &input.default_value {
        state.write(" = ");
        write_value(state, default);
    }
    write_directives(state, &input.directives);
    write_trailing_comment(state, &input.comment);
}

fn write_field_definition(state: &mut State, field: &FieldDefinition) {
    write_doc(state, &field.doc);
    state.write(&field.name);
    write_arguments_definition(state, &field.arguments);
    state.write(": ");
    write_type(state, &field.ty);
    write_directives(state, &field.directives);
    write_trailing_comment(state, &field.comment);
}

fn write_fields_block(state: &mut State, fields: &[FieldDefinition]) {
    if !fields.is_empty() {
        state.write(" {");
        state.indent();
        let mut first = true;
        for field in fields {
            if !first {
                state.new_line_or_space();
            }
            first = false;
            write_field_definition(state, field);
        }
        state.dedent();
        state.write("}");
    }
}

fn write_implements_interfaces(state: &mut State, interfaces: &[String]) {
    if let Some((first, rest)) = interfaces.split_first() {
        state.write(" implements ");
        state.write(first);
        for name in rest {
            state.write(" & ");
            state.write(name);
        }
    }
}

pub(crate) fn write_schema_definition(state: &mut State, schema: &SchemaDefinition) {
    write_doc(state, &schema.doc);
    state.write("schema");
    write_directives(state, &schema.directives);
    state.write(" {");
    state.indent();
    let mut first = true;
    for root in &schema.root_operations {
        if !first {
            state.new_line_or_space();
        }
        first = false;
        write_operation_type_definition(state, root);
    }
    state.dedent();
    state.write("}");
}

fn write_operation_type_definition(state: &mut State, op: &OperationTypeDefinition) {
    state.write(op.operation.as_str());
    state.write(": ");
    state.write(&op.named_type);
}

pub(crate) fn write_scalar_type_definition(state: &mut State, scalar: &ScalarTypeDefinition) {
    write_doc(state, &scalar.doc);
    state.write("scalar ");
    state.write(&scalar.name);
    write_directives(state, &scalar.directives);
}

pub(crate) fn write_object_type_definition(state: &mut State, obj: &ObjectTypeDefinition) {
    write_doc(state, &obj.doc);
    state.write("type ");
    state.write(&obj.name);
    write_implements_interfaces(state, &obj.implements_interfaces);
    write_directives(state, &obj.directives);
    write_fields_block(state, &obj.fields);
}

pub(crate) fn write_type_extension(state: &mut State, obj: &ObjectTypeDefinition) {
    state.write("extend ");
    write_object_type_definition(state, obj);
}

pub(crate) fn write_interface_type_definition(
    state: &mut State,
    interface: &InterfaceTypeDefinition,
) {
    write_doc(state, &interface.doc);
    state.write("interface ");
    state.write(&interface.name);
    write_implements_interfaces(state, &interface.implements_interfaces);
    write_directives(state, &interface.directives);
    write_fields_block(state, &interface.fields);
}

pub(crate) fn write_union_type_definition(state: &mut State, union: &UnionTypeDefinition) {
    write_doc(state, &union.doc);
    state.write("union ");
    state.write(&union.name);
    write_directives(state, &union.directives);
    if let Some((first, rest)) = union.members.split_first() {
        state.write(" = ");
        state.write(first);
        for member in rest {
            state.write(" | ");
            state.write(member);
        }
    }
    write_trailing_comment(state, &union.comment);
}

pub(crate) fn write_enum_type_definition(state: &mut State, enum_def: &EnumTypeDefinition) {
    write_doc(state, &enum_def.doc);
    state.write("enum ");
    state.write(&enum_def.name);
    write_directives(state, &enum_def.directives);
    if !enum_def.values.is_empty() {
        state.write(" {");
        state.indent();
        let mut first = true;
        for value in &enum_def.values {
            if !first {
                state.new_line_or_space();
            }
            first = false;
            write_enum_value_definition(state, value);
        }
        state.dedent();
        state.write("}");
    }
}

fn write_enum_value_definition(state: &mut State, value: &EnumValueDefinition) {
    write_doc(state, &value.doc);
    state.write(&value.value);
    write_directives(state, &value.directives);
    write_trailing_comment(state, &value.comment);
}

pub(crate) fn write_input_object_type_definition(
    state: &mut State,
    input: &InputObjectTypeDefinition,
) {
    write_doc(state, &input.doc);
    state.write("input ");
    state.write(&input.name);
    write_directives(state, &input.directives);
    if !input.fields.is_empty() {
        state.write(" {");
        state.indent();
        let mut first = true;
        for field in &input.fields {
            if !first {
                state.new_line_or_space();
            }
            first = false;
            write_input_value_definition(state, field);
        }
        state.dedent();
        state.write("}");
    }
}

pub(crate) fn write_directive_definition(state: &mut State, directive: &DirectiveDefinition) {
    write_doc(state, &directive.doc);
    state.write("directive @");
    state.write(&directive.name);
    write_arguments_definition(state, &directive.arguments);
    if directive.repeatable {
        state.write(" repeatable");
    }
    if let Some((first, rest)) = directive.locations.split_first() {
        state.write(" on ");
        state.write(first);
        for location in rest {
            state.write(" | ");
            state.write(location);
        }
    }
}
