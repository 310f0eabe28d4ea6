use gql_parser::ast::{
    FragmentDefinition, InlineFragment, OperationDefinition, OperationType, Selection,
    VariableDefinition,
};

use crate::state::State;
use crate::value::{write_arguments, write_directives, write_joined, write_type, write_value};

pub(crate) fn write_operation(state: &mut State, op: &OperationDefinition) {
    let shorthand = op.operation == OperationType::Query
        && op.name.is_none()
        && op.variable_definitions.is_empty()
        && op.directives.is_empty();
    if !shorthand {
        state.write(op.operation.as_str());
        if let Some(name) = &op.name {
            state.write(" ");
            state.write(name);
        }
        if !op.variable_definitions.is_empty() {
            write_joined(state, "(", ")", &op.variable_definitions, |state, var| {
                write_variable_definition(state, var)
            });
        }
        write_directives(state, &op.directives);
        state.write(" ");
    }
    write_selection_set(state, &op.selection_set);
}

pub(crate) fn write_fragment(state: &mut State, frag: &FragmentDefinition) {
    state.write("fragment ");
    state.write(&frag.name);
    state.write(" on ");
    state.write(&frag.type_condition);
    write_directives(state, &frag.directives);
    state.write(" ");
    write_selection_set(state, &frag.selection_set);
}

fn write_variable_definition(state: &mut State, var: &VariableDefinition) {
    state.write("$");
    state.write(&var.name);
    state.write(": ");
    write_type(state, &var.ty);
    if let Some(default) = &var.default_value {
        state.write(" = ");
        write_value(state, default);
    }
    write_directives(state, &var.directives);
}

pub(crate) fn write_selection_set(state: &mut State, selections: &[Selection]) {
    state.write("{");
    if let Some((first, rest)) = selections.split_first() {
        state.indent();
        write_selection(state, first);
        for sel in rest {
            state.new_line_or_space();
            write_selection(state, sel);
        }
        state.dedent();
    }
    state.write("}");
}

fn write_selection(state: &mut State, selection: &Selection) {
    match selection {
        Selection::Field(field) => {
            if let Some(alias) = &field.alias {
                state.write(alias);
                state.write(": ");
            }
            state.write(&field.name);
            write_arguments(state, &field.arguments);
            write_directives(state, &field.directives);
            if !field.selection_set.is_empty() {
                state.write(" ");
                write_selection_set(state, &field.selection_set);
            }
        }
        Selection::FragmentSpread(spread) => {
            state.write("...");
            state.write(&spread.name);
            write_directives(state, &spread.directives);
        }
        Selection::InlineFragment(inline) => write_inline_fragment(state, inline),
    }
}

fn write_inline_fragment(state: &mut State, inline: &InlineFragment) {
    state.write("...");
    if let Some(type_condition) = &inline.type_condition {
        state.write(" on ");
        state.write(type_condition);
    }
    write_directives(state, &inline.directives);
    state.write(" ");
    write_selection_set(state, &inline.selection_set);
}
