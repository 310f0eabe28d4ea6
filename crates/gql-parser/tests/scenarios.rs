//! End-to-end scenarios S1-S6 (minus S6, which belongs to the cycle
//! analyzer) plus a handful of the cross-cutting testable properties.

use gql_parser::ast::{Definition, Selection, Value};
use gql_parser::{parse, Lexer, ParseOptions, Source};

fn selection_name(sel: &Selection) -> &str {
    match sel {
        Selection::Field(f) => &f.name,
        _ => panic!("expected a field selection"),
    }
}

#[test]
fn s1_anonymous_query_with_nested_selection() {
    use pretty_assertions::assert_eq;

    let source = Source::new("s1", "{ a, b { x }, c }");
    let (doc, errors) = parse(&source, ParseOptions::default());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(doc.definitions.len(), 1);
    let Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected an operation definition");
    };
    assert_eq!(op.operation.as_str(), "query");
    assert!(op.name.is_none());
    assert_eq!(op.selection_set.len(), 3);
    assert_eq!(selection_name(&op.selection_set[0]), "a");
    assert_eq!(selection_name(&op.selection_set[1]), "b");
    assert_eq!(selection_name(&op.selection_set[2]), "c");

    let Selection::Field(b) = &op.selection_set[1] else {
        unreachable!()
    };
    assert_eq!(b.selection_set.len(), 1);
    assert_eq!(selection_name(&b.selection_set[0]), "x");
}

#[test]
fn s2_object_type_definition() {
    let source = Source::new("s2", "type Hello { world: String }");
    let (doc, errors) = parse(&source, ParseOptions::default());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(doc.definitions.len(), 1);
    let Definition::Object(obj) = &doc.definitions[0] else {
        panic!("expected an object type definition");
    };
    assert_eq!(obj.name, "Hello");
    assert_eq!(obj.fields.len(), 1);
    assert_eq!(obj.fields[0].name, "world");
    assert_eq!(obj.fields[0].ty.inner_name(), "String");
}

#[test]
fn s3_comment_attribution() {
    use pretty_assertions::assert_eq;

    let source = Source::new("s3", "# doc\ntype T { f: Int # tl\n}");
    let options = ParseOptions {
        keep_comments: true,
        ..Default::default()
    };
    let (doc, errors) = parse(&source, options);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    let Definition::Object(obj) = &doc.definitions[0] else {
        panic!("expected an object type definition");
    };
    assert_eq!(obj.name, "T");
    let doc_group = obj.doc.as_ref().expect("missing lead doc comment");
    assert_eq!(doc_group.list.len(), 1);
    assert_eq!(doc_group.list[0].text, "doc");

    let field = &obj.fields[0];
    assert_eq!(field.name, "f");
    let line_comment = field.comment.as_ref().expect("missing trailing comment");
    assert_eq!(line_comment.list[0].text, "tl");

    // Every observed group also lands in the document's flat list.
    assert_eq!(doc.comments.len(), 2);
}

#[test]
fn s4_duplicate_object_literal_field_is_a_syntax_error() {
    let source = Source::new("s4", "{ f(x: { a: 1 a: 2 }) }");
    let (_doc, errors) = parse(&source, ParseOptions::default());
    assert!(
        errors
            .iter()
            .any(|e| e.message() == "Duplicate input object field a"),
        "errors: {errors:?}"
    );
}

#[test]
fn s5_string_value_preserves_multi_byte_characters_and_rune_offsets() {
    let text = "Has a \u{444}\u{44b}\u{4e16}\u{754c} multi-byte character.";
    let source = Source::new("s5", format!("{{ field(arg: \"{text}\") }}"));
    let (doc, errors) = parse(&source, ParseOptions::default());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    let Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected an operation definition");
    };
    let Selection::Field(field) = &op.selection_set[0] else {
        panic!("expected a field selection");
    };
    let Value::String { value, .. } = &field.arguments[0].value else {
        panic!("expected a string value");
    };
    assert_eq!(value, text);

    // The final EOF token's rune offset equals the source's rune count, not
    // its byte count, even though the body contains multi-byte characters.
    let mut lexer = Lexer::new(source.body());
    let mut last = lexer.next_token().unwrap();
    while !last.is_eof() {
        last = lexer.next_token().unwrap();
    }
    assert_eq!(last.start, source.body().chars().count());
}

#[test]
fn unexpected_name_null_is_rejected_as_a_value() {
    let source = Source::new("null-value", "{ f(x: null) }");
    let (_doc, errors) = parse(&source, ParseOptions::default());
    assert!(
        errors
            .iter()
            .any(|e| e.message() == "Unexpected Name \"null\""),
        "errors: {errors:?}"
    );
}

#[test]
fn bom_is_tolerated_like_whitespace() {
    let with_bom = Source::new("bom", "\u{feff}{ a }");
    let without_bom = Source::new("no-bom", "{ a }");
    let (doc_a, errors_a) = parse(&with_bom, ParseOptions::default());
    let (doc_b, errors_b) = parse(&without_bom, ParseOptions::default());
    assert!(errors_a.is_empty());
    assert!(errors_b.is_empty());
    assert_eq!(doc_a.definitions.len(), doc_b.definitions.len());
}

#[test]
fn non_printable_string_character_is_rejected() {
    let source = Source::new("bel", "{ f(x: \"\u{7}\") }");
    let (_doc, errors) = parse(&source, ParseOptions::default());
    assert!(
        errors
            .iter()
            .any(|e| e.message() == "Invalid character within String"),
        "errors: {errors:?}"
    );
}

#[test]
fn malformed_definition_does_not_swallow_its_siblings() {
    use pretty_assertions::assert_eq;

    let source = Source::new("partial", "type A { a: Int }\nnonsense here\ntype B { b: Int }");
    let (doc, errors) = parse(&source, ParseOptions::default());
    assert!(!errors.is_empty());
    let names: Vec<&str> = doc
        .definitions
        .iter()
        .filter_map(|d| match d {
            Definition::Object(o) => Some(o.name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn implements_interfaces_accepts_comma_and_ampersand_separators() {
    let source = Source::new(
        "implements",
        "interface A { x: Int } interface B { y: Int } type T implements A & B { x: Int y: Int }",
    );
    let (doc, errors) = parse(&source, ParseOptions::default());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    let Definition::Object(obj) = &doc.definitions[2] else {
        panic!("expected an object type definition");
    };
    assert_eq!(obj.implements_interfaces, vec!["A", "B"]);
}

#[test]
fn input_object_field_rejects_an_argument_list() {
    let source = Source::new("input-args", "input I { f(x: Int): Int }");
    let (_doc, errors) = parse(&source, ParseOptions::default());
    assert!(
        errors.iter().any(|e| e.message().starts_with("Expected :, found")),
        "errors: {errors:?}"
    );
}
