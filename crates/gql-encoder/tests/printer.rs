use gql_encoder::print;
use gql_parser::{parse, ParseOptions, Source};
use pretty_assertions::assert_eq;

fn parse_ok(
    name: &str,
    body: impl Into<String>,
    options: ParseOptions,
) -> gql_parser::ast::Document<'static> {
    // Leaked deliberately: tests need a `'static` Source so the returned
    // Document can outlive this helper without borrowck gymnastics.
    let source: &'static Source = Box::leak(Box::new(Source::new(name, body)));
    let (doc, errors) = parse(source, options);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    doc
}

#[test]
fn s1_anonymous_query_prints_with_two_space_indent() {
    let doc = parse_ok("s1", "{ a, b { x }, c }", ParseOptions::default());
    assert_eq!(
        print(&doc),
        "{\n  a\n  b {\n    x\n  }\n  c\n}\n"
    );
}

#[test]
fn s2_object_type_definition_prints_canonically() {
    let doc = parse_ok("s2", "type Hello { world: String }", ParseOptions::default());
    assert_eq!(print(&doc), "type Hello {\n  world: String\n}\n");
}

#[test]
fn s3_comments_round_trip_through_print() {
    let options = ParseOptions {
        keep_comments: true,
        ..Default::default()
    };
    let doc = parse_ok("s3", "# doc\ntype T { f: Int # tl\n}", options);
    assert_eq!(print(&doc), "# doc\ntype T {\n  f: Int # tl\n}\n");
}

#[test]
fn schema_print_is_idempotent() {
    let schema = r#"
schema {
  query: Query
}

# The root query type.
type Query implements Node & Other {
  node(id: ID!): Node
  friends(first: Int, after: String): [User!]!
}

scalar DateTime

interface Node {
  id: ID!
}

interface Other {
  id: ID!
}

union SearchResult = Query | Node

enum Role {
  ADMIN
  MEMBER
}

input UserFilter {
  nameContains: String
  role: Role = MEMBER
}

directive @deprecated(reason: String = "No longer supported") on FIELD_DEFINITION | ENUM_VALUE

extend type Query {
  extra: String
}
"#;
    let options = ParseOptions {
        keep_comments: true,
        ..Default::default()
    };
    let first_doc = parse_ok("schema-a", schema, options);
    let once = print(&first_doc);

    let twice_doc = parse_ok("schema-b", once.clone(), options);
    let twice = print(&twice_doc);

    assert_eq!(once, twice, "printer is not idempotent on its own output");
}

#[test]
fn operation_with_variables_and_directives_is_not_shorthand() {
    let doc = parse_ok(
        "vars",
        "query FetchUser($id: ID!) @cached { node(id: $id) { id } }",
        ParseOptions::default(),
    );
    assert_eq!(
        print(&doc),
        "query FetchUser($id: ID!) @cached {\n  node(id: $id) {\n    id\n  }\n}\n"
    );
}

#[test]
fn string_values_are_re_escaped() {
    let doc = parse_ok(
        "strings",
        r#"{ f(x: "line1\nline2\ttabbed\"quoted\"") }"#,
        ParseOptions::default(),
    );
    assert_eq!(
        print(&doc),
        "{\n  f(x: \"line1\\nline2\\ttabbed\\\"quoted\\\"\")\n}\n"
    );
}

#[test]
fn no_indent_printer_emits_a_single_line() {
    let doc = parse_ok("compact", "{ a b { x y } }", ParseOptions::default());
    let printed = gql_encoder::Printer::new().no_indent().print_document(&doc);
    assert_eq!(printed, "{ a b { x y } }");
}

#[test]
fn object_and_list_values_join_with_comma_space() {
    let doc = parse_ok(
        "values",
        "{ f(items: [1, 2, 3], opts: { a: 1, b: 2 }) }",
        ParseOptions::default(),
    );
    assert_eq!(
        print(&doc),
        "{\n  f(items: [1, 2, 3], opts: { a: 1, b: 2 })\n}\n"
    );
}
