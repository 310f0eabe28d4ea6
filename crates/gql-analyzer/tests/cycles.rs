use gql_analyzer::{analyze_cycles, AnalyzerError};
use gql_parser::{parse, ParseOptions, Source};

#[test]
fn s6_two_node_cycle_picks_the_lexicographically_smaller_break_point() {
    use pretty_assertions::assert_eq;

    let source = Source::new("s6", "type A { b: B } type B { a: A }");
    let (doc, errors) = parse(&source, ParseOptions::default());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");

    let analysis = analyze_cycles(&doc).expect("analysis should succeed");
    assert_eq!(analysis.cycles.len(), 1);
    let members = analysis.cycles.values().next().unwrap();
    assert_eq!(members.iter().cloned().collect::<Vec<_>>(), vec!["A", "B"]);

    assert_eq!(analysis.break_points.len(), 1);
    let (break_point, resolved_members) = analysis.break_points.iter().next().unwrap();
    assert_eq!(break_point, "A");
    assert_eq!(
        resolved_members.iter().cloned().collect::<Vec<_>>(),
        vec!["A", "B"]
    );
}

#[test]
fn acyclic_schema_has_no_cycles_or_break_points() {
    let source = Source::new(
        "acyclic",
        "type Query { node: Node } type Node { id: ID! }",
    );
    let (doc, errors) = parse(&source, ParseOptions::default());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");

    let analysis = analyze_cycles(&doc).expect("analysis should succeed");
    assert!(analysis.cycles.is_empty());
    assert!(analysis.break_points.is_empty());
    assert_eq!(analysis.use_counts.get("Node"), Some(&1));
}

#[test]
fn three_node_cycle_through_a_union_still_breaks_on_an_object() {
    // Union/enum/interface members cannot be break-points (spec.md §4.5
    // step 3); only the Object in the cycle is eligible.
    let source = Source::new(
        "union-cycle",
        "type A { s: S } union S = B type B { a: A }",
    );
    let (doc, errors) = parse(&source, ParseOptions::default());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");

    let analysis = analyze_cycles(&doc).expect("analysis should succeed");
    assert_eq!(analysis.cycles.len(), 1);
    assert_eq!(analysis.break_points.len(), 1);
    let (break_point, _) = analysis.break_points.iter().next().unwrap();
    assert_eq!(break_point, "A");
}

#[test]
fn duplicate_type_name_is_a_fatal_error() {
    let source = Source::new("dup", "type A { x: Int } type A { y: Int }");
    let (doc, errors) = parse(&source, ParseOptions::default());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");

    let err = analyze_cycles(&doc).expect_err("duplicate name must be rejected");
    assert_eq!(err, AnalyzerError::DuplicateTypeName("A".to_string()));
}

#[test]
fn reference_to_an_undeclared_type_is_a_fatal_error() {
    let source = Source::new("undef", "type A { b: B }");
    let (doc, errors) = parse(&source, ParseOptions::default());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");

    let err = analyze_cycles(&doc).expect_err("undefined type must be rejected");
    assert_eq!(
        err,
        AnalyzerError::UndefinedType {
            referenced_from: "A".to_string(),
            name: "B".to_string(),
        }
    );
}

#[test]
fn built_in_scalars_never_become_graph_nodes() {
    let source = Source::new("builtins", "type A { name: String! age: Int }");
    let (doc, errors) = parse(&source, ParseOptions::default());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");

    let analysis = analyze_cycles(&doc).expect("analysis should succeed");
    assert_eq!(analysis.index.len(), 1);
    assert!(analysis.index.contains_key("A"));
}

#[test]
fn type_extension_fields_fold_into_the_base_definition() {
    let source = Source::new(
        "extension",
        "type A { x: Int } extend type A { b: B } type B { a: A }",
    );
    let (doc, errors) = parse(&source, ParseOptions::default());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");

    let analysis = analyze_cycles(&doc).expect("analysis should succeed");
    assert_eq!(analysis.cycles.len(), 1);
}
