/// Fatal errors raised while indexing or walking the type graph.
///
/// Grounded on the teacher's `gql-parser::Error` taxonomy (spec.md §4.5
/// "Failure semantics"): every failure here is an `internal`/`syntax`-grade
/// condition against a schema that must already be syntactically valid —
/// there is no recoverable/partial-result mode, unlike the parser.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    #[error("Duplicate type definition {0}")]
    DuplicateTypeName(String),

    #[error("Undefined type {name} referenced from {referenced_from}")]
    UndefinedType { referenced_from: String, name: String },

    #[error("extend of undefined type {0}")]
    ExtensionOfUndefinedType(String),

    #[error("no eligible break-point candidate in cycle {{{0}}}")]
    NoBreakPointCandidate(String),
}
