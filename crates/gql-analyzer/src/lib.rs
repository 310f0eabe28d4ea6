//! Cycle detection and break-point selection over a parsed GraphQL schema.
//!
//! Grounded on spec.md §4.5: build a directed graph of named type
//! definitions, find cycles via DFS with an ancestor stack, and pick one
//! break-point per cycle (an Object or InputObject, chosen by smallest use
//! count then lexicographic name) so a downstream code generator knows
//! which field references need a forward-declared placeholder instead of
//! an eagerly resolved type.

mod cycles;
mod error;
mod graph;

use std::collections::BTreeSet;

use indexmap::IndexMap;

use gql_parser::ast::Document;

pub use error::AnalyzerError;
pub use graph::Kind;

/// The complete output of [`analyze_cycles`]: the type index, per-type use
/// counts, the deduplicated cycle set, and the resulting break-point map
/// (spec.md §6.1 `analyze_cycles`).
pub struct CycleReport {
    /// Name -> structural kind, for every named type definition observed
    /// (built-in scalars are never entries here).
    pub index: IndexMap<String, Kind>,
    /// Name -> number of times that type is referenced as a field/member
    /// type anywhere in the schema.
    pub use_counts: IndexMap<String, usize>,
    /// Canonical (sorted, comma-joined) cycle key -> the cycle's members.
    pub cycles: IndexMap<String, BTreeSet<String>>,
    /// Break-point type name -> union of the member sets of every cycle it
    /// was chosen to resolve.
    pub break_points: IndexMap<String, BTreeSet<String>>,
}

/// Analyze a parsed document's type-system definitions for reference
/// cycles, per spec.md §4.5. Fails fatally (no partial result) if two
/// definitions share a name, a field references an undeclared type, or an
/// `extend` block targets an undeclared type.
pub fn analyze_cycles(document: &Document) -> Result<CycleReport, AnalyzerError> {
    let graph = graph::build(document)?;
    let report = cycles::analyze(&graph)?;

    let index = graph
        .nodes
        .iter()
        .map(|(name, node)| (name.clone(), node.kind))
        .collect();

    Ok(CycleReport {
        index,
        use_counts: report.use_counts,
        cycles: report.cycles,
        break_points: report.break_points,
    })
}
