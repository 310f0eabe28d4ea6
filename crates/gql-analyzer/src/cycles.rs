use std::collections::{BTreeSet, HashSet};

use indexmap::IndexMap;

use crate::error::AnalyzerError;
use crate::graph::{Kind, TypeGraph};

pub struct CycleReport {
    pub use_counts: IndexMap<String, usize>,
    /// Canonical sorted-join key -> the cycle's member names.
    pub cycles: IndexMap<String, BTreeSet<String>>,
    /// Break-point name -> union of member sets of every cycle it resolves.
    pub break_points: IndexMap<String, BTreeSet<String>>,
}

pub fn analyze(graph: &TypeGraph) -> Result<CycleReport, AnalyzerError> {
    let use_counts = count_uses(graph);
    let cycles = detect_cycles(graph);
    let break_points = select_break_points(graph, &cycles, &use_counts)?;
    Ok(CycleReport {
        use_counts,
        cycles,
        break_points,
    })
}

fn count_uses(graph: &TypeGraph) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = graph.nodes.keys().map(|n| (n.clone(), 0)).collect();
    for node in graph.nodes.values() {
        for target in &node.edges {
            if let Some(count) = counts.get_mut(target) {
                *count += 1;
            }
        }
    }
    counts
}

/// DFS over the whole graph with an explicit ancestor stack; every edge is
/// examined exactly once (at the moment its source node is first visited),
/// so every cycle is found via the back-edge it necessarily contains in any
/// DFS forest, regardless of which node the outer loop started from.
fn detect_cycles(graph: &TypeGraph) -> IndexMap<String, BTreeSet<String>> {
    let mut cycles: IndexMap<String, BTreeSet<String>> = IndexMap::new();
    let mut done: HashSet<String> = HashSet::new();
    let mut stack: Vec<String> = Vec::new();

    for start in graph.nodes.keys() {
        if !done.contains(start) {
            visit(start, graph, &mut stack, &mut done, &mut cycles);
        }
    }
    cycles
}

fn visit(
    name: &str,
    graph: &TypeGraph,
    stack: &mut Vec<String>,
    done: &mut HashSet<String>,
    cycles: &mut IndexMap<String, BTreeSet<String>>,
) {
    stack.push(name.to_string());
    if let Some(node) = graph.nodes.get(name) {
        for target in &node.edges {
            if !graph.nodes.contains_key(target) {
                continue; // built-in scalar: not a graph node, never cyclical
            }
            if let Some(pos) = stack.iter().position(|n| n == target) {
                let members: BTreeSet<String> = stack[pos..].iter().cloned().collect();
                let key = members.iter().cloned().collect::<Vec<_>>().join(",");
                cycles.entry(key).or_insert(members);
            } else if !done.contains(target) {
                visit(target, graph, stack, done, cycles);
            }
        }
    }
    stack.pop();
    done.insert(name.to_string());
}

fn select_break_points(
    graph: &TypeGraph,
    cycles: &IndexMap<String, BTreeSet<String>>,
    use_counts: &IndexMap<String, usize>,
) -> Result<IndexMap<String, BTreeSet<String>>, AnalyzerError> {
    let mut break_points: IndexMap<String, BTreeSet<String>> = IndexMap::new();

    for (key, members) in cycles {
        let candidate = members
            .iter()
            .filter(|name| {
                matches!(
                    graph.nodes.get(name.as_str()).map(|n| n.kind),
                    Some(Kind::Object) | Some(Kind::InputObject)
                )
            })
            .min_by_key(|name| (use_counts.get(name.as_str()).copied().unwrap_or(0), (*name).clone()))
            .cloned()
            .ok_or_else(|| AnalyzerError::NoBreakPointCandidate(key.clone()))?;

        break_points
            .entry(candidate)
            .or_default()
            .extend(members.iter().cloned());
    }

    Ok(break_points)
}
