// src/dag/cycle.rs

//! Cycle detection over a [`DependencyGraph`].

use std::collections::HashSet;

use petgraph::algo::tarjan_scc;
use tracing::trace;

use crate::dag::graph::DependencyGraph;

/// Returns `true` if any dependency cycle is reachable from any task.
///
/// Depth-first search with two independent marks: `explored` (finished,
/// never revisited) and `on_path` (ancestors of the node being walked).
/// Reaching a node that is still on the path closes a cycle. A task that
/// lists itself is a cycle of length one.
pub fn has_cycle(graph: &DependencyGraph<'_>) -> bool {
    let mut explored: HashSet<&str> = HashSet::new();
    let mut on_path: HashSet<&str> = HashSet::new();

    graph
        .roots()
        .iter()
        .any(|root| visit(graph, *root, &mut explored, &mut on_path))
}

fn visit<'a>(
    graph: &DependencyGraph<'a>,
    title: &'a str,
    explored: &mut HashSet<&'a str>,
    on_path: &mut HashSet<&'a str>,
) -> bool {
    if on_path.contains(title) {
        trace!(task = title, "back edge found");
        return true;
    }
    if explored.contains(title) {
        return false;
    }

    explored.insert(title);
    on_path.insert(title);

    for dep in graph.dependencies_of(title) {
        if visit(graph, dep, explored, on_path) {
            return true;
        }
    }

    on_path.remove(title);
    false
}

/// Titles that take part in at least one cycle, in input order.
///
/// Used for diagnostics only; an empty result means the graph is acyclic.
pub fn cycle_members(graph: &DependencyGraph<'_>) -> Vec<String> {
    let adjacency = graph.adjacency();

    let cyclic: HashSet<&str> = tarjan_scc(adjacency)
        .into_iter()
        .filter(|scc| match scc.as_slice() {
            [single] => adjacency.contains_edge(*single, *single),
            _ => true,
        })
        .flatten()
        .collect();

    let mut seen = HashSet::new();
    graph
        .roots()
        .iter()
        .filter(|title| cyclic.contains(**title) && seen.insert(**title))
        .map(|title| title.to_string())
        .collect()
}
