// src/dag/topo.rs

use std::collections::HashSet;

use tracing::trace;

use crate::dag::graph::DependencyGraph;

/// Dependency-first linear order of every title in `graph`.
///
/// Depth-first post-order: roots are taken in input order, dependencies in
/// declaration order, and a title is emitted only after all of its
/// dependencies. Each distinct title appears exactly once, isolated tasks
/// included.
///
/// Only meaningful for an acyclic graph; check with
/// [`has_cycle`](crate::dag::has_cycle) first.
pub fn topological_order<'a>(graph: &DependencyGraph<'a>) -> Vec<&'a str> {
    let mut visited: HashSet<&'a str> = HashSet::with_capacity(graph.node_count());
    let mut order: Vec<&'a str> = Vec::with_capacity(graph.node_count());

    for &root in graph.roots() {
        if !visited.contains(root) {
            visit(graph, root, &mut visited, &mut order);
        }
    }

    trace!(?order, "topological order");
    order
}

fn visit<'a>(
    graph: &DependencyGraph<'a>,
    title: &'a str,
    visited: &mut HashSet<&'a str>,
    order: &mut Vec<&'a str>,
) {
    visited.insert(title);

    for dep in graph.dependencies_of(title) {
        if !visited.contains(dep) {
            visit(graph, dep, visited, order);
        }
    }

    order.push(title);
}
