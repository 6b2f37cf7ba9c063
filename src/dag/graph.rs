// src/dag/graph.rs

use std::collections::HashMap;

use petgraph::graphmap::DiGraphMap;

use crate::request::TaskSpec;

/// Per-call dependency graph keyed by task title.
///
/// Two separate structures:
/// - a title -> record lookup (for due dates / estimates), and
/// - the adjacency relation, one edge `task -> dependency` per dependency
///   whose title is present in the input.
///
/// Dependencies naming titles outside the input never become edges. When
/// titles repeat, the *last* task with that title owns both the record and
/// the outgoing edges.
#[derive(Debug, Clone)]
pub struct DependencyGraph<'a> {
    records: HashMap<&'a str, &'a TaskSpec>,
    /// Input titles in their given order (duplicates included).
    roots: Vec<&'a str>,
    edges: DiGraphMap<&'a str, ()>,
}

impl<'a> DependencyGraph<'a> {
    pub fn from_tasks(tasks: &'a [TaskSpec]) -> Self {
        let mut records: HashMap<&'a str, &'a TaskSpec> = HashMap::with_capacity(tasks.len());
        let mut roots = Vec::with_capacity(tasks.len());
        let mut edges: DiGraphMap<&'a str, ()> = DiGraphMap::new();

        // First pass: lookup + nodes, in input order.
        for task in tasks {
            records.insert(task.title.as_str(), task);
            roots.push(task.title.as_str());
            edges.add_node(task.title.as_str());
        }

        // Second pass: edges from the surviving record of each title.
        let titles: Vec<&'a str> = edges.nodes().collect();
        for title in titles {
            let Some(task) = records.get(title) else {
                continue;
            };
            for dep in task.dependencies.iter() {
                if records.contains_key(dep.as_str()) {
                    edges.add_edge(title, dep.as_str(), ());
                }
            }
        }

        Self {
            records,
            roots,
            edges,
        }
    }

    /// Input titles in order; the root sequence for depth-first walks.
    pub fn roots(&self) -> &[&'a str] {
        &self.roots
    }

    pub fn contains(&self, title: &str) -> bool {
        self.records.contains_key(title)
    }

    /// The record that owns `title`.
    pub fn task(&self, title: &str) -> Option<&'a TaskSpec> {
        self.records.get(title).copied()
    }

    /// In-set dependencies of `title`, in declaration order.
    pub fn dependencies_of(&self, title: &'a str) -> impl Iterator<Item = &'a str> + '_ {
        self.edges.neighbors(title)
    }

    /// Number of distinct titles.
    pub fn node_count(&self) -> usize {
        self.edges.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.edge_count()
    }

    pub(crate) fn adjacency(&self) -> &DiGraphMap<&'a str, ()> {
        &self.edges
    }
}
