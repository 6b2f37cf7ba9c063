// src/dag/levels.rs

use std::collections::HashMap;

use crate::dag::graph::DependencyGraph;

/// Dependency depth per title.
pub type LevelMap<'a> = HashMap<&'a str, usize>;

/// Assign every title its dependency level.
///
/// Level 0 means no in-set dependencies; otherwise the level is one more
/// than the deepest dependency, i.e. the length of the longest dependency
/// chain beneath the task. `order` must list dependencies before dependents
/// (see [`topological_order`](crate::dag::topological_order)).
pub fn assign_levels<'a>(graph: &DependencyGraph<'a>, order: &[&'a str]) -> LevelMap<'a> {
    let mut levels: LevelMap<'a> = HashMap::with_capacity(order.len());

    for &title in order {
        let level = graph
            .dependencies_of(title)
            .filter_map(|dep| levels.get(dep))
            .map(|dep_level| dep_level + 1)
            .max()
            .unwrap_or(0);
        levels.insert(title, level);
    }

    levels
}
