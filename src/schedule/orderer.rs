// src/schedule/orderer.rs

use std::collections::BTreeMap;

use crate::dag::{DependencyGraph, LevelMap};
use crate::request::TaskSpec;

/// Final ordering: group by level, sort inside each level, concatenate.
///
/// Inside a level tasks go by due date (missing dates last), then by
/// estimated hours. The sort is stable, so remaining ties keep their
/// topological order.
pub fn order_within_levels<'a>(
    topo: &[&'a str],
    levels: &LevelMap<'a>,
    graph: &DependencyGraph<'a>,
) -> Vec<&'a str> {
    let mut groups: BTreeMap<usize, Vec<&'a TaskSpec>> = BTreeMap::new();

    for &title in topo {
        let level = levels.get(title).copied().unwrap_or(0);
        if let Some(task) = graph.task(title) {
            groups.entry(level).or_default().push(task);
        }
    }

    groups
        .into_values()
        .flat_map(|mut group| {
            group.sort_by_key(|task| tie_break_key(task));
            group.into_iter().map(|task| task.title.as_str())
        })
        .collect()
}

/// `(no due date, due date, estimate)`: `false < true` puts present dates
/// ahead of missing ones.
fn tie_break_key(task: &TaskSpec) -> (bool, Option<chrono::NaiveDateTime>, i32) {
    (task.due_date.is_none(), task.due_date, task.estimated_hours)
}
