// src/schedule/mod.rs

//! The scheduling pipeline.
//!
//! One pure function from a task list to a [`ScheduleResult`]:
//! cycle check, topological sort, level assignment, level-local ordering.
//! Nothing is cached or shared between calls.

pub mod orderer;

use tracing::{debug, warn};

use crate::dag::{DependencyGraph, assign_levels, cycle_members, has_cycle, topological_order};
use crate::errors::ScheduleError;
use crate::request::TaskSpec;

pub use orderer::order_within_levels;

pub const SUCCESS_MESSAGE: &str = "Schedule generated successfully";

/// Outcome of one scheduling call.
///
/// `recommended_order` is empty exactly when the input was rejected;
/// `message` then says why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleResult {
    pub recommended_order: Vec<String>,
    pub message: String,
}

impl ScheduleResult {
    pub fn is_rejected(&self) -> bool {
        self.recommended_order.is_empty()
    }
}

impl From<std::result::Result<SchedulePlan, ScheduleError>> for ScheduleResult {
    fn from(outcome: std::result::Result<SchedulePlan, ScheduleError>) -> Self {
        match outcome {
            Ok(plan) => Self {
                recommended_order: plan.order(),
                message: SUCCESS_MESSAGE.to_string(),
            },
            Err(err) => Self {
                recommended_order: Vec::new(),
                message: err.to_string(),
            },
        }
    }
}

/// A task in its final position, with the level it was grouped under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTask {
    pub title: String,
    pub level: usize,
}

/// Successful pipeline output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchedulePlan {
    pub tasks: Vec<PlannedTask>,
}

impl SchedulePlan {
    /// Titles in recommended order.
    pub fn order(&self) -> Vec<String> {
        self.tasks.iter().map(|t| t.title.clone()).collect()
    }

    pub fn level_of(&self, title: &str) -> Option<usize> {
        self.tasks.iter().find(|t| t.title == title).map(|t| t.level)
    }
}

/// Run the pipeline and keep the per-task levels.
pub fn plan(tasks: &[TaskSpec]) -> std::result::Result<SchedulePlan, ScheduleError> {
    if tasks.is_empty() {
        debug!("no tasks supplied; nothing to schedule");
        return Err(ScheduleError::EmptyInput);
    }

    let graph = DependencyGraph::from_tasks(tasks);
    debug!(
        tasks = graph.node_count(),
        edges = graph.edge_count(),
        "dependency graph built"
    );

    if has_cycle(&graph) {
        let members = cycle_members(&graph);
        warn!(?members, "circular dependency detected; refusing to schedule");
        return Err(ScheduleError::CircularDependency { members });
    }

    let topo = topological_order(&graph);
    let levels = assign_levels(&graph, &topo);
    let ordered = order_within_levels(&topo, &levels, &graph);

    let tasks = ordered
        .into_iter()
        .map(|title| PlannedTask {
            title: title.to_string(),
            level: levels.get(title).copied().unwrap_or(0),
        })
        .collect();

    let plan = SchedulePlan { tasks };
    debug!(order = ?plan.order(), "schedule generated");
    Ok(plan)
}

/// Produce a recommended execution order for `tasks`.
///
/// Never fails: a cycle or an empty list yields an empty order plus the
/// matching message.
pub fn generate_schedule(tasks: &[TaskSpec]) -> ScheduleResult {
    ScheduleResult::from(plan(tasks))
}
