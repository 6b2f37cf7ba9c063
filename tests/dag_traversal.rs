mod common;
use crate::common::init_tracing;

use taskorder::dag::{
    DependencyGraph, assign_levels, cycle_members, has_cycle, topological_order,
};
use taskorder::schedule::order_within_levels;
use taskorder_test_utils::builders::{ScheduleRequestBuilder, TaskSpecBuilder};

#[test]
fn graph_drops_edges_to_unknown_titles() {
    init_tracing();

    let tasks = ScheduleRequestBuilder::new()
        .with_task(TaskSpecBuilder::new("A").after("B").after("Missing").build())
        .with_task(TaskSpecBuilder::new("B").build())
        .tasks();
    let graph = DependencyGraph::from_tasks(&tasks);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.contains("A"));
    assert!(!graph.contains("Missing"));
    assert_eq!(graph.dependencies_of("A").collect::<Vec<_>>(), vec!["B"]);
    assert_eq!(graph.dependencies_of("B").count(), 0);
}

#[test]
fn graph_keeps_declared_dependency_order() {
    init_tracing();

    let tasks = ScheduleRequestBuilder::new()
        .with_task(TaskSpecBuilder::new("Top").after("Z").after("M").after("A").build())
        .with_task(TaskSpecBuilder::new("A").build())
        .with_task(TaskSpecBuilder::new("M").build())
        .with_task(TaskSpecBuilder::new("Z").build())
        .tasks();
    let graph = DependencyGraph::from_tasks(&tasks);

    assert_eq!(
        graph.dependencies_of("Top").collect::<Vec<_>>(),
        vec!["Z", "M", "A"]
    );
}

#[test]
fn acyclic_graph_has_no_cycle() {
    init_tracing();

    let tasks = ScheduleRequestBuilder::new()
        .with_task(TaskSpecBuilder::new("A").after("B").after("C").build())
        .with_task(TaskSpecBuilder::new("B").after("C").build())
        .with_task(TaskSpecBuilder::new("C").build())
        .tasks();
    let graph = DependencyGraph::from_tasks(&tasks);

    // C is reached twice through different paths; that is not a cycle.
    assert!(!has_cycle(&graph));
    assert!(cycle_members(&graph).is_empty());
}

#[test]
fn cycle_not_reachable_from_first_root_is_found() {
    init_tracing();

    let tasks = ScheduleRequestBuilder::new()
        .with_task(TaskSpecBuilder::new("Lonely").build())
        .with_task(TaskSpecBuilder::new("P").after("Q").build())
        .with_task(TaskSpecBuilder::new("Q").after("R").build())
        .with_task(TaskSpecBuilder::new("R").after("P").build())
        .tasks();
    let graph = DependencyGraph::from_tasks(&tasks);

    assert!(has_cycle(&graph));
    assert_eq!(cycle_members(&graph), vec!["P", "Q", "R"]);
}

#[test]
fn dangling_self_named_reference_is_not_a_cycle() {
    init_tracing();

    // "Ghost" depends on itself but is not part of the request.
    let tasks = ScheduleRequestBuilder::new()
        .with_task(TaskSpecBuilder::new("Real").after("Ghost").build())
        .tasks();
    let graph = DependencyGraph::from_tasks(&tasks);

    assert!(!has_cycle(&graph));
}

#[test]
fn topological_order_puts_dependencies_first() {
    init_tracing();

    let tasks = ScheduleRequestBuilder::new()
        .with_task(TaskSpecBuilder::new("A").after("B").build())
        .with_task(TaskSpecBuilder::new("B").after("C").build())
        .with_task(TaskSpecBuilder::new("C").build())
        .with_task(TaskSpecBuilder::new("Isolated").build())
        .tasks();
    let graph = DependencyGraph::from_tasks(&tasks);

    assert_eq!(topological_order(&graph), vec!["C", "B", "A", "Isolated"]);
}

#[test]
fn topological_order_follows_input_roots() {
    init_tracing();

    let tasks = ScheduleRequestBuilder::new()
        .with_task(TaskSpecBuilder::new("Y").build())
        .with_task(TaskSpecBuilder::new("X").build())
        .with_task(TaskSpecBuilder::new("W").after("X").after("Y").build())
        .tasks();
    let graph = DependencyGraph::from_tasks(&tasks);

    assert_eq!(topological_order(&graph), vec!["Y", "X", "W"]);
}

#[test]
fn levels_measure_longest_chain() {
    init_tracing();

    let tasks = ScheduleRequestBuilder::new()
        .with_task(TaskSpecBuilder::new("Root").build())
        .with_task(TaskSpecBuilder::new("Mid").after("Root").build())
        .with_task(TaskSpecBuilder::new("Deep").after("Mid").build())
        .with_task(TaskSpecBuilder::new("Wide").after("Root").after("Deep").after("Nowhere").build())
        .tasks();
    let graph = DependencyGraph::from_tasks(&tasks);
    let topo = topological_order(&graph);
    let levels = assign_levels(&graph, &topo);

    assert_eq!(levels.get("Root"), Some(&0));
    assert_eq!(levels.get("Mid"), Some(&1));
    assert_eq!(levels.get("Deep"), Some(&2));
    assert_eq!(levels.get("Wide"), Some(&3));
    assert_eq!(levels.len(), 4);
}

#[test]
fn orderer_groups_by_level_then_sorts() {
    init_tracing();

    let tasks = ScheduleRequestBuilder::new()
        .with_task(TaskSpecBuilder::new("L1 late").after("L0 b").due("2024-05-01").build())
        .with_task(TaskSpecBuilder::new("L1 early").after("L0 a").due("2024-04-01").build())
        .with_task(TaskSpecBuilder::new("L0 a").due("2024-06-01").build())
        .with_task(TaskSpecBuilder::new("L0 b").due("2024-03-01").build())
        .tasks();
    let graph = DependencyGraph::from_tasks(&tasks);
    let topo = topological_order(&graph);
    let levels = assign_levels(&graph, &topo);

    let ordered = order_within_levels(&topo, &levels, &graph);

    // Level 1 tasks are due earlier than "L0 a" but still come after it.
    assert_eq!(ordered, vec!["L0 b", "L0 a", "L1 early", "L1 late"]);
}
