//! Property tests for the graph queries.
//!
//! Registries are generated from adjacency lists over names `T0..Tn`.
//! Dependency indices may point past `n`, which yields names that were
//! never declared.

use std::collections::HashSet;

use proptest::prelude::*;
use typegraph::{AliasPair, Config, DeclarationRecord, TypeGraph};

const MAX_NODES: usize = 12;
const UNKNOWN_NAMES: usize = 3;

fn name(i: usize) -> String {
    format!("T{i}")
}

fn build(adjacency: &[Vec<usize>]) -> TypeGraph {
    let mut graph = TypeGraph::new(&Config::default()).expect("default config");
    let registry = graph.registry_mut();
    for (i, deps) in adjacency.iter().enumerate() {
        registry.assign_group(&name(i), if i % 2 == 0 { "even" } else { "odd" });
        registry.register(DeclarationRecord::new(
            name(i),
            format!("{}.kt", name(i)),
            deps.iter().map(|&d| name(d)).collect(),
        ));
    }
    graph
}

/// Arbitrary graphs, possibly cyclic, with some unknown dependency names.
fn adjacency() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1..=MAX_NODES).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(0..n + UNKNOWN_NAMES, 0..4), n)
    })
}

/// Graphs whose edges only point from lower to higher indices.
fn dag() -> impl Strategy<Value = Vec<Vec<usize>>> {
    adjacency().prop_map(|adj| {
        adj.into_iter()
            .enumerate()
            .map(|(i, deps)| deps.into_iter().filter(|&d| d > i).collect())
            .collect()
    })
}

proptest! {
    #[test]
    fn forward_closure_visits_each_node_once(adj in adjacency(), root in 0..MAX_NODES) {
        let graph = build(&adj);
        let root = name(root % adj.len());

        let closure = graph.forward_closure(&root).expect("root is declared");
        let dot = graph.render(&closure);

        let style_lines: Vec<&str> = dot.lines().filter(|l| l.contains("style=filled")).collect();
        let unique: HashSet<&str> = style_lines.iter().copied().collect();
        prop_assert_eq!(style_lines.len(), unique.len());
        prop_assert_eq!(style_lines.len(), closure.visited.len());
        // A spanning structure: every node but the root is entered exactly once.
        prop_assert_eq!(closure.edges.len(), closure.visited.len() - 1);
    }

    #[test]
    fn forward_edges_only_target_declared_types(adj in adjacency(), root in 0..MAX_NODES) {
        let graph = build(&adj);
        let root = name(root % adj.len());

        let closure = graph.forward_closure(&root).expect("root is declared");

        for edge in &closure.edges {
            prop_assert!(graph.registry().lookup(&edge.to.name).is_some());
        }
    }

    #[test]
    fn forward_closure_is_idempotent(adj in adjacency(), root in 0..MAX_NODES) {
        let graph = build(&adj);
        let root = name(root % adj.len());

        let first = graph.render(&graph.forward_closure(&root).expect("declared"));
        let second = graph.render(&graph.forward_closure(&root).expect("declared"));

        prop_assert_eq!(first, second);
    }

    #[test]
    fn dependents_are_exactly_the_direct_dependents(
        adj in adjacency(),
        target in 0..MAX_NODES + UNKNOWN_NAMES
    ) {
        let graph = build(&adj);
        let target = name(target);

        let dependents = graph.dependents(&target);

        let expected: HashSet<String> = adj
            .iter()
            .enumerate()
            .filter(|(_, deps)| deps.iter().any(|&d| name(d) == target))
            .map(|(i, _)| name(i))
            .collect();
        let reported: HashSet<String> =
            dependents.edges.iter().map(|e| e.from.name.clone()).collect();
        prop_assert_eq!(reported, expected);
    }

    #[test]
    fn acyclic_graphs_report_no_cycles(adj in dag(), root in 0..MAX_NODES) {
        let graph = build(&adj);
        let root = name(root % adj.len());

        let report = graph.find_cycles(&root).expect("root is declared");

        prop_assert!(report.is_empty());
        prop_assert!(graph.cycle_groups().is_empty());
    }

    #[test]
    fn closing_a_path_back_to_the_root_is_detected(len in 1..MAX_NODES) {
        // T0 -> T1 -> ... -> T(len-1) -> T0
        let adj: Vec<Vec<usize>> = (0..len).map(|i| vec![(i + 1) % len]).collect();
        let graph = build(&adj);

        let report = graph.find_cycles("T0").expect("T0 is declared");

        prop_assert_eq!(report.count(), 1);
        prop_assert_eq!(report.nodes.len(), len);
        prop_assert_eq!(graph.cycle_groups().len(), 1);
    }

    #[test]
    fn last_registration_wins(
        first in prop::collection::vec("[A-Z][a-z]{0,6}", 0..4),
        second in prop::collection::vec("[A-Z][a-z]{0,6}", 0..4)
    ) {
        let mut graph = TypeGraph::new(&Config::default()).expect("default config");
        graph.registry_mut().register(DeclarationRecord::new("Subject", "a/Subject.kt", first));
        graph
            .registry_mut()
            .register(DeclarationRecord::new("Subject", "b/Subject.kt", second.clone()));

        let record = graph.registry().lookup("Subject").expect("registered");
        prop_assert_eq!(&record.dependencies, &second);
    }
}

#[test]
fn alias_pair_depending_on_each_other_is_a_cycle() {
    let config = Config {
        aliases: vec![AliasPair {
            interface: "InterfaceA".into(),
            implementation: "ImplA".into(),
        }],
        ..Config::default()
    };
    let mut graph = TypeGraph::new(&config).expect("valid config");
    graph.registry_mut().register(DeclarationRecord::new(
        "InterfaceA",
        "InterfaceA.kt",
        vec!["ImplA".into()],
    ));
    graph.registry_mut().register(DeclarationRecord::new(
        "ImplA",
        "ImplA.kt",
        vec!["InterfaceA".into()],
    ));

    assert_eq!(graph.find_cycles("InterfaceA").expect("declared").count(), 1);
    assert_eq!(graph.find_cycles("ImplA").expect("declared").count(), 1);
}
