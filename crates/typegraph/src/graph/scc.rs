//! Whole-registry cycle summary using strongly connected components.

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use crate::alias::AliasTable;
use crate::registry::Registry;

/// Groups of types that are mutually dependent, across the whole registry.
///
/// Nodes are canonical names (an aliased interface folds into its
/// implementation). A component counts when it has more than one member or
/// a self-loop. Members are sorted, and so are the groups.
#[must_use]
pub fn cycle_groups(registry: &Registry, aliases: &AliasTable) -> Vec<Vec<String>> {
    let mut graph: DiGraph<&str, ()> = DiGraph::new();
    let mut node_map: HashMap<&str, NodeIndex> = HashMap::new();

    for record in registry.records() {
        let canonical = aliases.canonical(&record.name);
        node_map
            .entry(canonical)
            .or_insert_with(|| graph.add_node(canonical));
    }

    for record in registry.records() {
        let from = node_map[aliases.canonical(&record.name)];
        for dep in &record.dependencies {
            if let Some(&to) = node_map.get(aliases.canonical(dep)) {
                graph.update_edge(from, to, ());
            }
        }
    }

    let mut groups: Vec<Vec<String>> = tarjan_scc(&graph)
        .into_iter()
        .filter(|component| {
            component.len() > 1
                || component
                    .first()
                    .is_some_and(|&node| graph.contains_edge(node, node))
        })
        .map(|component| {
            let mut names: Vec<String> = component
                .into_iter()
                .map(|node| graph[node].to_string())
                .collect();
            names.sort();
            names
        })
        .collect();
    groups.sort();

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        groups = groups.len(),
        "Cycle summary computed"
    );
    groups
}
