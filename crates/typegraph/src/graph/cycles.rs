//! Path-sensitive cycle detection from a root.
//!
//! Unlike the forward closure, a node leaves the on-path set when its frame
//! is popped, so the same node can be entered again through another path.
//! A dependency that is already on the active path closes a cycle.

use std::collections::HashSet;

use tracing::debug;

use super::{Frame, resolve};
use crate::alias::AliasTable;
use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::types::{CycleChain, CycleReport, NodeId};

/// Find every cycle reachable from `root`.
///
/// Dependency names are canonicalized through the alias table before the
/// on-path check, so an interface and its implementation count as one
/// participant. Each cycle is reported as the full active path from the
/// root, closed by the repeated node. Every name on that path joins
/// [`CycleReport::nodes`]. Unknown names are skipped.
///
/// An empty report means there is no cyclic dependency.
///
/// # Errors
///
/// Returns `Error::NotFound` if `root` has no declaration record.
pub fn find_cycles(registry: &Registry, aliases: &AliasTable, root: &str) -> Result<CycleReport> {
    let start = aliases.canonical(root);
    let record =
        resolve(registry, aliases, start).ok_or_else(|| Error::NotFound(root.to_string()))?;

    let mut report = CycleReport::default();
    let mut on_path: HashSet<&str> = HashSet::from([start]);
    let mut path: Vec<NodeId> = vec![registry.node_id(start)];
    let mut stack = vec![Frame::new(start, record)];

    while let Some(frame) = stack.last_mut() {
        let Some(dep) = frame.next_dependency() else {
            if let Some(done) = stack.pop() {
                on_path.remove(done.name);
                path.pop();
            }
            continue;
        };
        let target = aliases.canonical(dep);

        if on_path.contains(target) {
            let mut nodes = path.clone();
            nodes.push(registry.node_id(target));
            report.chains.push(CycleChain { nodes });
            for entry in &stack {
                report.nodes.insert(entry.name.to_string());
            }
            report.nodes.insert(target.to_string());
            continue;
        }

        let Some(target_record) = resolve(registry, aliases, target) else {
            continue;
        };
        on_path.insert(target);
        path.push(registry.node_id(target));
        stack.push(Frame::new(target, target_record));
    }

    debug!(
        root,
        cycles = report.count(),
        nodes = report.nodes.len(),
        "Cycle scan finished"
    );
    Ok(report)
}
