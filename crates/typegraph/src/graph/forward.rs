//! Forward closure: everything a type transitively depends on.

use tracing::debug;

use super::Frame;
use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::types::{Edge, Traversal};

/// Depth-first closure from `root` over known dependencies.
///
/// The visited set is global and seeded with the root, so a node reached
/// through any branch is never expanded again and no edge is emitted back
/// into it. The result is a spanning structure of the reachable subgraph,
/// not a listing of every edge. Unknown dependency names are skipped.
///
/// # Errors
///
/// Returns `Error::NotFound` if `root` has no declaration record.
pub fn forward_closure(registry: &Registry, root: &str) -> Result<Traversal> {
    let record = registry
        .lookup(root)
        .ok_or_else(|| Error::NotFound(root.to_string()))?;

    let mut traversal = Traversal::default();
    traversal.visited.insert(record.name.clone());
    let mut stack = vec![Frame::new(&record.name, record)];

    while let Some(frame) = stack.last_mut() {
        let from = frame.name;
        let Some(dep) = frame.next_dependency() else {
            stack.pop();
            continue;
        };
        let Some(dep_record) = registry.lookup(dep) else {
            continue;
        };
        if !traversal.visited.insert(dep_record.name.clone()) {
            continue;
        }

        traversal.edges.push(Edge {
            from: registry.node_id(from),
            to: registry.node_id(dep),
        });
        stack.push(Frame::new(&dep_record.name, dep_record));
    }

    debug!(
        root,
        nodes = traversal.visited.len(),
        edges = traversal.edges.len(),
        "Forward closure built"
    );
    Ok(traversal)
}
