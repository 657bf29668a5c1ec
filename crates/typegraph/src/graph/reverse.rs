//! Reverse lookup: which types directly depend on a given name.

use tracing::debug;

use crate::alias::AliasTable;
use crate::registry::Registry;
use crate::types::{Edge, Traversal};

/// Direct dependents of `name`, found in one pass over every record.
///
/// The target is canonicalized through the alias table, and so is every
/// dependency it is compared against, so asking about an interface also
/// reports types that depend on its implementation and vice versa. The
/// target does not need a record of its own. Not transitive.
#[must_use]
pub fn dependents(registry: &Registry, aliases: &AliasTable, name: &str) -> Traversal {
    let target = aliases.canonical(name);
    let to = registry.node_id(target);

    let mut traversal = Traversal::default();
    traversal.visited.insert(target.to_string());

    for record in registry.records() {
        let depends_on_target = record
            .dependencies
            .iter()
            .any(|dep| aliases.canonical(dep) == target);
        if depends_on_target {
            traversal.visited.insert(record.name.clone());
            traversal.edges.push(Edge {
                from: registry.node_id(&record.name),
                to: to.clone(),
            });
        }
    }

    debug!(
        target,
        dependents = traversal.edges.len(),
        "Reverse dependency scan finished"
    );
    traversal
}
