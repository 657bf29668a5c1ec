//! Graph queries over the registry.
//!
//! | Query | Algorithm |
//! |-------|-----------|
//! | Forward closure | DFS with a global visited set (spanning structure) |
//! | Dependents | Single linear scan, direct dependents only |
//! | Cycles from a root | DFS with an on-path set (gray/white check) |
//! | Cycle summary | Tarjan's SCC over the whole registry (petgraph) |
//!
//! Every DFS runs on an explicit stack of [`Frame`]s rather than the call
//! stack, so long dependency chains cannot exhaust the thread's stack.

mod cycles;
mod forward;
mod reverse;
mod scc;

pub use cycles::find_cycles;
pub use forward::forward_closure;
pub use reverse::dependents;
pub use scc::cycle_groups;

use crate::alias::AliasTable;
use crate::registry::Registry;
use crate::types::DeclarationRecord;

/// One entry of an explicit DFS stack: a node and a cursor into its
/// dependency list.
#[derive(Debug)]
struct Frame<'a> {
    name: &'a str,
    dependencies: &'a [String],
    next: usize,
}

impl<'a> Frame<'a> {
    fn new(name: &'a str, record: &'a DeclarationRecord) -> Self {
        Self {
            name,
            dependencies: &record.dependencies,
            next: 0,
        }
    }

    /// Advance the cursor, returning the next dependency name.
    fn next_dependency(&mut self) -> Option<&'a str> {
        let dep = self.dependencies.get(self.next)?;
        self.next += 1;
        Some(dep.as_str())
    }
}

/// Record backing a canonical name.
///
/// Falls back to the aliased interface's record when the implementation
/// itself was never declared.
fn resolve<'a>(
    registry: &'a Registry,
    aliases: &'a AliasTable,
    canonical: &str,
) -> Option<&'a DeclarationRecord> {
    registry.lookup(canonical).or_else(|| {
        aliases
            .interface_of(canonical)
            .and_then(|interface| registry.lookup(interface))
    })
}
