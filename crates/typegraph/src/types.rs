//! Domain types for typegraph.
//!
//! - **Entities**: `DeclarationRecord` (one per declared type name)
//! - **Diagnostics**: `CollisionRecord` (same bare name seen in two groups)
//! - **Results**: `Edge`, `Traversal`, `CycleReport`, `ScanStats`
//!
//! Node identities in rendered output are always `{group}_{name}`; see
//! [`NodeId`].

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ScanError;

/// A declared type as reported by extraction.
///
/// Immutable once created. A later registration for the same name replaces
/// the earlier record in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationRecord {
    /// Declared type name, unique within the registry
    pub name: String,
    /// Originating file path (diagnostic only)
    pub source_path: PathBuf,
    /// Referenced type names in declaration order; may repeat or be unknown
    pub dependencies: Vec<String>,
    /// Whether this is an interface/protocol declaration
    pub is_interface: bool,
}

impl DeclarationRecord {
    /// Create a concrete type declaration.
    pub fn new(
        name: impl Into<String>,
        source_path: impl Into<PathBuf>,
        dependencies: Vec<String>,
    ) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "declaration name must not be empty");
        Self {
            name,
            source_path: source_path.into(),
            dependencies,
            is_interface: false,
        }
    }

    /// Create an interface declaration. Interfaces carry no dependencies.
    pub fn interface(name: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            is_interface: true,
            ..Self::new(name, source_path, Vec::new())
        }
    }

    /// File stem of the originating path, used to look up the file's group.
    #[must_use]
    pub fn file_stem(&self) -> Option<&str> {
        self.source_path.file_stem().and_then(|s| s.to_str())
    }
}

/// A name registered twice under different groups.
///
/// Diagnostic only; never consulted by any query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollisionRecord {
    /// `{group}_{name}` of the first registration
    pub existing: String,
    /// `{group}_{name}` of the replacing registration
    pub replacement: String,
}

/// Rendered identity of a node: `{group}_{name}`.
///
/// Names are emitted without escaping; extraction only yields identifier
/// characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    /// Owning group, or the configured extern label
    pub group: String,
    /// Declared type name
    pub name: String,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.group, self.name)
    }
}

/// A directed edge between two rendered nodes (dependent -> dependency).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// The depending node
    pub from: NodeId,
    /// The node depended upon
    pub to: NodeId,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {};", self.from, self.to)
    }
}

/// Result of a forward-closure or reverse-dependency query.
///
/// `visited` drives node styling, `edges` drives the edge section. Both
/// keep discovery order so rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Traversal {
    /// Type names reached by the query, in discovery order
    pub visited: IndexSet<String>,
    /// Edges emitted by the query, in discovery order
    pub edges: Vec<Edge>,
}

impl Traversal {
    /// Whether the query emitted no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// One discovered cycle: the active path from the scan root, closed by the
/// node that was found already on the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleChain {
    /// Node ids along the path, the last one repeating an earlier entry
    pub nodes: Vec<NodeId>,
}

impl fmt::Display for CycleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{node}")?;
        }
        f.write_str(";")
    }
}

/// Result of a path-sensitive cycle scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Every chain found, in discovery order
    pub chains: Vec<CycleChain>,
    /// Every (canonical) name that took part in any chain
    pub nodes: IndexSet<String>,
}

impl CycleReport {
    /// Number of cycles found.
    #[must_use]
    pub fn count(&self) -> usize {
        self.chains.len()
    }

    /// Whether the scan found no cycle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

/// Statistics from a scan of a source tree.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Number of source files read and applied
    pub files_scanned: usize,
    /// Number of declarations registered (including replacements)
    pub declarations_found: usize,
    /// Number of files that could not be read
    pub files_skipped: usize,
    /// Directories that could not be read, with the reason
    pub directories_skipped: Vec<(PathBuf, String)>,
    /// Per-file errors collected during the scan
    pub errors: Vec<ScanError>,
    /// Wall-clock time spent scanning
    pub duration: Duration,
}
