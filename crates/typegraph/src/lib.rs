//! # Typegraph: type-level dependency graphs
//!
//! Typegraph records declared types and the types they depend on, then
//! answers three questions about them, each rendered as a Graphviz
//! `digraph`:
//!
//! - **What does X depend on?** ([`TypeGraph::forward_closure`])
//! - **What depends on X?** ([`TypeGraph::dependents`])
//! - **Where are the cycles reachable from X?** ([`TypeGraph::find_cycles`])
//!
//! ## Design Philosophy
//!
//! - **Best effort in, exact out** - Extraction is line-pattern matching and
//!   will miss or invent dependencies; the graph algorithms tolerate unknown
//!   names and never fail on them
//! - **One session, no globals** - A [`TypeGraph`] owns its registry, alias
//!   table and palette; nothing is shared between runs
//! - **Read-only queries** - The registry is filled once, then every query
//!   only reads it
//!
//! ## Quick Start
//!
//! ```no_run
//! use typegraph::{Config, TypeGraph};
//! use std::path::Path;
//!
//! let root = Path::new("/path/to/sources");
//! let config = Config::load(None, root)?;
//! let (graph, stats) = TypeGraph::scan(root, config)?;
//! println!("Scanned {} files", stats.files_scanned);
//!
//! let closure = graph.forward_closure("CheckoutService")?;
//! println!("{}", graph.render(&closure));
//! # Ok::<(), typegraph::Error>(())
//! ```

mod alias;
mod config;
mod error;
mod graph;
mod registry;
mod render;
pub mod scanner;
mod types;

pub use alias::{AliasPair, AliasTable};
pub use config::{CONFIG_FILE_NAME, Config};
pub use error::{Error, Result, ScanError, ScanErrorKind};
pub use registry::{DEFAULT_EXTERN_GROUP, Registry};
pub use render::{DEFAULT_COLOR, Palette, Renderer};
pub use types::{
    CollisionRecord, CycleChain, CycleReport, DeclarationRecord, Edge, NodeId, ScanStats,
    Traversal,
};

use std::path::Path;

use tracing::info;

/// A query session over one run's registry.
///
/// Built empty with [`TypeGraph::new`] and filled through
/// [`registry_mut`](TypeGraph::registry_mut), or built from a source tree
/// with [`TypeGraph::scan`].
#[derive(Debug, Clone)]
pub struct TypeGraph {
    registry: Registry,
    aliases: AliasTable,
    palette: Palette,
}

impl TypeGraph {
    /// Create an empty session from configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the configured alias pairs are invalid.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            registry: Registry::with_extern_group(config.extern_group.clone()),
            aliases: config.alias_table()?,
            palette: config.palette(),
        })
    }

    /// Create a session and fill it by scanning `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or `root` does not
    /// exist. Unreadable files are reported in the stats instead.
    pub fn scan(root: &Path, config: Config) -> Result<(Self, ScanStats)> {
        let mut graph = Self::new(&config)?;
        let stats = scanner::scan(root, &config, &mut graph.registry)?;
        info!(
            types = graph.registry.len(),
            collisions = graph.registry.collisions().len(),
            "Registry built"
        );
        Ok((graph, stats))
    }

    /// The declaration registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Mutable access for callers supplying their own extraction.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// The alias table in use.
    #[must_use]
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Everything `root` transitively depends on.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if `root` was never declared.
    pub fn forward_closure(&self, root: &str) -> Result<Traversal> {
        graph::forward_closure(&self.registry, root)
    }

    /// Types that directly depend on `name` (or its alias).
    #[must_use]
    pub fn dependents(&self, name: &str) -> Traversal {
        graph::dependents(&self.registry, &self.aliases, name)
    }

    /// Cycles reachable from `root`; empty when there are none.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if `root` was never declared.
    pub fn find_cycles(&self, root: &str) -> Result<CycleReport> {
        graph::find_cycles(&self.registry, &self.aliases, root)
    }

    /// Mutually dependent groups across the whole registry.
    #[must_use]
    pub fn cycle_groups(&self) -> Vec<Vec<String>> {
        graph::cycle_groups(&self.registry, &self.aliases)
    }

    /// Renderer bound to this session's registry and palette.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        Renderer::new(&self.registry, &self.palette)
    }

    /// DOT text for a forward-closure or dependents result.
    #[must_use]
    pub fn render(&self, traversal: &Traversal) -> String {
        self.renderer().render_traversal(traversal)
    }

    /// DOT text for a cycle report.
    #[must_use]
    pub fn render_cycles(&self, report: &CycleReport) -> String {
        self.renderer().render_cycles(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_invalid_aliases() {
        let config = Config {
            aliases: vec![
                AliasPair {
                    interface: "A".into(),
                    implementation: "B".into(),
                },
                AliasPair {
                    interface: "A".into(),
                    implementation: "C".into(),
                },
            ],
            ..Config::default()
        };

        assert!(matches!(TypeGraph::new(&config), Err(Error::Config(_))));
    }

    #[test]
    fn forward_closure_renders_root_only_when_dependency_is_unknown() {
        let mut graph = TypeGraph::new(&Config::default()).expect("default config");
        graph.registry_mut().assign_group("A", "common");
        graph
            .registry_mut()
            .register(DeclarationRecord::new("A", "A.kt", vec!["B".into()]));

        let closure = graph.forward_closure("A").expect("A exists");

        assert_eq!(
            graph.render(&closure),
            "digraph G {\n common_A [color=black,style=filled];\n}\n"
        );
    }

    #[test]
    fn extern_label_comes_from_config() {
        let config = Config {
            extern_group: "thirdparty".into(),
            ..Config::default()
        };
        let graph = TypeGraph::new(&config).expect("valid config");

        assert_eq!(graph.registry().node_id("Gson").to_string(), "thirdparty_Gson");
    }
}
