//! DOT serialization of query results.
//!
//! Output layout:
//!
//! ```text
//! digraph G {
//!  billing_Invoice -> common_Clock;
//!  billing_Invoice [color=blue,style=filled];
//!  common_Clock [color=black,style=filled,shape=rect];
//! }
//! ```
//!
//! Edge lines come first, verbatim, then one styling line per visited node.
//! Node ids are `{group}_{name}` without escaping.

use std::collections::HashMap;
use std::fmt::{Display, Write};

use indexmap::IndexSet;

use crate::registry::Registry;
use crate::types::{CycleReport, Traversal};

/// Fallback fill color when a group has no configured color.
pub const DEFAULT_COLOR: &str = "black";

/// Group to fill-color mapping.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: HashMap<String, String>,
    default_color: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(HashMap::new(), DEFAULT_COLOR)
    }
}

impl Palette {
    /// Create a palette from explicit group colors and a fallback.
    #[must_use]
    pub fn new(colors: HashMap<String, String>, default_color: impl Into<String>) -> Self {
        Self {
            colors,
            default_color: default_color.into(),
        }
    }

    /// Color for `group`; unassigned and unknown groups get the fallback.
    #[must_use]
    pub fn color_of(&self, group: Option<&str>) -> &str {
        group
            .and_then(|g| self.colors.get(g))
            .map_or(self.default_color.as_str(), String::as_str)
    }
}

/// Serializes visited sets and edges into a `digraph` block.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    registry: &'a Registry,
    palette: &'a Palette,
}

impl<'a> Renderer<'a> {
    /// Create a renderer reading groups and interface flags from `registry`.
    #[must_use]
    pub fn new(registry: &'a Registry, palette: &'a Palette) -> Self {
        Self { registry, palette }
    }

    /// Render pre-formatted edge lines followed by node styling.
    pub fn render<I>(&self, visited: &IndexSet<String>, edge_lines: I) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut out = String::from("digraph G {\n");
        for line in edge_lines {
            let _ = writeln!(out, " {line}");
        }
        for name in visited {
            let _ = writeln!(out, " {}", self.style_line(name));
        }
        out.push_str("}\n");
        out
    }

    /// Render a forward-closure or reverse-dependency result.
    #[must_use]
    pub fn render_traversal(&self, traversal: &Traversal) -> String {
        self.render(&traversal.visited, &traversal.edges)
    }

    /// Render the chains and participants of a cycle scan.
    #[must_use]
    pub fn render_cycles(&self, report: &CycleReport) -> String {
        self.render(&report.nodes, &report.chains)
    }

    fn style_line(&self, name: &str) -> String {
        let id = self.registry.node_id(name);
        let color = self.palette.color_of(self.registry.group_of(name));
        let is_interface = self
            .registry
            .lookup(name)
            .is_some_and(|record| record.is_interface);

        if is_interface {
            format!("{id} [color={color},style=filled,shape=rect];")
        } else {
            format!("{id} [color={color},style=filled];")
        }
    }
}
