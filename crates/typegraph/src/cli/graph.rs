//! `typegraph graph` command implementation.

use colored::Colorize;
use typegraph::TypeGraph;

use super::output::{self, OutputArgs};

/// Run the graph command.
pub fn run(graph: &TypeGraph, name: &str, output: &OutputArgs) -> Result<(), typegraph::Error> {
    let closure = graph.forward_closure(name)?;

    eprintln!(
        "{} {} depends on {} types",
        "Graph".cyan().bold(),
        name,
        closure.visited.len() - 1
    );

    output::emit(&graph.render(&closure), name, output)
}
