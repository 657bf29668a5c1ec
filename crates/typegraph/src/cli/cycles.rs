//! `typegraph cycles` command implementation.

use colored::Colorize;
use typegraph::TypeGraph;

use super::output::{self, OutputArgs};

/// Run the cycles command.
///
/// With a type name, traces every cycle reachable from it and emits them as
/// DOT. Without one, lists the mutually dependent groups of the whole scan.
pub fn run(
    graph: &TypeGraph,
    name: Option<&str>,
    output: &OutputArgs,
) -> Result<(), typegraph::Error> {
    match name {
        Some(name) => trace_from(graph, name, output),
        None => {
            summarize(graph);
            Ok(())
        }
    }
}

fn trace_from(graph: &TypeGraph, name: &str, output: &OutputArgs) -> Result<(), typegraph::Error> {
    let report = graph.find_cycles(name)?;

    if report.is_empty() {
        println!("{}", "No cyclic dependency.".green());
        return Ok(());
    }

    eprintln!(
        "Found {} cyclic dependencies through {} types",
        report.count().to_string().red().bold(),
        report.nodes.len()
    );

    output::emit(
        &graph.render_cycles(&report),
        &format!("{name}-cycles"),
        output,
    )
}

fn summarize(graph: &TypeGraph) {
    let groups = graph.cycle_groups();

    if groups.is_empty() {
        println!("{}", "No circular dependencies detected.".green());
        return;
    }

    println!(
        "Found {} groups of mutually dependent types:",
        groups.len().to_string().red().bold()
    );
    println!();

    for (i, group) in groups.iter().enumerate() {
        println!("  {} {}:", "Group".yellow().bold(), i + 1);
        let members = group
            .iter()
            .map(|name| graph.registry().node_id(name).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("    {}", members.dimmed());
    }
}
