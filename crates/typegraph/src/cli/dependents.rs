//! `typegraph dependents` command implementation.

use colored::Colorize;
use typegraph::TypeGraph;

use super::output::{self, OutputArgs};

/// Run the dependents command.
pub fn run(graph: &TypeGraph, name: &str, output: &OutputArgs) -> Result<(), typegraph::Error> {
    let dependents = graph.dependents(name);

    if dependents.is_empty() {
        eprintln!("{}", format!("Nothing depends on {name}.").dimmed());
    } else {
        eprintln!(
            "{} {} types depend on {}",
            "Dependents".cyan().bold(),
            dependents.edges.len().to_string().green(),
            name
        );
    }

    output::emit(
        &graph.render(&dependents),
        &format!("{name}-dependents"),
        output,
    )
}
