//! `typegraph collisions` command implementation.

use colored::Colorize;
use typegraph::TypeGraph;

/// Run the collisions command.
#[allow(clippy::unnecessary_wraps)]
pub fn run(graph: &TypeGraph) -> Result<(), typegraph::Error> {
    let collisions = graph.registry().collisions();

    if collisions.is_empty() {
        println!("{}", "No name collisions.".green());
        return Ok(());
    }

    println!(
        "{} type names declared in more than one group:",
        collisions.len().to_string().yellow().bold()
    );
    for collision in collisions {
        println!(
            "  {} {} {} {}",
            "•".dimmed(),
            collision.existing,
            "replaced by".dimmed(),
            collision.replacement
        );
    }

    Ok(())
}
