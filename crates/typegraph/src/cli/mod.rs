//! CLI command implementations.

use std::path::Path;

use colored::Colorize;
use typegraph::{Config, TypeGraph};

pub mod collisions;
pub mod cycles;
pub mod dependents;
pub mod dump;
pub mod graph;
pub mod output;

const MAX_DISPLAY_ERRORS: usize = 5;

/// Load configuration and scan `root` into a fresh session.
///
/// Scan problems are summarized on stderr so stdout stays clean for DOT.
pub fn load(root: &Path, config_path: Option<&Path>) -> Result<TypeGraph, typegraph::Error> {
    let config = Config::load(config_path, root)?;
    let (graph, stats) = TypeGraph::scan(root, config)?;

    eprintln!(
        "{} {} files, {} types in {:.2?}",
        "Scanned".cyan().bold(),
        stats.files_scanned,
        graph.registry().len(),
        stats.duration
    );

    if !stats.directories_skipped.is_empty() {
        eprintln!(
            "{}: {} directories (unreadable)",
            "Skipped".yellow(),
            stats.directories_skipped.len()
        );
    }

    if !stats.errors.is_empty() {
        eprintln!("{} ({}):", "Errors".red().bold(), stats.errors.len());
        for err in stats.errors.iter().take(MAX_DISPLAY_ERRORS) {
            eprintln!("  {} {}: {}", "•".red(), err.path.display(), err.message);
        }
        if stats.errors.len() > MAX_DISPLAY_ERRORS {
            eprintln!("  ... and {} more", stats.errors.len() - MAX_DISPLAY_ERRORS);
        }
    }

    Ok(graph)
}
