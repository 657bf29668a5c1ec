//! `typegraph dump` command implementation.

use std::path::Path;

use serde::Serialize;
use typegraph::TypeGraph;

/// One declaration as printed by `dump`.
#[derive(Serialize)]
struct DumpEntry<'a> {
    name: &'a str,
    group: Option<&'a str>,
    source_path: &'a Path,
    dependencies: &'a [String],
    is_interface: bool,
}

/// Run the dump command.
pub fn run(graph: &TypeGraph) -> Result<(), typegraph::Error> {
    let registry = graph.registry();
    let entries: Vec<DumpEntry<'_>> = registry
        .records()
        .map(|record| DumpEntry {
            name: &record.name,
            group: registry.group_of(&record.name),
            source_path: &record.source_path,
            dependencies: &record.dependencies,
            is_interface: record.is_interface,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
