//! Typegraph CLI - dependency graphs of declared types from the command line.
//!
//! Scans a source tree, then prints (or renders with Graphviz) the forward
//! closure, direct dependents, or cycles of a type.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::output::OutputArgs;

/// Typegraph: type-level dependency graphs rendered as DOT.
#[derive(Parser)]
#[command(name = "typegraph")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Root folder to search for source files (defaults to current directory)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Configuration file (defaults to typegraph.yaml in the root, if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show everything a type transitively depends on
    Graph {
        /// Type name to start from
        name: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the types that directly depend on a type
    Dependents {
        /// Type name to look up (an aliased interface matches its implementation)
        name: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Detect circular dependencies
    Cycles {
        /// Trace every cycle reachable from this type; omit for a summary of
        /// the whole codebase
        name: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List type names declared in more than one group
    Collisions,

    /// Print every scanned declaration as JSON
    Dump,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let root = match cli.root {
        Some(r) => r,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!(
                    "{}: failed to get current directory: {e}",
                    "error".red().bold()
                );
                return ExitCode::FAILURE;
            }
        },
    };

    let result = cli::load(&root, cli.config.as_deref()).and_then(|graph| match cli.command {
        Commands::Graph { name, output } => cli::graph::run(&graph, &name, &output),
        Commands::Dependents { name, output } => cli::dependents::run(&graph, &name, &output),
        Commands::Cycles { name, output } => cli::cycles::run(&graph, name.as_deref(), &output),
        Commands::Collisions => cli::collisions::run(&graph),
        Commands::Dump => cli::dump::run(&graph),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
