//! Delivering DOT text: print it, or render it with Graphviz.

use std::path::{Path, PathBuf};
use std::process::Command;

use clap::Args;
use colored::Colorize;
use tracing::{debug, warn};
use typegraph::Error;

/// Output options shared by the graph-producing commands.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Render to SVG with Graphviz instead of printing DOT
    #[arg(long)]
    pub render: bool,

    /// Directory for rendered files (defaults to current directory)
    #[arg(short, long, requires = "render")]
    pub out_dir: Option<PathBuf>,

    /// Graphviz layout engine passed to `dot -K`
    #[arg(long, default_value = "fdp")]
    pub engine: String,

    /// Keep the intermediate .dot file next to the SVG
    #[arg(long, requires = "render")]
    pub keep_dot: bool,

    /// Open the rendered SVG with the system viewer
    #[arg(long, requires = "render")]
    pub open: bool,
}

/// Print `dot`, or write `<stem>.svg` via Graphviz when rendering.
pub fn emit(dot: &str, stem: &str, args: &OutputArgs) -> Result<(), Error> {
    if !args.render {
        print!("{dot}");
        return Ok(());
    }

    let dir = match &args.out_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let dot_path = dir.join(format!("{stem}.dot"));
    let svg_path = dir.join(format!("{stem}.svg"));

    std::fs::write(&dot_path, dot)?;
    let rendered = run_tool(
        Command::new("dot")
            .arg(format!("-K{}", args.engine))
            .arg("-Tsvg")
            .arg(&dot_path)
            .arg("-o")
            .arg(&svg_path),
    );

    if !args.keep_dot {
        if let Err(e) = std::fs::remove_file(&dot_path) {
            warn!(
                path = %dot_path.display(),
                error = %e,
                "Failed to remove intermediate DOT file"
            );
        }
    }
    rendered?;

    println!("{} {}", "Rendered".green().bold(), svg_path.display());

    if args.open {
        run_tool(&mut opener(&svg_path))?;
    }
    Ok(())
}

/// Run an external tool to completion, mapping failure to `Error::Render`.
fn run_tool(command: &mut Command) -> Result<(), Error> {
    let program = command.get_program().to_string_lossy().into_owned();
    debug!(program = %program, "Running external tool");

    let status = command
        .status()
        .map_err(|e| Error::Render(format!("failed to run {program}: {e}")))?;
    if status.success() {
        Ok(())
    } else {
        Err(Error::Render(format!("{program} exited with {status}")))
    }
}

fn opener(path: &Path) -> Command {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    };
    command.arg(path);
    command
}
