//! Source extraction: discover files, extract declarations, fill a registry.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                          scan                             │
//! ├──────────────────────────────────────────────────────────┤
//! │  Discovery  (Sequential): directory walk, sorted paths    │
//! │  Extraction (Parallel):   rayon::par_iter() per file      │
//! │  Apply      (Sequential): assign_group + register, in     │
//! │                           file order                      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Extraction is pure, so it runs in parallel. Registration order only
//! affects the collision log, but it is kept deterministic anyway by
//! applying results in sorted path order.

pub mod kotlin;

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Error, Result, ScanError};
use crate::registry::Registry;
use crate::types::ScanStats;

use kotlin::{FileDeclarations, KotlinPatterns};

/// Directory names never descended into.
const EXCLUDED_DIRS: &[&str] = &["build", "target", "out", "node_modules"];

/// Scan every matching file under `root` into `registry`.
///
/// Unreadable files and directories are recorded in the returned stats and
/// skipped.
///
/// # Errors
///
/// Returns `Error::Io` if `root` does not exist.
pub fn scan(root: &Path, config: &Config, registry: &mut Registry) -> Result<ScanStats> {
    let start = Instant::now();
    let root = root.canonicalize().map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("source root not found: {}", root.display()),
        ))
    })?;

    let mut stats = ScanStats::default();
    let mut files = Vec::new();
    walk_dir(&root, config, &mut files, &mut stats.directories_skipped);
    files.sort();

    let patterns = KotlinPatterns {
        package_prefix: &config.package_prefix,
        extern_containers: &config.extern_containers,
    };

    let extracted: Vec<(PathBuf, std::result::Result<FileDeclarations, ScanError>)> = files
        .par_iter()
        .map(|path| {
            let relative = path.strip_prefix(&root).unwrap_or(path).to_path_buf();
            let result = std::fs::read_to_string(path)
                .map(|content| kotlin::extract(&relative, &content, &patterns))
                .map_err(|e| ScanError::from_io(relative.clone(), &e));
            (relative, result)
        })
        .collect();

    for (path, result) in extracted {
        match result {
            Ok(found) => {
                debug!(
                    path = %path.display(),
                    declarations = found.declarations.len(),
                    "Parsed file"
                );
                stats.declarations_found += found.declarations.len();
                stats.files_scanned += 1;
                apply(registry, &path, found);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping unreadable file");
                stats.files_skipped += 1;
                stats.errors.push(e);
            }
        }
    }

    stats.duration = start.elapsed();
    info!(
        files = stats.files_scanned,
        declarations = stats.declarations_found,
        skipped = stats.files_skipped,
        "Scan complete"
    );
    Ok(stats)
}

/// Apply one file's extraction to the registry.
///
/// The file stem gets the namespace group first, so that each declaration
/// can pick it up as its originating group.
pub fn apply(registry: &mut Registry, path: &Path, found: FileDeclarations) {
    let stem = path.file_stem().and_then(|s| s.to_str());
    if let (Some(group), Some(stem)) = (&found.group, stem) {
        registry.assign_group(stem, group);
    }
    for record in found.declarations {
        registry.register(record);
    }
}

/// Recursively walk a directory, collecting files with a scanned extension.
fn walk_dir(
    dir: &Path,
    config: &Config,
    files: &mut Vec<PathBuf>,
    directories_skipped: &mut Vec<(PathBuf, String)>,
) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            warn!(
                directory = %dir.display(),
                error = %e,
                "Cannot read directory, skipping"
            );
            directories_skipped.push((dir.to_path_buf(), e.to_string()));
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(
                    directory = %dir.display(),
                    error = %e,
                    "Failed to read directory entry, skipping"
                );
                continue;
            }
        };

        let path = entry.path();

        if path.is_dir() {
            let skip = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| is_excluded_dir(name, config));
            if !skip {
                walk_dir(&path, config, files, directories_skipped);
            }
        } else if path.is_file()
            && path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| config.scans_extension(ext))
        {
            files.push(path);
        }
    }
}

fn is_excluded_dir(name: &str, config: &Config) -> bool {
    name.starts_with('.')
        || EXCLUDED_DIRS.contains(&name)
        || config.excluded_dirs.iter().any(|d| d == name)
}
