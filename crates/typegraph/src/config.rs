//! Configuration management for typegraph.
//!
//! Configuration comes from an optional YAML file. Every field has a
//! default, so an empty file (or no file) is a valid configuration.
//!
//! ```yaml
//! package_prefix: "package com.example.shop."
//! extern_containers: [RedisClient]
//! aliases:
//!   - interface: OrderRepository
//!     implementation: OrderRepositoryImpl
//! group_colors:
//!   checkout: blue
//!   payments: green
//! default_color: black
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alias::{AliasPair, AliasTable};
use crate::error::{Error, Result};
use crate::registry::DEFAULT_EXTERN_GROUP;
use crate::render::{DEFAULT_COLOR, Palette};

/// File name looked up in the source root when no config path is given.
pub const CONFIG_FILE_NAME: &str = "typegraph.yaml";

/// Configuration for a typegraph run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Namespace declaration prefix; the group is the next path segment
    pub package_prefix: String,
    /// Extensions of files to scan, without the dot
    pub extensions: Vec<String>,
    /// Generic containers whose type arguments are not dependencies
    pub extern_containers: Vec<String>,
    /// Interface/implementation pairs treated as one node
    pub aliases: Vec<AliasPair>,
    /// Fill color per group
    pub group_colors: HashMap<String, String>,
    /// Fill color for groups without an entry
    pub default_color: String,
    /// Group label for types without a group
    pub extern_group: String,
    /// Extra directory names to skip during discovery
    pub excluded_dirs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let group_colors = [
            ("common", "black"),
            ("dashpass_benefits", "blue"),
            ("dashpass_management", "green"),
            ("dashpass_partnerships", "cyan"),
            ("mealplan", "brown"),
            ("redeem_grpc", "pink"),
            ("subscription_cadence", "magenta"),
            ("subscription_common", "orange"),
            ("subscription_grpc", "red"),
            ("subscription_kafka", "yellow"),
            ("taxcalculation", "purple"),
        ]
        .into_iter()
        .map(|(group, color)| (group.to_string(), color.to_string()))
        .collect();

        Self {
            package_prefix: "package com.doordash.subscription.".to_string(),
            extensions: vec!["kt".to_string()],
            extern_containers: vec!["AsgardRedisClient".to_string()],
            aliases: Vec::new(),
            group_colors,
            default_color: DEFAULT_COLOR.to_string(),
            extern_group: DEFAULT_EXTERN_GROUP.to_string(),
            excluded_dirs: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration for a source tree.
    ///
    /// An explicit `path` must exist. Without one, `typegraph.yaml` in
    /// `root` is used when present, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// parsed configuration fails validation.
    pub fn load(path: Option<&Path>, root: &Path) -> Result<Self> {
        let candidate: Option<PathBuf> = match path {
            Some(p) => Some(p.to_path_buf()),
            None => {
                let default_path = root.join(CONFIG_FILE_NAME);
                default_path.is_file().then_some(default_path)
            }
        };

        let Some(file) = candidate else {
            debug!("No configuration file, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(&file).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("cannot read config {}: {e}", file.display()),
            ))
        })?;
        debug!(path = %file.display(), "Loading configuration");
        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Yaml` on malformed input and `Error::Config` when
    /// validation fails.
    pub fn from_yaml(content: &str) -> Result<Self> {
        // serde_yaml rejects an empty document for a struct.
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.package_prefix.trim().is_empty() {
            return Err(Error::Config("package_prefix must not be empty".into()));
        }
        if self.extensions.is_empty() {
            return Err(Error::Config("extensions must list at least one".into()));
        }
        if self.extern_group.is_empty() {
            return Err(Error::Config("extern_group must not be empty".into()));
        }
        self.alias_table().map(|_| ())
    }

    /// Build the alias table from the configured pairs.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the pairs are inconsistent.
    pub fn alias_table(&self) -> Result<AliasTable> {
        AliasTable::from_pairs(&self.aliases)
    }

    /// Build the render palette.
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::new(self.group_colors.clone(), self.default_color.clone())
    }

    /// Whether `extension` (without the dot) should be scanned.
    #[must_use]
    pub fn scans_extension(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }
}
