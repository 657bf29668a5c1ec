//! Node registry, group index and collision log.
//!
//! The registry is the single source of truth for "does this type exist".
//! It is populated by extraction and read-only afterwards.
//!
//! The group index is shared between type names and file stems: extraction
//! assigns a group to each file stem from its namespace declaration, and a
//! record's originating group is looked up through the stem of its
//! `source_path`.

use std::collections::{BTreeMap, HashMap};

use tracing::warn;

use crate::types::{CollisionRecord, DeclarationRecord, NodeId};

/// Group label for names with no group assignment.
pub const DEFAULT_EXTERN_GROUP: &str = "extern";

/// Declarations, group assignments and collision diagnostics for one run.
#[derive(Debug, Clone)]
pub struct Registry {
    records: BTreeMap<String, DeclarationRecord>,
    groups: HashMap<String, String>,
    collisions: Vec<CollisionRecord>,
    extern_group: String,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create an empty registry using the default extern label.
    #[must_use]
    pub fn new() -> Self {
        Self::with_extern_group(DEFAULT_EXTERN_GROUP)
    }

    /// Create an empty registry that labels ungrouped nodes with `label`.
    #[must_use]
    pub fn with_extern_group(label: impl Into<String>) -> Self {
        Self {
            records: BTreeMap::new(),
            groups: HashMap::new(),
            collisions: Vec::new(),
            extern_group: label.into(),
        }
    }

    /// Insert or replace the record for `record.name`.
    ///
    /// When a record already exists and its group differs from the group of
    /// the new record's source file, a [`CollisionRecord`] is logged. The
    /// replacement happens either way. Afterwards the name is assigned the
    /// source file's group if it has none yet.
    pub fn register(&mut self, record: DeclarationRecord) {
        let origin_group = record
            .file_stem()
            .and_then(|stem| self.groups.get(stem))
            .cloned();

        if self.records.contains_key(&record.name) {
            let existing_group = self.groups.get(&record.name);
            if existing_group != origin_group.as_ref() {
                let collision = CollisionRecord {
                    existing: format!("{}_{}", self.label(existing_group), record.name),
                    replacement: format!("{}_{}", self.label(origin_group.as_ref()), record.name),
                };
                warn!(
                    existing = %collision.existing,
                    replacement = %collision.replacement,
                    path = %record.source_path.display(),
                    "Same type name declared in two groups"
                );
                self.collisions.push(collision);
            }
        }

        let name = record.name.clone();
        self.records.insert(name.clone(), record);
        if let Some(group) = origin_group {
            self.assign_group(&name, &group);
        }
    }

    /// Assign `group` to `name` unless it already has one. First writer wins.
    pub fn assign_group(&mut self, name: &str, group: &str) {
        if !self.groups.contains_key(name) {
            self.groups.insert(name.to_string(), group.to_string());
        }
    }

    /// Record for `name`, if one was registered.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&DeclarationRecord> {
        self.records.get(name)
    }

    /// Whether a record exists for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Group assigned to `name`, if any.
    #[must_use]
    pub fn group_of(&self, name: &str) -> Option<&str> {
        self.groups.get(name).map(String::as_str)
    }

    /// Rendered node id for `name`, using the extern label when ungrouped.
    #[must_use]
    pub fn node_id(&self, name: &str) -> NodeId {
        NodeId {
            group: self.label(self.groups.get(name)).to_string(),
            name: name.to_string(),
        }
    }

    /// All records, ordered by name.
    pub fn records(&self) -> impl Iterator<Item = &DeclarationRecord> {
        self.records.values()
    }

    /// Collisions logged so far, in registration order.
    #[must_use]
    pub fn collisions(&self) -> &[CollisionRecord] {
        &self.collisions
    }

    /// Label used for names with no group.
    #[must_use]
    pub fn extern_group(&self) -> &str {
        &self.extern_group
    }

    /// Number of registered records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn label<'a>(&'a self, group: Option<&'a String>) -> &'a str {
        group.map_or(self.extern_group.as_str(), String::as_str)
    }
}
