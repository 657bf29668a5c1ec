//! Interface/implementation alias table.
//!
//! Extraction sees an interface and the class backing it as two unrelated
//! names. The alias table pairs them so cycle detection and reverse lookup
//! treat both as one participant. The implementation name is canonical.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One configured interface/implementation pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasPair {
    /// Interface name as declared
    pub interface: String,
    /// Name of the concrete type implementing it
    pub implementation: String,
}

/// Two fixed mappings between interface names and implementation names.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    to_implementation: HashMap<String, String>,
    to_interface: HashMap<String, String>,
}

impl AliasTable {
    /// Build the table from configured pairs.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a name is empty or a name is paired twice.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a AliasPair>,
    {
        let mut table = Self::default();
        for pair in pairs {
            if pair.interface.is_empty() || pair.implementation.is_empty() {
                return Err(Error::Config(format!(
                    "alias pair has an empty name: {:?} -> {:?}",
                    pair.interface, pair.implementation
                )));
            }
            if let Some(existing) = table.to_implementation.get(&pair.interface) {
                return Err(Error::Config(format!(
                    "interface {} is aliased to both {existing} and {}",
                    pair.interface, pair.implementation
                )));
            }
            if let Some(existing) = table.to_interface.get(&pair.implementation) {
                return Err(Error::Config(format!(
                    "implementation {} is aliased to both {existing} and {}",
                    pair.implementation, pair.interface
                )));
            }
            table
                .to_implementation
                .insert(pair.interface.clone(), pair.implementation.clone());
            table
                .to_interface
                .insert(pair.implementation.clone(), pair.interface.clone());
        }
        Ok(table)
    }

    /// Canonical identity of `name`: its implementation if it is an aliased
    /// interface, otherwise `name` itself.
    #[must_use]
    pub fn canonical<'a>(&'a self, name: &'a str) -> &'a str {
        self.to_implementation.get(name).map_or(name, String::as_str)
    }

    /// Interface name for an aliased implementation.
    #[must_use]
    pub fn interface_of(&self, implementation: &str) -> Option<&str> {
        self.to_interface.get(implementation).map(String::as_str)
    }

    /// Number of configured pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.to_implementation.len()
    }

    /// Whether no pairs are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_implementation.is_empty()
    }
}
