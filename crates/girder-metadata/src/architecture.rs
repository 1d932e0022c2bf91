//! Architecture capability: the catalog of selectable module layouts.

use crate::error::MetadataError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One selectable architecture in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectureMeta {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl fmt::Display for ArchitectureMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// The architectures section of the generator metadata.
///
/// Holds the catalog entries plus an id index rebuilt on every validation.
/// Merging is by name (an entry whose name already exists is skipped);
/// indexing is by id and rejects two distinct entries sharing one id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchitecturesCapability {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, rename = "architecture")]
    content: Vec<ArchitectureMeta>,
    #[serde(skip)]
    indexed: BTreeMap<String, ArchitectureMeta>,
}

impl ArchitecturesCapability {
    /// Parse a catalog from TOML and validate its index.
    ///
    /// ```toml
    /// default = "mvc"
    ///
    /// [[architecture]]
    /// id = "mvc"
    /// name = "Layered MVC"
    /// ```
    pub fn from_toml_str(raw: &str) -> Result<Self, MetadataError> {
        let mut capability: Self = toml::from_str(raw)?;
        capability.validate()?;
        Ok(capability)
    }

    pub fn content(&self) -> &[ArchitectureMeta] {
        &self.content
    }

    /// The catalog's default architecture id, if it names a known entry.
    pub fn default_id(&self) -> Option<&str> {
        self.default
            .as_deref()
            .filter(|id| self.indexed.contains_key(*id))
    }

    pub fn get(&self, id: &str) -> Option<&ArchitectureMeta> {
        self.indexed.get(id)
    }

    /// Merge another catalog fragment into this one.
    ///
    /// Entries whose name is already present are skipped; the index is
    /// rebuilt afterwards and duplicate ids abort the merge.
    pub fn merge(&mut self, other: Vec<ArchitectureMeta>) -> Result<(), MetadataError> {
        for entry in other {
            if !self.content.iter().any(|it| it.name == entry.name) {
                self.content.push(entry);
            }
        }
        self.validate()
    }

    /// Rebuild the id index, rejecting duplicate ids.
    pub fn validate(&mut self) -> Result<(), MetadataError> {
        self.indexed.clear();
        for entry in &self.content {
            if let Some(existing) = self.indexed.get(&entry.id)
                && existing != entry
            {
                return Err(MetadataError::DuplicateIdentity {
                    id: entry.id.clone(),
                    existing: existing.to_string(),
                    incoming: entry.to_string(),
                });
            }
            self.indexed.insert(entry.id.clone(), entry.clone());
        }
        Ok(())
    }
}
