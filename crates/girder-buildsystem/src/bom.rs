//! Bill-of-materials entries of a build specification.

use std::collections::BTreeMap;

/// One bill-of-materials entry: a coordinate+version pin that lets dependent
/// descriptors omit explicit versions for the pinned artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BomEntry {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl BomEntry {
    pub fn with_coordinates(group: impl Into<String>, artifact: impl Into<String>) -> BomEntryBuilder {
        BomEntryBuilder {
            group: group.into(),
            artifact: artifact.into(),
        }
    }
}

pub struct BomEntryBuilder {
    group: String,
    artifact: String,
}

impl BomEntryBuilder {
    pub fn version(self, version: impl Into<String>) -> BomEntry {
        BomEntry {
            group: self.group,
            artifact: self.artifact,
            version: version.into(),
        }
    }
}

/// Bill-of-materials entries keyed by a logical id, iterated in id-sorted
/// order. Append-only during assembly.
#[derive(Debug, Clone, Default)]
pub struct BomContainer {
    items: BTreeMap<String, BomEntry>,
}

impl BomContainer {
    pub fn add(&mut self, id: impl Into<String>, entry: BomEntry) -> &mut Self {
        self.items.insert(id.into(), entry);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&BomEntry> {
        self.items.get(id)
    }

    pub fn items(&self) -> impl Iterator<Item = (&str, &BomEntry)> {
        self.items.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
