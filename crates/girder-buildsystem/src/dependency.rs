//! Dependency edges of a build specification.

use std::collections::BTreeMap;

/// One dependency edge: target coordinates plus an optional version
/// reference. Intra-project edges carry no version — they resolve through
/// the root aggregator's bill of materials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub group: String,
    pub artifact: String,
    pub version: Option<String>,
}

impl Dependency {
    pub fn with_coordinates(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: None,
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// Dependency edges keyed by a logical id, iterated in id-sorted order.
///
/// Append-only during assembly; re-adding an id replaces the edge. The sort
/// keeps serialized output independent of insertion order.
#[derive(Debug, Clone, Default)]
pub struct DependencyContainer {
    items: BTreeMap<String, Dependency>,
}

impl DependencyContainer {
    pub fn add(&mut self, id: impl Into<String>, dependency: Dependency) -> &mut Self {
        self.items.insert(id.into(), dependency);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Dependency> {
        self.items.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn items(&self) -> impl Iterator<Item = (&str, &Dependency)> {
        self.items.iter().map(|(id, dep)| (id.as_str(), dep))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_is_id_sorted() {
        let mut container = DependencyContainer::default();
        container.add("shop-core", Dependency::with_coordinates("com.example", "shop-core"));
        container.add("shop-api", Dependency::with_coordinates("com.example", "shop-api"));

        let ids: Vec<&str> = container.ids().collect();
        assert_eq!(ids, vec!["shop-api", "shop-core"]);
    }

    #[test]
    fn re_adding_replaces_the_edge() {
        let mut container = DependencyContainer::default();
        container.add("lib", Dependency::with_coordinates("com.example", "lib"));
        container.add(
            "lib",
            Dependency::with_coordinates("com.example", "lib").version("2.1"),
        );

        assert_eq!(container.len(), 1);
        assert_eq!(container.get("lib").unwrap().version.as_deref(), Some("2.1"));
    }
}
