//! Property container and the customizer seam that fills it.

use std::collections::BTreeMap;

/// Arbitrary key/value properties contributed to a generated project.
///
/// Keys iterate in sorted order, so file output is deterministic regardless
/// of insertion order. Last write to a key wins.
#[derive(Debug, Clone, Default)]
pub struct PropertiesContainer {
    properties: BTreeMap<String, String>,
}

impl PropertiesContainer {
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn has(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn property(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Entries in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Customizes the shared properties container before it is written.
///
/// Customizers run in registration order. The final key sort makes the file
/// layout independent of that order, but side effects are not: a later
/// customizer overwriting an earlier customizer's key wins.
pub trait PropertiesCustomizer {
    fn customize(&self, properties: &mut PropertiesContainer);
}

impl<F> PropertiesCustomizer for F
where
    F: Fn(&mut PropertiesContainer),
{
    fn customize(&self, properties: &mut PropertiesContainer) {
        self(properties)
    }
}
