//! Module registry: the single creation point for module build
//! specifications within one generation run.

use crate::build::BuildSpecification;
use std::collections::BTreeMap;

/// Maps module names to their build specifications, created lazily on first
/// access, plus the ordered list of declared module names.
///
/// Declaration order is significant: it becomes serialization order and must
/// be reproducible from one run to the next given the same inputs.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    builds: BTreeMap<String, BuildSpecification>,
    declared: Vec<String>,
}

impl ModuleRegistry {
    /// Return the build for `module`, creating an empty one on first access.
    ///
    /// Create-if-absent is a single entry-API operation; repeated calls with
    /// the same name always hand back the same specification.
    pub fn get_or_create(&mut self, module: impl Into<String>) -> &mut BuildSpecification {
        self.builds.entry(module.into()).or_default()
    }

    pub fn get(&self, module: &str) -> Option<&BuildSpecification> {
        self.builds.get(module)
    }

    /// Append `module` to the declared-name sequence.
    ///
    /// Idempotent: declaring a name twice keeps a single entry in its
    /// original position.
    pub fn register(&mut self, module: impl Into<String>) -> &mut Self {
        let module = module.into();
        if !self.declared.contains(&module) {
            self.declared.push(module);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }

    /// Declared module names, in declaration order.
    pub fn declared(&self) -> impl Iterator<Item = &str> {
        self.declared.iter().map(String::as_str)
    }

    /// Declared modules with their builds, in declaration order.
    ///
    /// Names declared without a build (never the case when declaration goes
    /// through `get_or_create` first) are skipped.
    pub fn declared_builds(&self) -> impl Iterator<Item = (&str, &BuildSpecification)> {
        self.declared
            .iter()
            .filter_map(|name| self.builds.get(name).map(|build| (name.as_str(), build)))
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }
}
