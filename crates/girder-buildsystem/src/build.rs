//! The in-memory model of one module's build descriptor.

use crate::bom::BomContainer;
use crate::dependency::DependencyContainer;
use crate::settings::BuildSettings;

/// One module's build prior to textual rendering.
///
/// Owns identity settings, dependency edges, bill-of-materials entries, and
/// the ordered list of declared child module names. During assembly the
/// containers are append-only; nothing is mutated once serialization starts.
#[derive(Debug, Clone, Default)]
pub struct BuildSpecification {
    settings: BuildSettings,
    dependencies: DependencyContainer,
    boms: BomContainer,
    modules: Vec<String>,
}

impl BuildSpecification {
    pub fn settings(&mut self) -> &mut BuildSettings {
        &mut self.settings
    }

    pub fn settings_ref(&self) -> &BuildSettings {
        &self.settings
    }

    pub fn dependencies(&mut self) -> &mut DependencyContainer {
        &mut self.dependencies
    }

    pub fn dependencies_ref(&self) -> &DependencyContainer {
        &self.dependencies
    }

    pub fn boms(&mut self) -> &mut BomContainer {
        &mut self.boms
    }

    pub fn boms_ref(&self) -> &BomContainer {
        &self.boms
    }

    /// Declare a child module. Declaration order is serialization order.
    pub fn add_module(&mut self, module: impl Into<String>) -> &mut Self {
        self.modules.push(module.into());
        self
    }

    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    pub fn has_modules(&self) -> bool {
        !self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom::BomEntry;
    use crate::dependency::Dependency;

    #[test]
    fn containers_accumulate_without_removal() {
        let mut build = BuildSpecification::default();
        build.settings().group("com.example").artifact("shop").version("1.0.0");
        build
            .dependencies()
            .add("shop-core", Dependency::with_coordinates("com.example", "shop-core"));
        build.boms().add(
            "shop-api",
            BomEntry::with_coordinates("com.example", "shop-api").version("0.0.1-SNAPSHOT"),
        );
        build.add_module("shop-api").add_module("shop-core");

        assert_eq!(build.dependencies_ref().len(), 1);
        assert_eq!(build.boms_ref().len(), 1);
        assert_eq!(build.modules(), ["shop-api", "shop-core"]);
    }
}
