//! Module graph assembly: which modules exist and how they are wired.

use crate::architecture::{ArchitectureId, Layer};
use crate::description::ProjectDescription;
use crate::error::GeneratorError;
use girder_buildsystem::{
    BomEntry, BuildSpecification, Dependency, ModuleRegistry, ParentReference,
};

/// Version pin used for intra-project bill-of-materials entries.
///
/// Kept distinct from the project's declared version to match the observed
/// generator behavior; whether the two should coincide is an open question
/// upstream, so the pin is a single knob here.
pub const MODULE_BOM_VERSION: &str = "0.0.1-SNAPSHOT";

/// Name of a module's build descriptor file.
pub const POM_FILE: &str = "pom.xml";

/// Relative path from a child module directory to the parent descriptor.
pub const PARENT_POM_RELATIVE_PATH: &str = "../pom.xml";

/// The assembled object graph for one generation run: the root descriptor
/// plus the registry of child module builds in declaration order.
///
/// Nothing in here is mutated once serialization begins.
#[derive(Debug, Clone)]
pub struct ModuleAssembly {
    pub root: BuildSpecification,
    pub modules: ModuleRegistry,
}

impl ModuleAssembly {
    /// Child module names in serialization order (declaration order); the
    /// root aggregator always serializes last. A dependency is materialized
    /// before any module that references it.
    pub fn serialization_order(&self) -> Vec<&str> {
        self.modules.declared().collect()
    }
}

/// Derives the module set implied by an architecture and wires dependency
/// edges, parent linkage, and the root aggregator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleGraphBuilder;

impl ModuleGraphBuilder {
    /// Assemble the module graph for `architecture`.
    ///
    /// - `Flat`: a single root descriptor, nothing registered.
    /// - `Layered`: api, common, core (depends on api and common), web
    ///   (depends on core), then the root aggregator declaring all four as
    ///   children with one BOM entry each.
    /// - `Custom`: rejected — no assembly rule is registered for it.
    pub fn assemble(
        &self,
        architecture: &ArchitectureId,
        description: &ProjectDescription,
    ) -> Result<ModuleAssembly, GeneratorError> {
        match architecture {
            ArchitectureId::Flat => Ok(self.assemble_flat(description)),
            ArchitectureId::Layered => self.assemble_layered(description),
            ArchitectureId::Custom(id) => Err(GeneratorError::Configuration {
                architecture: id.clone(),
            }),
        }
    }

    fn root_build(&self, description: &ProjectDescription) -> BuildSpecification {
        let mut root = BuildSpecification::default();
        root.settings()
            .group(&description.group)
            .artifact(&description.name)
            .version(&description.version);
        root
    }

    fn assemble_flat(&self, description: &ProjectDescription) -> ModuleAssembly {
        ModuleAssembly {
            root: self.root_build(description),
            modules: ModuleRegistry::default(),
        }
    }

    fn assemble_layered(
        &self,
        description: &ProjectDescription,
    ) -> Result<ModuleAssembly, GeneratorError> {
        let mut root = self.root_build(description);
        let mut modules = ModuleRegistry::default();

        let base = description.name.as_str();
        let api = Layer::Api.module_name(base);
        let common = Layer::Common.module_name(base);
        let core = Layer::Core.module_name(base);
        let web = Layer::Web.module_name(base);

        self.create_module(&mut modules, &root, &api, &[])?;
        self.create_module(&mut modules, &root, &common, &[])?;
        self.create_module(&mut modules, &root, &core, &[&api, &common])?;
        self.create_module(&mut modules, &root, &web, &[&core])?;

        for layer in Layer::ALL {
            let module = layer.module_name(base);
            root.add_module(&module);
            root.boms().add(
                &module,
                BomEntry::with_coordinates(&description.group, &module)
                    .version(MODULE_BOM_VERSION),
            );
        }

        Ok(ModuleAssembly { root, modules })
    }

    /// Create and register one child module build.
    ///
    /// The child's version floats with the root (never pinned independently)
    /// and its dependency edges point at sibling artifacts under the root's
    /// group id, versionless — they resolve through the root's BOM.
    fn create_module(
        &self,
        modules: &mut ModuleRegistry,
        root: &BuildSpecification,
        name: &str,
        depends_on: &[&str],
    ) -> Result<(), GeneratorError> {
        let root_settings = root.settings_ref();
        let group = root_settings.group_id().to_string();
        let parent =
            ParentReference::new(root_settings.coordinates(), PARENT_POM_RELATIVE_PATH);
        let version = root_settings.version_id().to_string();

        let build = modules.get_or_create(name);
        build.settings().artifact(name).version(version);
        build.settings().set_parent(parent)?;
        for sibling in depends_on {
            build
                .dependencies()
                .add(*sibling, Dependency::with_coordinates(&group, *sibling));
        }
        modules.register(name);
        Ok(())
    }
}
