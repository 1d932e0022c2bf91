//! The generation run driver.

use crate::architecture::ArchitectureId;
use crate::assembly::ModuleGraphBuilder;
use crate::contribute::{BuildProjectContributor, ModulePropertiesContributor, ProjectContributor};
use crate::description::ProjectDescription;
use crate::error::GeneratorError;
use crate::properties::PropertiesCustomizer;
use girder_metadata::ArchitecturesCapability;
use girder_buildsystem::{BuildWriter, MavenPomWriter};
use std::fs;
use std::path::Path;
use tracing::info;

/// Outcome of one completed generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub architecture: ArchitectureId,
    /// Child module names in serialization order; empty for flat projects.
    pub modules: Vec<String>,
}

/// Drives one isolated project-generation run: resolve the architecture,
/// assemble the module graph, then run contributors sequentially.
///
/// Each run owns its object graph exclusively; nothing is shared across runs
/// and nothing is mutated once serialization begins. A failing run leaves
/// already-written files in place — cleanup is the caller's concern.
pub struct ProjectGenerator {
    writer: Box<dyn BuildWriter>,
    catalog: Option<ArchitecturesCapability>,
    customizers: Vec<Box<dyn PropertiesCustomizer>>,
}

impl Default for ProjectGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectGenerator {
    /// A generator rendering with the stock Maven POM writer.
    pub fn new() -> Self {
        Self::with_writer(Box::new(MavenPomWriter))
    }

    pub fn with_writer(writer: Box<dyn BuildWriter>) -> Self {
        Self {
            writer,
            catalog: None,
            customizers: Vec::new(),
        }
    }

    /// Supply the metadata catalog consulted for the default architecture.
    pub fn with_catalog(mut self, catalog: ArchitecturesCapability) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Register a properties customizer. Customizers run in registration
    /// order over the shared container.
    pub fn add_customizer(&mut self, customizer: Box<dyn PropertiesCustomizer>) -> &mut Self {
        self.customizers.push(customizer);
        self
    }

    /// Generate the project described by `description` under `project_root`.
    ///
    /// Architecture resolution and graph assembly happen before any file is
    /// touched, so configuration failures never leave output behind.
    pub fn generate(
        &self,
        description: &ProjectDescription,
        project_root: &Path,
    ) -> Result<GenerationReport, GeneratorError> {
        let catalog_default = self.catalog.as_ref().and_then(|c| c.default_id());
        let architecture =
            ArchitectureId::resolve(description.architecture_choice(), catalog_default);
        let assembly = ModuleGraphBuilder.assemble(&architecture, description)?;

        fs::create_dir_all(project_root).map_err(|e| GeneratorError::io(project_root, e))?;

        let build_contributor = BuildProjectContributor::new(&assembly, self.writer.as_ref());
        let properties_contributor =
            ModulePropertiesContributor::new(&architecture, &description.name, &self.customizers);
        let contributors: [&dyn ProjectContributor; 2] =
            [&build_contributor, &properties_contributor];
        for contributor in contributors {
            contributor.contribute(project_root)?;
        }

        let modules: Vec<String> = assembly
            .modules
            .declared()
            .map(str::to_string)
            .collect();
        info!(
            architecture = architecture.as_str(),
            modules = modules.len(),
            root = %project_root.display(),
            "project generated"
        );
        Ok(GenerationReport {
            architecture,
            modules,
        })
    }
}
