//! # girder-generator
//!
//! The module build assembly engine:
//! - `ArchitectureId` resolution (explicit choice → catalog default →
//!   built-in default)
//! - `ModuleGraphBuilder` (which modules exist, how they are wired, the
//!   root aggregator)
//! - `module_path` (where module-scoped resources land on disk)
//! - `PropertiesContainer` + customizer seam
//! - project contributors and the `ProjectGenerator` run driver
//!
//! ## Control flow
//!
//! ```text
//! ProjectDescription ──▶ ArchitectureId::resolve
//!         │                      │
//!         └──▶ ModuleGraphBuilder::assemble ──▶ ModuleAssembly
//!                                                    │
//!                  BuildProjectContributor ◀─────────┤  (pom.xml per module)
//!                  ModulePropertiesContributor ◀─────┘  (application.properties)
//! ```
//!
//! One generation run is single-threaded and owns its object graph; nothing
//! persists or is shared across runs.

pub mod architecture;
pub mod assembly;
pub mod contribute;
pub mod description;
pub mod error;
pub mod generator;
pub mod properties;

pub use architecture::{
    ArchitectureId, FLAT_ARCHITECTURE, LAYERED_ARCHITECTURE, Layer, module_path,
};
pub use assembly::{
    MODULE_BOM_VERSION, ModuleAssembly, ModuleGraphBuilder, PARENT_POM_RELATIVE_PATH, POM_FILE,
};
pub use contribute::{
    BuildProjectContributor, ModulePropertiesContributor, PROPERTIES_RESOURCE, ProjectContributor,
};
pub use description::ProjectDescription;
pub use error::GeneratorError;
pub use generator::{GenerationReport, ProjectGenerator};
pub use properties::{PropertiesContainer, PropertiesCustomizer};
