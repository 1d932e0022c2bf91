//! Project contributors: the components that write generated files.

use crate::architecture::{ArchitectureId, module_path};
use crate::assembly::{ModuleAssembly, POM_FILE};
use crate::error::GeneratorError;
use crate::properties::{PropertiesContainer, PropertiesCustomizer};
use girder_buildsystem::{BuildSpecification, BuildWriter, IndentingWriter};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Relative path of the module-scoped properties resource.
pub const PROPERTIES_RESOURCE: &str = "src/main/resources/application.properties";

/// Contributes files to a generated project rooted at `project_root`.
///
/// Contributors run sequentially, one at a time; directories are created
/// before files, and a file is created at most once per run.
pub trait ProjectContributor {
    fn contribute(&self, project_root: &Path) -> Result<(), GeneratorError>;
}

/// Writes one `pom.xml` per assembled module, children first, root last.
///
/// Each module's sink is scoped: opened immediately before the renderer is
/// invoked and released on every exit path, including renderer failure.
/// Renderer failures propagate unchanged.
pub struct BuildProjectContributor<'a> {
    assembly: &'a ModuleAssembly,
    writer: &'a dyn BuildWriter,
}

impl<'a> BuildProjectContributor<'a> {
    pub fn new(assembly: &'a ModuleAssembly, writer: &'a dyn BuildWriter) -> Self {
        Self { assembly, writer }
    }

    fn write_pom(&self, path: &Path, build: &BuildSpecification) -> Result<(), GeneratorError> {
        let file = File::create_new(path).map_err(|e| GeneratorError::io(path, e))?;
        let mut sink = BufWriter::new(file);
        let rendered = self.writer.write_build(&mut sink, build);
        let flushed = sink.flush();
        drop(sink);
        rendered.map_err(|e| GeneratorError::io(path, e))?;
        flushed.map_err(|e| GeneratorError::io(path, e))?;
        debug!(path = %path.display(), "contributed build descriptor");
        Ok(())
    }
}

impl ProjectContributor for BuildProjectContributor<'_> {
    fn contribute(&self, project_root: &Path) -> Result<(), GeneratorError> {
        for (module, build) in self.assembly.modules.declared_builds() {
            let module_dir = project_root.join(module);
            fs::create_dir_all(&module_dir).map_err(|e| GeneratorError::io(&module_dir, e))?;
            self.write_pom(&module_dir.join(POM_FILE), build)?;
        }
        self.write_pom(&project_root.join(POM_FILE), &self.assembly.root)
    }
}

/// Writes the module-scoped `application.properties` resource.
///
/// The ordered customizer list fills a fresh container; if nothing was
/// contributed the file is omitted entirely. An already-existing file is
/// left untouched.
pub struct ModulePropertiesContributor<'a> {
    architecture: &'a ArchitectureId,
    base_name: &'a str,
    customizers: &'a [Box<dyn PropertiesCustomizer>],
}

impl<'a> ModulePropertiesContributor<'a> {
    pub fn new(
        architecture: &'a ArchitectureId,
        base_name: &'a str,
        customizers: &'a [Box<dyn PropertiesCustomizer>],
    ) -> Self {
        Self {
            architecture,
            base_name,
            customizers,
        }
    }
}

impl ProjectContributor for ModulePropertiesContributor<'_> {
    fn contribute(&self, project_root: &Path) -> Result<(), GeneratorError> {
        let mut properties = PropertiesContainer::default();
        for customizer in self.customizers {
            customizer.customize(&mut properties);
        }
        if properties.is_empty() {
            return Ok(());
        }

        let module_root = module_path(self.architecture, self.base_name, project_root);
        let output = module_root.join(PROPERTIES_RESOURCE);
        if output.exists() {
            return Ok(());
        }
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|e| GeneratorError::io(parent, e))?;
        }

        let file = File::create_new(&output).map_err(|e| GeneratorError::io(&output, e))?;
        let mut sink = BufWriter::new(file);
        let mut writer = IndentingWriter::new(&mut sink);
        for (name, value) in properties.values() {
            writer
                .println(&format!("{name}={value}"))
                .map_err(|e| GeneratorError::io(&output, e))?;
        }
        sink.flush().map_err(|e| GeneratorError::io(&output, e))?;
        debug!(path = %output.display(), "contributed properties resource");
        Ok(())
    }
}
